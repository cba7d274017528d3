//! Resolve-with-default rule shared by whole records and single fields.
//!
//! A value only overrides its default when it carries content. The same rule
//! picks the fallback library over an empty lookup result and a placeholder
//! over an empty phone number.

use crate::domain::Library;

/// Whether a value carries content worth showing.
pub trait Present {
    /// Returns `true` when the value should override a default.
    fn is_present(&self) -> bool;
}

impl Present for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Present for &str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Present for u64 {
    fn is_present(&self) -> bool {
        *self != 0
    }
}

impl Present for i32 {
    fn is_present(&self) -> bool {
        *self != 0
    }
}

impl Present for f64 {
    fn is_present(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Present for Library {
    fn is_present(&self) -> bool {
        true
    }
}

/// Keeps the value only if it is present.
pub fn present<T: Present>(value: Option<T>) -> Option<T> {
    value.filter(|value| value.is_present())
}

/// Returns the value if present, otherwise the default.
pub fn resolve_or<T: Present>(value: Option<T>, default: T) -> T {
    present(value).unwrap_or(default)
}
