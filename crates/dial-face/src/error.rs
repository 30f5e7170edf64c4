use std::fmt;

/// A time-of-day field outside its valid range.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeError {
    pub field: &'static str,
    pub value: u32,
    /// Largest accepted value for `field` (inclusive).
    pub max: u32,
}

impl TimeError {
    pub(crate) fn new(field: &'static str, value: u32, max: u32) -> Self {
        Self { field, value, max }
    }
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {} (expected 0..={})", self.field, self.value, self.max)
    }
}

impl std::error::Error for TimeError {}

/// A clock style length that cannot be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleError(pub String);

impl StyleError {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clock style error: {}", self.0)
    }
}

impl std::error::Error for StyleError {}
