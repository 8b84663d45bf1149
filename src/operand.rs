//! Operands for the `print` family.
//!
//! Print-style calls take a list of operands and join them the conventional way:
//! string operands are glued together verbatim, and a single space is inserted
//! only between two adjacent operands that are both non-strings.

use std::borrow::Cow;
use std::fmt;

/// A single argument to a print-style call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand<'a> {
    /// String-like operand. Never separated from its neighbours.
    Str(Cow<'a, str>),
    /// Any other value, already rendered with `Display`.
    Value(String),
}

impl Operand<'_> {
    /// Wraps an arbitrary `Display` value as a non-string operand.
    pub fn display(value: impl fmt::Display) -> Self {
        Operand::Value(value.to_string())
    }

    pub fn is_str(&self) -> bool {
        matches!(self, Operand::Str(_))
    }

    pub fn as_text(&self) -> &str {
        match self {
            Operand::Str(s) => s.as_ref(),
            Operand::Value(v) => v.as_str(),
        }
    }
}

impl<'a> From<&'a str> for Operand<'a> {
    fn from(s: &'a str) -> Self {
        Operand::Str(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Operand<'a> {
    fn from(s: &'a String) -> Self {
        Operand::Str(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for Operand<'_> {
    fn from(s: String) -> Self {
        Operand::Str(Cow::Owned(s))
    }
}

impl<'a> From<Cow<'a, str>> for Operand<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        Operand::Str(s)
    }
}

macro_rules! value_operand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Operand<'_> {
                fn from(value: $ty) -> Self {
                    Operand::Value(value.to_string())
                }
            }
        )*
    };
}

value_operand!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool
);

/// Joins operands into one message string.
pub fn sprint<'a, I>(operands: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Operand<'a>>,
{
    let mut out = String::new();
    let mut prev_is_str = true;
    for (i, operand) in operands.into_iter().map(Into::into).enumerate() {
        let is_str = operand.is_str();
        if i > 0 && !is_str && !prev_is_str {
            out.push(' ');
        }
        out.push_str(operand.as_text());
        prev_is_str = is_str;
    }
    out
}
