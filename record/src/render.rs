//! Record rendering.
//!
//! A record renders as `Name(field=value, ...)`. Long values are cut short,
//! so the output is for display only and cannot be parsed back.

use std::borrow::Cow;
use std::fmt::Write;

use mutrec_core::Value;

/// Maximum characters of a rendered value before it is truncated.
pub const DEFAULT_MAX_VALUE_CHARS: usize = 10;

/// Marker appended to truncated values.
pub const DEFAULT_ELLIPSIS: &str = "...";

/// Controls how record values are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Values longer than this many characters are truncated. `None` disables
    /// truncation.
    pub max_value_chars: Option<usize>,
    /// Appended after a truncated value.
    pub ellipsis: Cow<'static, str>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_value_chars: Some(DEFAULT_MAX_VALUE_CHARS),
            ellipsis: Cow::Borrowed(DEFAULT_ELLIPSIS),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render values in full.
    pub fn unlimited() -> Self {
        Self {
            max_value_chars: None,
            ..Self::default()
        }
    }

    pub fn with_max_value_chars(mut self, max: usize) -> Self {
        self.max_value_chars = Some(max);
        self
    }

    pub fn with_ellipsis(mut self, ellipsis: impl Into<Cow<'static, str>>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    /// Truncate a rendered value to the configured width.
    ///
    /// Width is counted in characters, never splitting a code point.
    pub fn truncate<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let Some(max) = self.max_value_chars else {
            return Cow::Borrowed(text);
        };
        match text.char_indices().nth(max) {
            Some((cut, _)) => Cow::Owned(format!("{}{}", &text[..cut], self.ellipsis)),
            None => Cow::Borrowed(text),
        }
    }

    /// Render a type name and its `(field, value)` pairs.
    pub fn render<'a, I>(&self, type_name: &str, fields: I) -> String
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        let mut out = String::new();
        let _ = write!(out, "{}(", type_name);
        for (i, (name, value)) in fields.into_iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}={}", name, self.truncate(&value));
        }
        out.push(')');
        out
    }
}

/// Render an optional field through `Value`, the same way a dynamic record
/// field renders. `None` renders as the unset value.
#[doc(hidden)]
pub fn display_optional<T: Clone + Into<Value>>(value: &Option<T>) -> String {
    Value::from(value.clone()).to_string()
}
