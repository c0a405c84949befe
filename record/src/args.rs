//! Constructor arguments.

use mutrec_core::Value;

/// Positional and keyword arguments for constructing a record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    positional: Vec<Value>,
    keywords: Vec<(String, Value)>,
}

impl Args {
    /// Create an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an argument list from positional values only.
    pub fn from_positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            keywords: Vec::new(),
        }
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.push(value);
        self
    }

    /// Append a keyword argument.
    pub fn kwarg(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push_keyword(field, value);
        self
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.positional.push(value.into());
    }

    pub fn push_keyword(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.keywords.push((field.into(), value.into()));
    }

    /// Positional values, in order.
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Keyword arguments, in the order they were given.
    pub fn keywords(&self) -> &[(String, Value)] {
        &self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keywords.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Vec<Value>, Vec<(String, Value)>) {
        (self.positional, self.keywords)
    }
}

/// Build constructor arguments.
///
/// Positional values come first; keyword arguments follow a `;`.
///
/// ```
/// use mutrec_record::{args, define_record_type};
///
/// let point = define_record_type("Point", ["x", "y", "z"]);
/// let p = point.construct(args![1, 2; z = 3]).unwrap();
/// assert_eq!(p.to_string(), "Point(x=1, y=2, z=3)");
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::new()
    };
    ($($value:expr),* ; $($key:ident = $kwvalue:expr),* $(,)?) => {
        {
            let mut args = $crate::Args::new();
            $(
                args.push($value);
            )*
            $(
                args.push_keyword(stringify!($key), $kwvalue);
            )*
            args
        }
    };
    ($($value:expr),+ $(,)?) => {
        {
            let mut args = $crate::Args::new();
            $(
                args.push($value);
            )+
            args
        }
    };
}
