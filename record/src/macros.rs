//! Record structs declared at compile time.

/// Declare a struct that behaves like a record type with a fixed schema.
///
/// Every field is stored as an `Option`, with `None` playing the role of an
/// unset field. The struct gets `Default`, a positional `new`, and a
/// `Display`/`Debug` rendering identical to a dynamic record's. Field types
/// must be `Clone + Into<Value>`, since each field renders through `Value`.
///
/// ```
/// mutrec_record::record_struct! {
///     #[derive(Clone, PartialEq)]
///     pub struct Point {
///         pub x: i64,
///         pub y: i64,
///     }
/// }
///
/// let mut p = Point::new(Some(1), None);
/// p.y = Some(2);
/// assert_eq!(p.to_string(), "Point(x=1, y=2)");
/// ```
#[macro_export]
macro_rules! record_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($field_vis:vis $field:ident : $ty:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Default)]
        $vis struct $name {
            $($field_vis $field: ::std::option::Option<$ty>,)*
        }

        impl $name {
            /// Field names in declaration order.
            pub const FIELD_NAMES: &'static [&'static str] = &[$(stringify!($field)),*];

            /// Create a value from positional fields.
            #[allow(clippy::too_many_arguments)]
            pub fn new($($field: ::std::option::Option<$ty>),*) -> Self {
                Self { $($field,)* }
            }

            /// Render with a non-default configuration.
            pub fn render_with(&self, config: &$crate::RenderConfig) -> ::std::string::String {
                config.render(
                    stringify!($name),
                    [$((stringify!($field), $crate::render::display_optional(&self.$field))),*],
                )
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.render_with(&$crate::RenderConfig::default()))
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }
    };
}
