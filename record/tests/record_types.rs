//! Record type integration tests.
//!
//! Test modules:
//! - factory: type identity and independence of definitions
//! - construction: positional binding, keywords, argument errors
//! - mutation: reassignment visible through reads and rendering
//! - rendering: layout and value truncation

use mutrec_record::{args, define_record_type, Args, RecordError, RecordType, Value};
use pretty_assertions::assert_eq;

fn foo_bar_baz() -> RecordType {
    define_record_type("F", ["foo", "bar", "baz"])
}

mod factory {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_each_definition_is_its_own_type() {
        let first = foo_bar_baz();
        let second = foo_bar_baz();
        assert_ne!(first, second);

        let a = first.construct(args![1, 2, 3]).unwrap();
        let b = second.construct(args![1, 2, 3]).unwrap();
        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(a.record_type(), &first);
        assert_eq!(b.record_type(), &second);
    }

    #[test]
    fn test_types_can_be_shared_across_threads() {
        let ty = foo_bar_baz();
        let handle = std::thread::spawn(move || ty.construct(args![1]).map(|r| r.to_string()));
        assert_eq!(
            handle.join().unwrap().unwrap(),
            "F(foo=1, bar=None, baz=None)"
        );
    }
}

mod construction {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_positional_prefix_leaves_rest_unset() {
        let ty = foo_bar_baz();
        for supplied in 0..=ty.field_count() {
            let record = ty.from_values(0..supplied as i64).unwrap();
            for (index, (_, value)) in record.fields().enumerate() {
                if index < supplied {
                    assert_eq!(value, &Value::Int(index as i64));
                } else {
                    assert!(value.is_unset(), "field {} should be unset", index);
                }
            }
        }
    }

    #[test]
    fn test_one_argument_too_many() {
        for count in 0..4usize {
            let fields: Vec<String> = (0..count).map(|i| format!("f{}", i)).collect();
            let ty = define_record_type("T", fields);
            let err = ty
                .construct(Args::from_positional(0..=count as i64))
                .unwrap_err();
            assert_eq!(
                err,
                RecordError::TooManyArguments {
                    type_name: "T".to_string(),
                    expected: count,
                    given: count + 1,
                }
            );
        }
    }

    #[test]
    fn test_four_positional_for_three_fields() {
        let err = foo_bar_baz().construct(args![1, 2, 3, 4]).unwrap_err();
        assert!(matches!(err, RecordError::TooManyArguments { .. }));
        assert!(err.to_string().contains("F"));
    }

    #[test]
    fn test_unknown_keyword() {
        let err = foo_bar_baz().construct(args![; qux = 5]).unwrap_err();
        assert_eq!(err.to_string(), "qux not a valid field in F");
    }

    #[test]
    fn test_keyword_wins_over_positional() {
        let record = foo_bar_baz()
            .construct(args![1, 2, 3; bar = "kw"])
            .unwrap();
        assert_eq!(record.to_string(), "F(foo=1, bar=kw, baz=3)");
    }

    #[test]
    fn test_keyword_fields_with_reserved_names() {
        let ty = define_record_type("Token", ["type", "value"]);
        let record = ty
            .construct(Args::new().kwarg("type", "ident").arg("x"))
            .unwrap();
        assert_eq!(record.to_string(), "Token(type=ident, value=None)");
    }
}

mod mutation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_documented_example() {
        let ty = foo_bar_baz();
        let mut t = ty.construct(args![1; bar = 2, baz = 3]).unwrap();
        t.set("baz", 9).unwrap();
        assert_eq!(t.get("baz"), Some(&Value::Int(9)));
        assert_eq!(t.to_string(), "F(foo=1, bar=2, baz=9)");
    }

    #[test]
    fn test_every_field_is_assignable() {
        let ty = foo_bar_baz();
        let mut record = ty.new_record();
        for name in ty.field_names() {
            record.set(name, name.as_str()).unwrap();
        }
        assert_eq!(record.to_string(), "F(foo=foo, bar=bar, baz=baz)");
    }

    #[test]
    fn test_field_set_is_fixed() {
        let ty = foo_bar_baz();
        let mut record = ty.new_record();
        assert!(record.set("qux", 1).is_err());
        assert_eq!(record.fields().count(), 3);
    }
}

mod rendering {
    use super::*;
    use pretty_assertions::assert_eq;
    use mutrec_record::RenderConfig;

    #[test]
    fn test_ten_characters_render_verbatim() {
        let ty = define_record_type("S", ["s"]);
        let record = ty.construct(args!["abcdefghij"]).unwrap();
        assert_eq!(record.to_string(), "S(s=abcdefghij)");
    }

    #[test]
    fn test_eleven_characters_are_truncated() {
        let ty = define_record_type("S", ["s"]);
        let record = ty.construct(args!["abcdefghijk"]).unwrap();
        assert_eq!(record.to_string(), "S(s=abcdefghij...)");
    }

    #[test]
    fn test_truncation_applies_to_stringified_numbers() {
        let ty = define_record_type("N", ["n"]);
        let record = ty.construct(args![12345678901i64]).unwrap();
        assert_eq!(record.to_string(), "N(n=1234567890...)");
    }

    #[test]
    fn test_display_and_debug_agree() {
        let record = foo_bar_baz()
            .construct(args![1.5, vec![1, 2, 3, 4, 5]])
            .unwrap();
        assert_eq!(record.to_string(), "F(foo=1.5, bar=[1, 2, 3, ..., baz=None)");
        assert_eq!(format!("{:?}", record), record.to_string());
    }

    #[test]
    fn test_render_with_unlimited() {
        let ty = define_record_type("S", ["s"]);
        let record = ty.construct(args!["abcdefghijk"]).unwrap();
        assert_eq!(
            record.render_with(&RenderConfig::unlimited()),
            "S(s=abcdefghijk)"
        );
    }
}
