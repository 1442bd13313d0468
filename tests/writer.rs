#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rust_decimal::Decimal;
    use sqlbind::{
        AsValue, BindError, GenericSqlWriter, NamedSqlWriter, Param, PostgresSqlWriter,
        RenderedQuery, SqlWriter, TemplateBuilder, Value, sql,
    };
    use time::macros::{date, datetime, time};
    use uuid::Uuid;

    const GENERIC: GenericSqlWriter = GenericSqlWriter {};
    const POSTGRES: PostgresSqlWriter = PostgresSqlWriter {};
    const NAMED: NamedSqlWriter = NamedSqlWriter {};

    fn inline(value: Value) -> String {
        let mut out = String::new();
        GENERIC.write_value(&mut out, &value);
        out
    }

    #[test]
    fn generic_placeholders() {
        let v = Param::new("value", 1);
        let template = sql!("SELECT 1 WHERE " {&v} " >= 0 OR " {&v} " <= 0");
        let query = template.bind(&GENERIC).unwrap();
        assert_eq!(query.text, "SELECT 1 WHERE ? >= 0 OR ? <= 0");
    }

    #[test]
    fn postgres_placeholders() {
        let template = sql!("SELECT " {1} ", " {2} ", " {3});
        let query = template.bind(&POSTGRES).unwrap();
        assert_eq!(query.text, "SELECT $1, $2, $3");
    }

    #[test]
    fn named_placeholders() {
        let v = Param::new("value", 1);
        let template = sql!("SELECT 1 WHERE " {&v} " >= 0 AND x = " {"y"});
        let query = template.bind(&NAMED).unwrap();
        assert_eq!(query.text, "SELECT 1 WHERE :value >= 0 AND x = :p2");
        assert_eq!(query.parameters[0].name, "value");
        assert_eq!(query.parameters[1].name, "p2");
    }

    #[test]
    fn named_writer_uses_one_token_per_identity() {
        let v = Param::new("value", 1);
        let template = sql!("SELECT 1\nWHERE " {&v} " >= 0 OR " {&v} " <= 0");
        let query = template.bind(&NAMED).unwrap();
        assert_eq!(
            query.text,
            indoc! {"
                SELECT 1
                WHERE :value >= 0 OR :value <= 0"}
        );
        assert_eq!(query.parameters.len(), 1);
    }

    #[test]
    fn inline_null_and_bool() {
        assert_eq!(inline(Value::Null), "NULL");
        assert_eq!(inline(Value::Int32(None)), "NULL");
        assert_eq!(inline(true.as_value()), "true");
        assert_eq!(inline(false.as_value()), "false");
    }

    #[test]
    fn inline_numbers() {
        assert_eq!(inline(42_i32.as_value()), "42");
        assert_eq!(inline((-7_i64).as_value()), "-7");
        assert_eq!(inline(1.5_f64.as_value()), "1.5");
        assert_eq!(inline(Decimal::new(12345, 2).as_value()), "123.45");
    }

    #[test]
    fn inline_strings_are_escaped() {
        assert_eq!(inline("hello".as_value()), "'hello'");
        assert_eq!(inline("it's".as_value()), "'it''s'");
        assert_eq!(inline("a\nb".as_value()), "'a\\nb'");
    }

    #[test]
    fn inline_blob() {
        assert_eq!(inline(vec![0_u8, 15, 255].as_value()), r"'\x00\x0F\xFF'");
    }

    #[test]
    fn inline_temporal() {
        assert_eq!(inline(date!(2026 - 08 - 31).as_value()), "'2026-08-31'");
        assert_eq!(inline(time!(13:37:00.5).as_value()), "'13:37:00.5'");
        assert_eq!(
            inline(datetime!(2026-08-31 13:37).as_value()),
            "'2026-08-31T13:37:00.0'"
        );
        assert_eq!(
            inline(datetime!(2026-08-31 13:37 +2).as_value()),
            "'2026-08-31T13:37:00.0+02:00'"
        );
    }

    #[test]
    fn inline_uuid() {
        let var = Uuid::parse_str("a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8").unwrap();
        assert_eq!(
            inline(var.as_value()),
            "'a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8'"
        );
    }

    #[test]
    fn inline_list() {
        assert_eq!(inline(vec![1_i32, 2, 3].as_value()), "[1,2,3]");
        assert_eq!(
            inline(vec!["a".to_string(), "b".to_string()].as_value()),
            "['a','b']"
        );
    }

    #[test]
    fn render_inlined_substitutes_values() {
        let v = Param::new("value", 1);
        let template = sql!("SELECT 1\nWHERE " {&v} " >= 0 OR " {&v} " <= 0");
        assert_eq!(
            template.render_inlined(&GENERIC).unwrap(),
            indoc! {"
                SELECT 1
                WHERE 1 >= 0 OR 1 <= 0"}
        );
    }

    #[test]
    fn render_inlined_escapes_strings() {
        let template = sql!("SELECT * FROM t WHERE name = " {"O'Brien"});
        assert_eq!(
            template.render_inlined(&GENERIC).unwrap(),
            "SELECT * FROM t WHERE name = 'O''Brien'"
        );
    }

    #[test]
    fn render_inlined_rejects_foreign_slot_ids() {
        let mut other = TemplateBuilder::new();
        other.slot(1);
        other.slot(2);
        let foreign = other.slot(3);
        let mut builder = TemplateBuilder::new();
        builder.literal("SELECT ");
        builder.slot(foreign);
        let error = builder.finish().render_inlined(&GENERIC).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<BindError>(),
            Some(BindError::MalformedTemplate(..))
        ));
    }

    #[test]
    fn display_keeps_short_queries_whole() {
        let query = RenderedQuery {
            text: "SELECT 1".into(),
            parameters: vec![],
        };
        assert_eq!(query.to_string(), "SELECT 1");
    }

    #[test]
    fn display_truncates_on_char_boundaries() {
        let query = RenderedQuery {
            text: "é".repeat(300),
            parameters: vec![],
        };
        // The byte limit falls inside a two-byte character; truncation backs
        // up to the previous boundary instead of panicking.
        assert_eq!(query.to_string(), format!("{}...", "é".repeat(248)));
    }

    #[test]
    fn parameter_support_matrix() {
        assert!(NAMED.parameter_supported(&Value::Int32(Some(1))));
        assert!(!NAMED.parameter_supported(&vec![1_i32].as_value()));
        assert!(GENERIC.parameter_supported(&vec![1_i32].as_value()));
        assert!(POSTGRES.parameter_supported(&Value::Uuid(None)));
    }
}
