#[cfg(test)]
mod tests {
    use crate::arg::{list, raw};
    use crate::condition::{Combinator, Condition, Operator};
    use crate::flavor::Flavor;
    use pretty_assertions::assert_eq;

    fn leaf(field: &str, op: Operator, value: impl Into<crate::Arg>) -> String {
        Condition::new(field, op, value).to_sql(Flavor::MySQL)
    }

    #[test]
    fn comparison_operators() {
        let cases = vec![
            ("a = 1", leaf("a", Operator::Equal, 1)),
            ("a <> 1", leaf("a", Operator::NotEqual, 1)),
            ("a > 1", leaf("a", Operator::GreaterThan, 1)),
            ("a >= 1", leaf("a", Operator::GreaterEqualThan, 1)),
            ("a < 1", leaf("a", Operator::LessThan, 1)),
            ("a <= 1", leaf("a", Operator::LessEqualThan, 1)),
            ("a LIKE 'x%'", leaf("a", Operator::Like, "x%")),
            ("a NOT LIKE 'x%'", leaf("a", Operator::NotLike, "x%")),
            ("a ILIKE 'x%'", leaf("a", Operator::ILike, "x%")),
            ("a NOT ILIKE 'x%'", leaf("a", Operator::NotILike, "x%")),
        ];
        for (expected, actual) in cases {
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn membership_renders_parenthesized_list() {
        assert_eq!(leaf("a", Operator::In, [1, 2, 3]), "a IN (1, 2, 3)");
        assert_eq!(
            leaf("a", Operator::NotIn, list(vec!["x", "y"])),
            "a NOT IN ('x', 'y')"
        );
        assert_eq!(leaf("a", Operator::In, 7), "a IN (7)");
    }

    #[test]
    fn empty_membership_list_is_constant() {
        assert_eq!(leaf("a", Operator::In, list(Vec::<i64>::new())), "0 = 1");
        assert_eq!(leaf("a", Operator::NotIn, list(Vec::<i64>::new())), "0 = 0");
    }

    #[test]
    fn null_checks_have_no_value() {
        assert_eq!(leaf("deleted_at", Operator::IsNull, ()), "deleted_at IS NULL");
        assert_eq!(
            leaf("deleted_at", Operator::IsNotNull, 123),
            "deleted_at IS NOT NULL"
        );
    }

    #[test]
    fn range_joins_two_values_with_and() {
        assert_eq!(leaf("age", Operator::Between, [18, 30]), "age BETWEEN 18 AND 30");
        assert_eq!(
            leaf("age", Operator::NotBetween, [18, 30]),
            "age NOT BETWEEN 18 AND 30"
        );
    }

    #[test]
    fn column_comparison_is_not_quoted() {
        let c = Condition::columns("o.user_id", Operator::Equal, "u.id");
        assert_eq!(c.to_sql(Flavor::MySQL), "o.user_id = u.id");
        assert_eq!(
            leaf("created_at", Operator::LessThan, raw("NOW()")),
            "created_at < NOW()"
        );
    }

    #[test]
    fn string_values_follow_flavor() {
        let c = Condition::new("name", Operator::Equal, "O'Brien");
        assert_eq!(c.to_sql(Flavor::MySQL), "name = 'O\\'Brien'");
        assert_eq!(c.to_sql(Flavor::SQLite), "name = 'O''Brien'");
    }

    #[test]
    fn group_omits_first_combinator() {
        let g = Condition::group([
            Condition::new("a", Operator::Equal, 1).or(),
            Condition::new("b", Operator::Equal, 2),
        ]);
        assert!(g.is_group());
        assert_eq!(g.to_sql(Flavor::MySQL), "(a = 1 AND b = 2)");
    }

    #[test]
    fn nested_groups_keep_their_own_combinator() {
        let g = Condition::group([
            Condition::new("a", Operator::Equal, 1),
            Condition::group([
                Condition::new("b", Operator::Equal, 2),
                Condition::new("c", Operator::Equal, 3).or(),
            ])
            .or(),
        ]);
        assert_eq!(g.to_sql(Flavor::MySQL), "(a = 1 OR (b = 2 OR c = 3))");
    }

    #[test]
    fn combinator_defaults_to_and() {
        let c = Condition::new("a", Operator::Equal, 1);
        assert_eq!(c.combinator(), Combinator::And);
        assert_eq!(c.or().combinator(), Combinator::Or);
    }

    #[test]
    fn empty_groups_render_nothing() {
        let empty = Condition::group(Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.to_sql(Flavor::MySQL), "");

        let nested_empty = Condition::group([Condition::group(Vec::new())]);
        assert!(nested_empty.is_empty());

        let g = Condition::group([
            Condition::group(Vec::new()),
            Condition::new("a", Operator::Equal, 1).or(),
            Condition::group(Vec::new()).or(),
            Condition::new("b", Operator::Equal, 2),
        ]);
        assert!(!g.is_empty());
        assert_eq!(g.to_sql(Flavor::MySQL), "(a = 1 AND b = 2)");
    }

    #[test]
    fn borrowed_string_values() {
        let status = String::from("active");
        assert_eq!(leaf("status", Operator::Equal, &status), "status = 'active'");
        assert_eq!(
            leaf("status", Operator::Equal, status.as_str()),
            "status = 'active'"
        );
    }
}
