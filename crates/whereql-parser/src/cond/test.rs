use whereql_exp::builder::{
    and, column, ends_with, eq, ge, gt, in_list, is_not_null, is_null, le, like, lt, ne, not,
    not_in_list, or, starts_with,
};
use whereql_exp::{ConstValue, format_where};

use super::parse_where;
use crate::error::{LikePatternError, WhereError};

#[test]
fn test_single_comparisons() {
    assert_eq!(parse_where("a = 1").unwrap(), eq("a", 1));
    assert_eq!(parse_where("a == 1").unwrap(), eq("a", 1));
    assert_eq!(parse_where("a != 1").unwrap(), ne("a", 1));
    assert_eq!(parse_where("a <> 1").unwrap(), ne("a", 1));
    assert_eq!(parse_where("a < 1").unwrap(), lt("a", 1));
    assert_eq!(parse_where("a > 1").unwrap(), gt("a", 1));
    assert_eq!(parse_where("a <= 1").unwrap(), le("a", 1));
    assert_eq!(parse_where("a >= 1").unwrap(), ge("a", 1));
}

#[test]
fn test_value_kinds() {
    assert_eq!(parse_where("a = 1.5").unwrap(), eq("a", 1.5));
    assert_eq!(parse_where("a = -2").unwrap(), eq("a", -2));
    assert_eq!(parse_where("a = -.5").unwrap(), eq("a", -0.5));
    assert_eq!(parse_where("a = 'foo'").unwrap(), eq("a", "foo"));
    assert_eq!(parse_where("a = \"foo\"").unwrap(), eq("a", "foo"));
    assert_eq!(parse_where(r"a = 'it\'s'").unwrap(), eq("a", "it's"));
}

#[test]
fn test_column_to_column() {
    assert_eq!(parse_where("a > b").unwrap(), gt("a", column("b")));
    assert_eq!(
        parse_where("[some col] = [other col]").unwrap(),
        eq(column("some col"), column("other col"))
    );
}

#[test]
fn test_like_compilation_table() {
    assert_eq!(
        parse_where("a like 'foo%'").unwrap(),
        starts_with("a", "foo")
    );
    assert_eq!(parse_where("a like '%foo'").unwrap(), ends_with("a", "foo"));
    assert_eq!(parse_where("a like '%foo%'").unwrap(), like("a", "foo"));
    assert_eq!(parse_where("a like 'foo'").unwrap(), eq("a", "foo"));
    assert_eq!(parse_where("a LIKE 'foo%'").unwrap(), starts_with("a", "foo"));
}

#[test]
fn test_like_rejects_other_wildcard_arrangements() {
    let err = parse_where("a like 'f%o%o'").unwrap_err();
    assert_eq!(
        err,
        WhereError::InvalidPattern(LikePatternError::Unsupported("f%o%o".to_string()))
    );
    assert!(matches!(
        parse_where("a like '%f%o%'").unwrap_err(),
        WhereError::InvalidPattern(LikePatternError::Unsupported(_))
    ));
}

#[test]
fn test_like_rejects_non_string_operand() {
    assert_eq!(
        parse_where("a like 5").unwrap_err(),
        WhereError::InvalidPattern(LikePatternError::NotString)
    );
    assert_eq!(
        parse_where("a like b").unwrap_err(),
        WhereError::InvalidPattern(LikePatternError::NotString)
    );
}

#[test]
fn test_null_tests() {
    assert_eq!(parse_where("a is null").unwrap(), is_null("a"));
    assert_eq!(parse_where("a is not null").unwrap(), is_not_null("a"));
    assert_eq!(parse_where("a IS NOT NULL").unwrap(), is_not_null("a"));
}

#[test]
fn test_list_membership() {
    assert_eq!(parse_where("a in [1, 2, 3]").unwrap(), in_list("a", [1, 2, 3]));
    assert_eq!(parse_where("a in [1,2,3,]").unwrap(), in_list("a", [1, 2, 3]));
    assert_eq!(
        parse_where("a not in ['x', 'y']").unwrap(),
        not_in_list("a", ["x", "y"])
    );
    assert_eq!(
        parse_where("a in [1, 2.5]").unwrap(),
        in_list("a", [ConstValue::Int(1), ConstValue::Float(2.5)])
    );
}

#[test]
fn test_committed_list_failures_are_terminal() {
    assert!(matches!(
        parse_where("a in [1, x]").unwrap_err(),
        WhereError::Syntax { .. }
    ));
    assert!(matches!(
        parse_where("a in []").unwrap_err(),
        WhereError::Syntax { .. }
    ));
    assert!(matches!(
        parse_where("a in 5").unwrap_err(),
        WhereError::Syntax { .. }
    ));
}

#[test]
fn test_boolean_combinators_fold_left() {
    assert_eq!(
        parse_where("a = 1 and b = 2").unwrap(),
        and(eq("a", 1), eq("b", 2))
    );
    assert_eq!(
        parse_where("a = 1 and b = 2 and c = 3").unwrap(),
        and(and(eq("a", 1), eq("b", 2)), eq("c", 3))
    );
    // AND and OR share one tier: strict left-to-right folding
    assert_eq!(
        parse_where("a = 1 and b = 2 or c = 3").unwrap(),
        or(and(eq("a", 1), eq("b", 2)), eq("c", 3))
    );
    assert_eq!(
        parse_where("a = 1 or b = 2 and c = 3").unwrap(),
        and(or(eq("a", 1), eq("b", 2)), eq("c", 3))
    );
}

#[test]
fn test_brackets_reset_precedence() {
    assert_eq!(
        parse_where("a = 1 and (b = 2 or c = 3)").unwrap(),
        and(eq("a", 1), or(eq("b", 2), eq("c", 3)))
    );
    assert_eq!(parse_where("((a = 1))").unwrap(), eq("a", 1));
}

#[test]
fn test_unary_not_binds_one_test() {
    assert_eq!(
        parse_where("not a = 1 and b = 2").unwrap(),
        and(not(eq("a", 1)), eq("b", 2))
    );
    assert_eq!(
        parse_where("not (a = 1 and b = 2)").unwrap(),
        not(and(eq("a", 1), eq("b", 2)))
    );
    assert_eq!(parse_where("not not a = 1").unwrap(), not(not(eq("a", 1))));
}

#[test]
fn test_keywords_do_not_swallow_identifiers() {
    assert_eq!(parse_where("android = 1").unwrap(), eq("android", 1));
    assert_eq!(parse_where("orders = 2").unwrap(), eq("orders", 2));
    assert_eq!(parse_where("nota = 3").unwrap(), eq("nota", 3));
    assert_eq!(parse_where("a = 1 and island = 2").unwrap(),
        and(eq("a", 1), eq("island", 2)));
}

#[test]
fn test_trailing_input_is_rejected() {
    assert_eq!(
        parse_where("a = 1 extra").unwrap_err(),
        WhereError::TrailingInput("extra".to_string())
    );
    assert!(matches!(
        parse_where("a = 1 ) and b = 2").unwrap_err(),
        WhereError::TrailingInput(_)
    ));
}

#[test]
fn test_syntax_errors_carry_position() {
    let WhereError::Syntax { line, column, detail } = parse_where("a == ").unwrap_err() else {
        panic!("expected a syntax error");
    };
    assert_eq!(line, 1);
    assert!(column > 1);
    assert!(detail.contains('^'), "snippet missing caret: {detail}");

    assert!(matches!(
        parse_where("").unwrap_err(),
        WhereError::Syntax { .. }
    ));
    assert!(matches!(
        parse_where("= 1").unwrap_err(),
        WhereError::Syntax { .. }
    ));
    assert!(matches!(
        parse_where("a = 1 and (b = 2").unwrap_err(),
        WhereError::Syntax { .. }
    ));
}

#[test]
fn test_multiline_input_parses() {
    let exp = parse_where("a == 1 AND\nb == 2 AND\nc == 3").unwrap();
    assert_eq!(exp, and(and(eq("a", 1), eq("b", 2)), eq("c", 3)));
}

#[test]
fn test_format_output_reparses() {
    let exp = parse_where("not a like 'J%' and (b = 2 or [big col] <= 3.5)").unwrap();
    let text = format_where(&exp).unwrap();
    assert_eq!(parse_where(&text).unwrap(), exp);
}
