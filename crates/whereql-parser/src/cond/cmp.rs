use whereql_exp::{ColumnRef, Comparison, ConstValue, TestOperator, TestValue};
use winnow::combinator::{alt, cut_err};
use winnow::error::{ContextError, ErrMode, FromExternalError};
use winnow::{ModalResult as WResult, Parser};

use crate::atom::column_ref;
use crate::error::LikePatternError;
use crate::symbol::{CmpSymbol, ctx_desc, kw_in, kw_is, kw_not, kw_null, symbol_cmp};
use crate::value::{constant, list_literal};

/// One test, by ordered choice: infix comparison, NULL test, NOT NULL
/// test, list membership, negated list membership. The first alternative
/// to match wins.
pub fn test_exp(data: &mut &str) -> WResult<Comparison> {
    alt((
        infix_test,
        null_test,
        not_null_test,
        inlist_test,
        not_inlist_test,
    ))
    .parse_next(data)
}

fn infix_test(data: &mut &str) -> WResult<Comparison> {
    let left = column_ref(data)?;
    let op = symbol_cmp(data)?;
    // the operator commits this alternative; a missing value is terminal
    let value = cut_err(test_value)
        .context(ctx_desc("expected value"))
        .parse_next(data)?;
    if op == CmpSymbol::Like {
        return match compile_like(left, value) {
            Ok(test) => Ok(test),
            Err(err) => Err(ErrMode::Cut(ContextError::from_external_error(data, err))),
        };
    }
    Ok(Comparison::new(op_from(op), left, Some(value)))
}

fn test_value(data: &mut &str) -> WResult<TestValue> {
    alt((
        constant.map(TestValue::Const),
        column_ref.map(TestValue::Column),
    ))
    .parse_next(data)
}

fn null_test(data: &mut &str) -> WResult<Comparison> {
    let left = column_ref(data)?;
    kw_is.parse_next(data)?;
    kw_null.parse_next(data)?;
    Ok(Comparison::new(TestOperator::IsNull, left, None))
}

fn not_null_test(data: &mut &str) -> WResult<Comparison> {
    let left = column_ref(data)?;
    kw_is.parse_next(data)?;
    kw_not.parse_next(data)?;
    kw_null.parse_next(data)?;
    Ok(Comparison::new(TestOperator::IsNotNull, left, None))
}

fn inlist_test(data: &mut &str) -> WResult<Comparison> {
    let left = column_ref(data)?;
    kw_in.parse_next(data)?;
    let items = cut_err(list_literal)
        .context(ctx_desc("expected list"))
        .parse_next(data)?;
    Ok(Comparison::new(
        TestOperator::InList,
        left,
        Some(TestValue::List(items)),
    ))
}

fn not_inlist_test(data: &mut &str) -> WResult<Comparison> {
    let left = column_ref(data)?;
    kw_not.parse_next(data)?;
    kw_in.parse_next(data)?;
    let items = cut_err(list_literal)
        .context(ctx_desc("expected list"))
        .parse_next(data)?;
    Ok(Comparison::new(
        TestOperator::NotInList,
        left,
        Some(TestValue::List(items)),
    ))
}

fn op_from(symbol: CmpSymbol) -> TestOperator {
    match symbol {
        CmpSymbol::Eq => TestOperator::Eq,
        CmpSymbol::Ne => TestOperator::Ne,
        CmpSymbol::Gt => TestOperator::Gt,
        CmpSymbol::Ge => TestOperator::Ge,
        CmpSymbol::Lt => TestOperator::Lt,
        CmpSymbol::Le => TestOperator::Le,
        // LIKE never reaches here: it is compiled, not mapped
        CmpSymbol::Like => TestOperator::Like,
    }
}

/// Rewrite a `%`-wildcard LIKE pattern into the specific operator it
/// means: no wildcard is plain equality, a leading or trailing wildcard is
/// a suffix or prefix match, one of each is containment. Any other
/// arrangement is unsupported.
fn compile_like(left: ColumnRef, value: TestValue) -> Result<Comparison, LikePatternError> {
    let TestValue::Const(ConstValue::Str(pattern)) = value else {
        return Err(LikePatternError::NotString);
    };
    let wildcards = pattern.matches('%').count();
    let (op, needle) = match wildcards {
        0 => (TestOperator::Eq, pattern),
        1 if pattern.starts_with('%') => (TestOperator::EndsWith, pattern[1..].to_string()),
        1 if pattern.ends_with('%') => {
            let end = pattern.len() - 1;
            (TestOperator::StartsWith, pattern[..end].to_string())
        }
        2 if pattern.starts_with('%') && pattern.ends_with('%') => {
            let end = pattern.len() - 1;
            (TestOperator::Like, pattern[1..end].to_string())
        }
        _ => return Err(LikePatternError::Unsupported(pattern)),
    };
    Ok(Comparison::new(
        op,
        left,
        Some(TestValue::Const(ConstValue::Str(needle))),
    ))
}
