use whereql_exp::{Expression, LogicOperator, LogicalExpr};
use winnow::ascii::multispace0;
use winnow::combinator::{cut_err, opt};
use winnow::{ModalResult as WResult, Parser};

use crate::symbol::{ctx_desc, kw_and, kw_not, kw_or, symbol_bracket_beg, symbol_bracket_end};

use super::cmp::test_exp;

/// Full expression: operands folded left-to-right by whichever of AND / OR
/// appears next. Both keywords sit on one precedence tier; the fold alone
/// decides the grouping.
pub fn where_exp(data: &mut &str) -> WResult<Expression> {
    let mut left = operand_exp
        .context(ctx_desc("expected expression"))
        .parse_next(data)?;
    loop {
        if opt(kw_and).parse_next(data)?.is_some() {
            let right = cut_err(operand_exp)
                .context(ctx_desc("expected expression"))
                .parse_next(data)?;
            left = LogicalExpr::new(LogicOperator::And, Some(left), right).into();
            continue;
        }
        if opt(kw_or).parse_next(data)?.is_some() {
            let right = cut_err(operand_exp)
                .context(ctx_desc("expected expression"))
                .parse_next(data)?;
            left = LogicalExpr::new(LogicOperator::Or, Some(left), right).into();
            continue;
        }
        break;
    }
    Ok(left)
}

/// One operand: prefix NOT (right-associative, binds before AND/OR), a
/// bracketed group, or a single test.
fn operand_exp(data: &mut &str) -> WResult<Expression> {
    multispace0.parse_next(data)?;
    if opt(kw_not).parse_next(data)?.is_some() {
        let right = cut_err(operand_exp)
            .context(ctx_desc("expected expression"))
            .parse_next(data)?;
        return Ok(LogicalExpr::new(LogicOperator::Not, None, right).into());
    }
    if opt(symbol_bracket_beg).parse_next(data)?.is_some() {
        let group = cut_err(where_exp)
            .context(ctx_desc("expected expression"))
            .parse_next(data)?;
        cut_err(symbol_bracket_end).parse_next(data)?;
        return Ok(group);
    }
    test_exp(data).map(Expression::from)
}
