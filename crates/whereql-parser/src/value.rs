use whereql_exp::ConstValue;
use winnow::ascii::{digit0, digit1, multispace0};
use winnow::combinator::{alt, cut_err, not, opt, terminated};
use winnow::{ModalResult as WResult, Parser};

use crate::atom::quot_str;
use crate::symbol::{ctx_desc, symbol_brackets_beg, symbol_brackets_end, symbol_comma};

/// Integer literal. A trailing `.digit` belongs to a float, so the digits
/// must not be followed by a decimal point.
pub fn int_const(input: &mut &str) -> WResult<ConstValue> {
    terminated((opt('-'), digit1).take(), not('.'))
        .try_map(str::parse::<i64>)
        .map(ConstValue::Int)
        .parse_next(input)
}

/// Float literal with a mandatory decimal point; `.5` and `-.5` are valid.
pub fn float_const(input: &mut &str) -> WResult<ConstValue> {
    (opt('-'), digit0, '.', digit1)
        .take()
        .try_map(str::parse::<f64>)
        .map(ConstValue::Float)
        .parse_next(input)
}

/// One constant: quoted string, float or integer, in that order.
pub fn constant(data: &mut &str) -> WResult<ConstValue> {
    multispace0.parse_next(data)?;
    alt((quot_str.map(ConstValue::Str), float_const, int_const))
        .context(ctx_desc("expected constant"))
        .parse_next(data)
}

/// List literal `[c1, c2, ...]` of one or more constants with an optional
/// trailing comma. Once the `[` is open the parse is committed: failing to
/// complete the list is terminal, never a backtrack into another branch.
pub fn list_literal(data: &mut &str) -> WResult<Vec<ConstValue>> {
    symbol_brackets_beg.parse_next(data)?;
    let first = cut_err(constant)
        .context(ctx_desc("expected list"))
        .parse_next(data)?;
    let mut items = vec![first];
    loop {
        multispace0.parse_next(data)?;
        if opt(symbol_brackets_end).parse_next(data)?.is_some() {
            break;
        }
        cut_err(symbol_comma)
            .context(ctx_desc("expected list"))
            .parse_next(data)?;
        multispace0.parse_next(data)?;
        if opt(symbol_brackets_end).parse_next(data)?.is_some() {
            break;
        }
        let item = cut_err(constant)
            .context(ctx_desc("expected list"))
            .parse_next(data)?;
        items.push(item);
    }
    Ok(items)
}
