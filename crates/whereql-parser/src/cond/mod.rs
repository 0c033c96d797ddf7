//! Boolean where-expression grammar: single-column tests combined by
//! NOT / AND / OR, with bracketed sub-expressions.

use whereql_exp::Expression;

use crate::error::{WhereError, WhereResult};

mod cmp;
mod parser;
#[cfg(test)]
mod test;

pub use cmp::test_exp;
pub use parser::where_exp;

/// Parse one complete where-expression.
///
/// The whole input must be consumed; anything left after the expression is
/// a [`WhereError::TrailingInput`]. AND and OR share one precedence tier
/// and fold left-to-right, so `a = 1 or b = 2 and c = 3` groups as
/// `((a = 1 or b = 2) and c = 3)`.
///
/// ```rust
/// use whereql_parser::parse_where;
/// use whereql_exp::builder::{not, eq};
///
/// let exp = parse_where("not [some col] = 1").unwrap();
/// assert_eq!(exp, not(eq(whereql_exp::builder::column("some col"), 1)));
/// ```
pub fn parse_where(input: &str) -> WhereResult<Expression> {
    let mut data = input;
    match where_exp(&mut data) {
        Ok(exp) => {
            let rest = data.trim();
            if rest.is_empty() {
                Ok(exp)
            } else {
                Err(WhereError::TrailingInput(rest.to_string()))
            }
        }
        Err(err) => Err(WhereError::from_syntax(err, input, data)),
    }
}
