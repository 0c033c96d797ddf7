use derive_getters::Getters;

use crate::operator::LogicOperator;

use super::compare::Comparison;

/// A boolean combinator node. `left` is `None` exactly for unary `not`;
/// `and`/`or` are strictly binary and chains nest through `left`.
#[derive(Debug, PartialEq, Clone, Getters)]
pub struct LogicalExpr {
    op: LogicOperator,
    left: Option<Box<Expression>>,
    right: Box<Expression>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Logic(LogicalExpr),
    Test(Comparison),
}

impl LogicalExpr {
    pub fn new(op: LogicOperator, left: Option<Expression>, right: Expression) -> Self {
        Self {
            op,
            left: left.map(Box::new),
            right: Box::new(right),
        }
    }
}

impl From<LogicalExpr> for Expression {
    fn from(logic: LogicalExpr) -> Self {
        Expression::Logic(logic)
    }
}

impl From<Comparison> for Expression {
    fn from(test: Comparison) -> Self {
        Expression::Test(test)
    }
}
