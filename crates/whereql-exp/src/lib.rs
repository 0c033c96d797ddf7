pub mod builder;
pub mod core;

mod display;
pub mod error;
pub mod evaluator;
pub mod operator;
mod traits;

pub use self::core::compare::{ColumnRef, Comparison, ConstValue, TestValue};
pub use self::core::logic::{Expression, LogicalExpr};
pub use display::format_where;
pub use error::{ExpError, ExpResult};
pub use operator::{LogicOperator, TestOperator};
pub use traits::{ConditionEvaluator, ValueGetter};
