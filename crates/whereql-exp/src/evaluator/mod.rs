use std::cmp::Ordering;

use crate::core::compare::{Comparison, ConstValue, TestValue};
use crate::core::logic::{Expression, LogicalExpr};
use crate::operator::{LogicOperator, TestOperator};
use crate::traits::{ConditionEvaluator, ValueGetter};

impl<V: ValueGetter> ConditionEvaluator<V> for Expression {
    fn evaluate(&self, data: &V) -> bool {
        match self {
            Expression::Logic(logic) => logic.evaluate(data),
            Expression::Test(test) => test.evaluate(data),
        }
    }
}

impl<V: ValueGetter> ConditionEvaluator<V> for LogicalExpr {
    fn evaluate(&self, data: &V) -> bool {
        match self.op() {
            LogicOperator::And => match self.left() {
                Some(left) => left.evaluate(data) && self.right().evaluate(data),
                None => self.right().evaluate(data),
            },
            LogicOperator::Or => match self.left() {
                Some(left) => left.evaluate(data) || self.right().evaluate(data),
                None => self.right().evaluate(data),
            },
            // unary: a spurious left operand is ignored, as the formatter does
            LogicOperator::Not => !self.right().evaluate(data),
        }
    }
}

impl<V: ValueGetter> ConditionEvaluator<V> for Comparison {
    fn evaluate(&self, data: &V) -> bool {
        match self.op() {
            TestOperator::IsNull => data.get_value(self.left().name()).is_none(),
            TestOperator::IsNotNull => data.get_value(self.left().name()).is_some(),
            TestOperator::Like => text_pair(self, data).is_some_and(|(v, n)| v.contains(&n)),
            TestOperator::StartsWith => {
                text_pair(self, data).is_some_and(|(v, n)| v.starts_with(&n))
            }
            TestOperator::EndsWith => text_pair(self, data).is_some_and(|(v, n)| v.ends_with(&n)),
            TestOperator::InList | TestOperator::NotInList => {
                let hit = match (data.get_value(self.left().name()), self.right().as_ref()) {
                    (Some(value), Some(TestValue::List(items))) => items.contains(value),
                    // missing column or malformed right operand
                    _ => return false,
                };
                if *self.op() == TestOperator::NotInList {
                    !hit
                } else {
                    hit
                }
            }
            TestOperator::Eq
            | TestOperator::Ne
            | TestOperator::Lt
            | TestOperator::Gt
            | TestOperator::Le
            | TestOperator::Ge => {
                let Some(value) = data.get_value(self.left().name()) else {
                    return false;
                };
                let target = match self.right().as_ref() {
                    Some(TestValue::Const(target)) => target,
                    Some(TestValue::Column(column)) => {
                        match data.get_value(column.name()) {
                            Some(target) => target,
                            None => return false,
                        }
                    }
                    _ => return false,
                };
                compare_values(value, target, self.op())
            }
        }
    }
}

/// Left value and needle for the LIKE family, lowercased: pattern matching
/// is case-insensitive, ordinary comparisons are not.
fn text_pair<V: ValueGetter>(test: &Comparison, data: &V) -> Option<(String, String)> {
    let ConstValue::Str(value) = data.get_value(test.left().name())? else {
        return None;
    };
    let Some(TestValue::Const(ConstValue::Str(needle))) = test.right().as_ref() else {
        return None;
    };
    Some((value.to_lowercase(), needle.to_lowercase()))
}

fn compare_values(left: &ConstValue, right: &ConstValue, op: &TestOperator) -> bool {
    let ord = partial_cmp_values(left, right);
    match op {
        TestOperator::Eq => ord == Some(Ordering::Equal),
        TestOperator::Ne => ord != Some(Ordering::Equal),
        TestOperator::Lt => ord == Some(Ordering::Less),
        TestOperator::Gt => ord == Some(Ordering::Greater),
        TestOperator::Le => matches!(ord, Some(Ordering::Less | Ordering::Equal)),
        TestOperator::Ge => matches!(ord, Some(Ordering::Greater | Ordering::Equal)),
        _ => false,
    }
}

/// Int and Float compare numerically across variants; strings compare
/// lexicographically; anything else is unordered.
fn partial_cmp_values(left: &ConstValue, right: &ConstValue) -> Option<Ordering> {
    match (left, right) {
        (ConstValue::Int(a), ConstValue::Int(b)) => Some(a.cmp(b)),
        (ConstValue::Float(a), ConstValue::Float(b)) => a.partial_cmp(b),
        (ConstValue::Int(a), ConstValue::Float(b)) => (*a as f64).partial_cmp(b),
        (ConstValue::Float(a), ConstValue::Int(b)) => a.partial_cmp(&(*b as f64)),
        (ConstValue::Str(a), ConstValue::Str(b)) => Some(a.cmp(b)),
        _ => None,
    }
}
