//! Plain constructor functions for building expression trees without the
//! parser. These emit exactly the node shapes the grammar emits, so
//! hand-built trees format and evaluate the same way parsed ones do.

use crate::core::compare::{ColumnRef, Comparison, ConstValue, TestValue};
use crate::core::logic::{Expression, LogicalExpr};
use crate::operator::{LogicOperator, TestOperator};

pub fn column<S: Into<String>>(name: S) -> ColumnRef {
    ColumnRef::new(name)
}

fn cmp<C, V>(op: TestOperator, left: C, value: V) -> Expression
where
    C: Into<ColumnRef>,
    V: Into<TestValue>,
{
    Comparison::new(op, left, Some(value.into())).into()
}

pub fn eq<C: Into<ColumnRef>, V: Into<TestValue>>(left: C, value: V) -> Expression {
    cmp(TestOperator::Eq, left, value)
}

pub fn ne<C: Into<ColumnRef>, V: Into<TestValue>>(left: C, value: V) -> Expression {
    cmp(TestOperator::Ne, left, value)
}

pub fn lt<C: Into<ColumnRef>, V: Into<TestValue>>(left: C, value: V) -> Expression {
    cmp(TestOperator::Lt, left, value)
}

pub fn gt<C: Into<ColumnRef>, V: Into<TestValue>>(left: C, value: V) -> Expression {
    cmp(TestOperator::Gt, left, value)
}

pub fn le<C: Into<ColumnRef>, V: Into<TestValue>>(left: C, value: V) -> Expression {
    cmp(TestOperator::Le, left, value)
}

pub fn ge<C: Into<ColumnRef>, V: Into<TestValue>>(left: C, value: V) -> Expression {
    cmp(TestOperator::Ge, left, value)
}

/// Substring containment, i.e. a compiled `LIKE '%needle%'`. The needle is
/// stored without wildcards.
pub fn like<C: Into<ColumnRef>, S: Into<String>>(left: C, needle: S) -> Expression {
    cmp(TestOperator::Like, left, ConstValue::Str(needle.into()))
}

pub fn starts_with<C: Into<ColumnRef>, S: Into<String>>(left: C, needle: S) -> Expression {
    cmp(TestOperator::StartsWith, left, ConstValue::Str(needle.into()))
}

pub fn ends_with<C: Into<ColumnRef>, S: Into<String>>(left: C, needle: S) -> Expression {
    cmp(TestOperator::EndsWith, left, ConstValue::Str(needle.into()))
}

pub fn is_null<C: Into<ColumnRef>>(left: C) -> Expression {
    Comparison::new(TestOperator::IsNull, left, None).into()
}

pub fn is_not_null<C: Into<ColumnRef>>(left: C) -> Expression {
    Comparison::new(TestOperator::IsNotNull, left, None).into()
}

pub fn in_list<C, I>(left: C, items: I) -> Expression
where
    C: Into<ColumnRef>,
    I: IntoIterator,
    I::Item: Into<ConstValue>,
{
    let items = items.into_iter().map(Into::into).collect::<Vec<_>>();
    cmp(TestOperator::InList, left, TestValue::List(items))
}

pub fn not_in_list<C, I>(left: C, items: I) -> Expression
where
    C: Into<ColumnRef>,
    I: IntoIterator,
    I::Item: Into<ConstValue>,
{
    let items = items.into_iter().map(Into::into).collect::<Vec<_>>();
    cmp(TestOperator::NotInList, left, TestValue::List(items))
}

pub fn and(left: Expression, right: Expression) -> Expression {
    LogicalExpr::new(LogicOperator::And, Some(left), right).into()
}

pub fn or(left: Expression, right: Expression) -> Expression {
    LogicalExpr::new(LogicOperator::Or, Some(left), right).into()
}

pub fn not(right: Expression) -> Expression {
    LogicalExpr::new(LogicOperator::Not, None, right).into()
}
