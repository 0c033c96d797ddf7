use derive_getters::Getters;

use crate::operator::TestOperator;

/// A named column. Both surface spellings (`name` and `[name]`) collapse
/// into this one node kind; the bracketed form is reconstructed on output
/// when the name contains a space.
#[derive(Debug, PartialEq, Clone)]
pub struct ColumnRef {
    name: String,
}

impl ColumnRef {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for ColumnRef {
    fn from(name: &str) -> Self {
        ColumnRef::new(name)
    }
}

impl From<String> for ColumnRef {
    fn from(name: String) -> Self {
        ColumnRef::new(name)
    }
}

/// A literal constant. Strings hold the unescaped value.
#[derive(Debug, PartialEq, Clone)]
pub enum ConstValue {
    Str(String),
    Int(i64),
    Float(f64),
}

impl From<&str> for ConstValue {
    fn from(value: &str) -> Self {
        ConstValue::Str(value.to_string())
    }
}

impl From<String> for ConstValue {
    fn from(value: String) -> Self {
        ConstValue::Str(value)
    }
}

impl From<i64> for ConstValue {
    fn from(value: i64) -> Self {
        ConstValue::Int(value)
    }
}

impl From<i32> for ConstValue {
    fn from(value: i32) -> Self {
        ConstValue::Int(i64::from(value))
    }
}

impl From<f64> for ConstValue {
    fn from(value: f64) -> Self {
        ConstValue::Float(value)
    }
}

/// Right operand of a test. Lists are only meaningful under the
/// membership operators; the formatter rejects other placements.
#[derive(Debug, PartialEq, Clone)]
pub enum TestValue {
    Const(ConstValue),
    Column(ColumnRef),
    List(Vec<ConstValue>),
}

impl From<ConstValue> for TestValue {
    fn from(value: ConstValue) -> Self {
        TestValue::Const(value)
    }
}

impl From<ColumnRef> for TestValue {
    fn from(column: ColumnRef) -> Self {
        TestValue::Column(column)
    }
}

impl From<Vec<ConstValue>> for TestValue {
    fn from(items: Vec<ConstValue>) -> Self {
        TestValue::List(items)
    }
}

impl From<&str> for TestValue {
    fn from(value: &str) -> Self {
        TestValue::Const(value.into())
    }
}

impl From<String> for TestValue {
    fn from(value: String) -> Self {
        TestValue::Const(value.into())
    }
}

impl From<i64> for TestValue {
    fn from(value: i64) -> Self {
        TestValue::Const(value.into())
    }
}

impl From<i32> for TestValue {
    fn from(value: i32) -> Self {
        TestValue::Const(value.into())
    }
}

impl From<f64> for TestValue {
    fn from(value: f64) -> Self {
        TestValue::Const(value.into())
    }
}

/// One test: a column on the left, an operator tag, and an optional right
/// operand (`None` exactly for the NULL tests). Constructed once, read-only
/// afterwards.
#[derive(Debug, PartialEq, Clone, Getters)]
pub struct Comparison {
    left: ColumnRef,
    op: TestOperator,
    right: Option<TestValue>,
}

impl Comparison {
    pub fn new<C: Into<ColumnRef>>(op: TestOperator, left: C, right: Option<TestValue>) -> Self {
        Self {
            left: left.into(),
            op,
            right,
        }
    }
}
