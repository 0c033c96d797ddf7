use crate::core::compare::ConstValue;

/// Read access to one row of named values. `None` means the column is
/// absent, which the NULL tests treat as SQL NULL.
pub trait ValueGetter {
    fn get_value(&self, name: &str) -> Option<&ConstValue>;
}

pub trait ConditionEvaluator<V> {
    fn evaluate(&self, data: &V) -> bool;
}
