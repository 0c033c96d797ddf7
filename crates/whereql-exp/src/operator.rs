use std::fmt::Display;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum LogicOperator {
    And,
    Or,
    Not,
}

impl LogicOperator {
    /// Surface keyword, as the formatter emits it.
    pub fn keyword(&self) -> &'static str {
        match self {
            LogicOperator::And => "AND",
            LogicOperator::Or => "OR",
            LogicOperator::Not => "NOT",
        }
    }
}

impl Display for LogicOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Operator tag of a single test. A closed vocabulary: the formatter and
/// the evaluator match on every variant, so adding one is a compile-time
/// obligation for both.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TestOperator {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    // substring match: compiled out of a LIKE pattern
    Like,
    StartsWith,
    EndsWith,
    IsNull,
    IsNotNull,
    InList,
    NotInList,
}

impl Display for TestOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestOperator::Eq => write!(f, "=="),
            TestOperator::Ne => write!(f, "!="),
            TestOperator::Lt => write!(f, "<"),
            TestOperator::Gt => write!(f, ">"),
            TestOperator::Le => write!(f, "<="),
            TestOperator::Ge => write!(f, ">="),
            TestOperator::Like => write!(f, "like"),
            TestOperator::StartsWith => write!(f, "startsWith"),
            TestOperator::EndsWith => write!(f, "endsWith"),
            TestOperator::IsNull => write!(f, "isNull"),
            TestOperator::IsNotNull => write!(f, "isNotNull"),
            TestOperator::InList => write!(f, "inlist"),
            TestOperator::NotInList => write!(f, "notinlist"),
        }
    }
}
