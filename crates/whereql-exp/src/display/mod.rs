use std::fmt::Display;

use crate::core::compare::{ColumnRef, Comparison, ConstValue, TestValue};
use crate::core::logic::{Expression, LogicalExpr};
use crate::error::{ExpError, ExpResult};
use crate::operator::{LogicOperator, TestOperator};

impl Display for ColumnRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.name().contains(' ') {
            write!(f, "[{}]", self.name())
        } else {
            f.write_str(self.name())
        }
    }
}

/// Re-apply escapes and single-quote `s` for output.
pub(crate) fn quote_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

impl Display for ConstValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstValue::Str(s) => f.write_str(&quote_str(s)),
            ConstValue::Int(v) => write!(f, "{v}"),
            // keep the decimal point so the value re-parses as a float
            ConstValue::Float(v) if v.fract() == 0.0 && v.is_finite() => write!(f, "{v:.1}"),
            ConstValue::Float(v) => write!(f, "{v}"),
        }
    }
}

impl Display for TestValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestValue::Const(value) => value.fmt(f),
            TestValue::Column(column) => column.fmt(f),
            TestValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt(f)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Render a tree as canonical where-expression text. Chained same-operator
/// AND/OR is flattened across lines; mixed operands are bracketed with a
/// 4-space indented interior. Fails on tree shapes the language cannot
/// express rather than emitting incorrect text.
pub fn format_where(exp: &Expression) -> ExpResult<String> {
    render(exp, false, false)
}

fn render(exp: &Expression, bracket: bool, break_after_logic_op: bool) -> ExpResult<String> {
    match exp {
        Expression::Test(test) => render_test(test),
        Expression::Logic(logic) => render_logic(logic, bracket, break_after_logic_op),
    }
}

fn render_logic(logic: &LogicalExpr, bracket: bool, break_after_logic_op: bool) -> ExpResult<String> {
    match logic.op() {
        LogicOperator::Not => {
            let operand = render(logic.right(), true, true)?;
            Ok(format!("NOT {operand}"))
        }
        op @ (LogicOperator::And | LogicOperator::Or) => {
            let Some(left) = logic.left().as_deref() else {
                return Err(ExpError::UnsupportedNode(format!(
                    "{op} requires two operands"
                )));
            };
            // A left-hand chain of the same operator stays unbracketed and
            // forces the multi-line layout; and/or are left associative, so
            // only the right side ever needs its own bracket.
            let same_chain =
                matches!(left, Expression::Logic(inner) if inner.op() == op);
            let (left_text, broke) = if same_chain {
                (render(left, false, true)?, true)
            } else {
                (render(left, true, false)?, break_after_logic_op)
            };
            let right_text = render(logic.right(), true, false)?;
            let text = if broke {
                format!("{left_text} {op}\n{right_text}")
            } else {
                format!("{left_text} {op} {right_text}")
            };
            if bracket {
                let interior = text
                    .lines()
                    .map(|line| format!("    {line}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                Ok(format!("(\n{interior}\n)"))
            } else {
                Ok(text)
            }
        }
    }
}

fn render_test(test: &Comparison) -> ExpResult<String> {
    match test.op() {
        TestOperator::Eq
        | TestOperator::Ne
        | TestOperator::Lt
        | TestOperator::Gt
        | TestOperator::Le
        | TestOperator::Ge => match test.right() {
            Some(TestValue::Const(value)) => {
                Ok(format!("{} {} {}", test.left(), test.op(), value))
            }
            Some(TestValue::Column(column)) => {
                Ok(format!("{} {} {}", test.left(), test.op(), column))
            }
            _ => Err(unsupported(test, "a constant or column right operand")),
        },
        TestOperator::Like => like_clause(test, "%", "%"),
        TestOperator::StartsWith => like_clause(test, "", "%"),
        TestOperator::EndsWith => like_clause(test, "%", ""),
        TestOperator::IsNull => match test.right() {
            None => Ok(format!("{} IS NULL", test.left())),
            Some(_) => Err(unsupported(test, "no right operand")),
        },
        TestOperator::IsNotNull => match test.right() {
            None => Ok(format!("{} IS NOT NULL", test.left())),
            Some(_) => Err(unsupported(test, "no right operand")),
        },
        TestOperator::InList => membership(test, "IN"),
        TestOperator::NotInList => membership(test, "NOT IN"),
    }
}

fn like_clause(test: &Comparison, prefix: &str, suffix: &str) -> ExpResult<String> {
    match test.right() {
        Some(TestValue::Const(ConstValue::Str(needle))) => Ok(format!(
            "{} LIKE {}",
            test.left(),
            quote_str(&format!("{prefix}{needle}{suffix}"))
        )),
        _ => Err(unsupported(test, "a string constant right operand")),
    }
}

fn membership(test: &Comparison, keyword: &str) -> ExpResult<String> {
    match test.right() {
        Some(list @ TestValue::List(_)) => Ok(format!("{} {keyword} {list}", test.left())),
        _ => Err(unsupported(test, "a list right operand")),
    }
}

fn unsupported(test: &Comparison, want: &str) -> ExpError {
    ExpError::UnsupportedNode(format!("'{}' test requires {want}", test.op()))
}
