use derive_more::From;
use thiserror::Error;
use winnow::error::{ContextError, ErrMode, Needed};

/// A LIKE pattern the compiler cannot lower to one of
/// equality / starts-with / ends-with / contains.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum LikePatternError {
    #[error("unsupported LIKE pattern '{0}'")]
    Unsupported(String),
    #[error("LIKE requires a string constant on the right hand side")]
    NotString,
}

#[derive(Error, Debug, PartialEq, From)]
pub enum WhereError {
    #[from(skip)]
    #[error("syntax error at line {line}, column {column}\n{detail}")]
    Syntax {
        line: usize,
        column: usize,
        detail: String,
    },
    #[from(skip)]
    #[error("expression not fully consumed, trailing input >'{0}'")]
    TrailingInput(String),
    #[error("{0}")]
    InvalidPattern(LikePatternError),
}

pub type WhereResult<T> = Result<T, WhereError>;

impl WhereError {
    /// Lower a winnow failure into a terminal error. `rest` is the tail of
    /// `input` where parsing stopped; a LIKE-compilation cause outranks the
    /// generic syntax rendering.
    pub(crate) fn from_syntax(err: ErrMode<ContextError>, input: &str, rest: &str) -> Self {
        match err {
            ErrMode::Incomplete(Needed::Size(n)) => {
                Self::syntax_at(input, rest, &format!("parsing requires {n} more bytes"))
            }
            ErrMode::Incomplete(Needed::Unknown) => {
                Self::syntax_at(input, rest, "parsing requires more data")
            }
            ErrMode::Backtrack(e) | ErrMode::Cut(e) => {
                if let Some(cause) = e.cause()
                    && let Some(like) = cause.downcast_ref::<LikePatternError>()
                {
                    return WhereError::InvalidPattern(like.clone());
                }
                Self::syntax_at(input, rest, &e.to_string())
            }
        }
    }

    fn syntax_at(input: &str, rest: &str, what: &str) -> Self {
        let offset = input.len().saturating_sub(rest.len());
        let (line, column) = position(input, offset);
        WhereError::Syntax {
            line,
            column,
            detail: format!("{}\n{what}", snippet(input, offset)),
        }
    }
}

/// 1-based line and column of `offset` in `input`. `rest` is always a tail
/// slice of the original buffer, so the offset sits on a char boundary.
fn position(input: &str, offset: usize) -> (usize, usize) {
    let upto = &input[..offset.min(input.len())];
    let line = upto.matches('\n').count() + 1;
    let column = upto.chars().rev().take_while(|c| *c != '\n').count() + 1;
    (line, column)
}

/// Render the offending line with a gutter and a caret under the failure
/// position.
fn snippet(input: &str, offset: usize) -> String {
    let (line, column) = position(input, offset);
    let content = input.lines().nth(line - 1).unwrap_or("");
    let gutter = line.to_string().len();
    format!(
        "{empty:gutter$} |\n{line} | {content}\n{empty:gutter$} | {caret:>column$}",
        empty = "",
        caret = "^",
    )
}
