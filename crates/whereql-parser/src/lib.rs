//! # whereql-parser
//!
//! Parser for the where-expression DSL: a small SQL-like boolean filter
//! language over named columns.
//!
//! The grammar is built on the [`winnow`] parser combinator library:
//!
//! - **Symbol parsers** (`symbol`): comparison operators and punctuation,
//!   plus case-insensitive, word-delimited SQL keywords
//! - **Atom parsers** (`atom`): column names (bare and bracket-quoted) and
//!   quoted strings with escape decoding
//! - **Value parsers** (`value`): constants and list literals
//! - **Condition parsers** (`cond`): tests combined by NOT / AND / OR, and
//!   the public [`parse_where`] entry point
//!
//! ## Example
//!
//! ```rust
//! use whereql_parser::parse_where;
//! use whereql_exp::builder::{and, eq, is_not_null};
//!
//! let exp = parse_where("a = 1 and b is not null").unwrap();
//! assert_eq!(exp, and(eq("a", 1), is_not_null("b")));
//! ```
//!
//! Trees parse into the `whereql-exp` node model and can be rendered back
//! with `whereql_exp::format_where`; the two stay interoperable with trees
//! built by hand through the builder functions.

pub use winnow::Parser;
// Centralized parse result alias. Switch here if we migrate away from ModalResult later.
pub type WResult<T> = winnow::ModalResult<T>;

pub mod atom;
pub mod cond;
pub mod error;
pub mod symbol;
pub mod value;

pub use cond::parse_where;
pub use error::{LikePatternError, WhereError, WhereResult};
