use winnow::ascii::{Caseless, multispace0};
use winnow::combinator::{alt, not};
use winnow::error::{StrContext, StrContextValue};
use winnow::token::{literal, one_of};
use winnow::{ModalResult as WResult, Parser};

/// Comparison-operator token, before surface spellings collapse
/// (`=`/`==` both mean Eq, `!=`/`<>` both mean Ne).
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CmpSymbol {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    Like,
}

/// Macro to define simple symbol parsers that return `()`
macro_rules! define_unit_symbol {
    ($name:ident, $lit:expr, $desc:expr) => {
        #[doc = concat!("Parses the `", $lit, "` symbol.")]
        pub fn $name(data: &mut &str) -> WResult<()> {
            multispace0.parse_next(data)?;
            literal($lit)
                .context(StrContext::Label("symbol"))
                .context(StrContext::Expected(StrContextValue::Description($desc)))
                .parse_next(data)?;
            Ok(())
        }
    };
}

/// Macro to define comparison symbol parsers that return `CmpSymbol`
macro_rules! define_cmp_symbol {
    ($name:ident, $lit:expr, $desc:expr, $variant:expr) => {
        #[doc = concat!("Parses the `", $lit, "` comparison operator.")]
        pub fn $name(data: &mut &str) -> WResult<CmpSymbol> {
            multispace0.parse_next(data)?;
            literal($lit)
                .context(StrContext::Label("symbol"))
                .context(StrContext::Expected(StrContextValue::Description($desc)))
                .parse_next(data)?;
            Ok($variant)
        }
    };
}

/// Macro to define case-insensitive SQL keyword parsers. A keyword must
/// end at a word boundary: `android` is an identifier, not `and` + `roid`.
macro_rules! define_keyword {
    ($name:ident, $kw:expr, $desc:expr) => {
        #[doc = concat!("Parses the `", $kw, "` keyword (case-insensitive, word-delimited).")]
        pub fn $name(data: &mut &str) -> WResult<()> {
            multispace0.parse_next(data)?;
            literal(Caseless($kw))
                .context(StrContext::Label("keyword"))
                .context(StrContext::Expected(StrContextValue::Description($desc)))
                .parse_next(data)?;
            not(one_of(('0'..='9', 'A'..='Z', 'a'..='z'))).parse_next(data)?;
            Ok(())
        }
    };
}

// ============================================================================
// Punctuation and Delimiters
// ============================================================================

define_unit_symbol!(symbol_comma, ",", "need ','");
define_unit_symbol!(symbol_bracket_beg, "(", "need '('");
define_unit_symbol!(symbol_bracket_end, ")", "need ')'");
define_unit_symbol!(symbol_brackets_beg, "[", "need '['");
define_unit_symbol!(symbol_brackets_end, "]", "need ']'");

// ============================================================================
// Comparison Operators
// ============================================================================

define_cmp_symbol!(symbol_cmp_eq, "==", "need '=='", CmpSymbol::Eq);
define_cmp_symbol!(symbol_cmp_ne, "!=", "need '!='", CmpSymbol::Ne);
define_cmp_symbol!(symbol_cmp_ltgt, "<>", "need '<>'", CmpSymbol::Ne);
define_cmp_symbol!(symbol_cmp_ge, ">=", "need '>='", CmpSymbol::Ge);
define_cmp_symbol!(symbol_cmp_le, "<=", "need '<='", CmpSymbol::Le);
define_cmp_symbol!(symbol_cmp_gt, ">", "need '>'", CmpSymbol::Gt);
define_cmp_symbol!(symbol_cmp_lt, "<", "need '<'", CmpSymbol::Lt);
define_cmp_symbol!(symbol_cmp_sql_eq, "=", "need '='", CmpSymbol::Eq);

/// Parses the `like` operator keyword.
pub fn symbol_cmp_like(data: &mut &str) -> WResult<CmpSymbol> {
    kw_like.parse_next(data)?;
    Ok(CmpSymbol::Like)
}

/// Parses any comparison operator and returns the corresponding `CmpSymbol`.
///
/// Multi-character operators come first so `>=` is not consumed as `>`
/// followed by `=`, and `=` comes after `==`.
pub fn symbol_cmp(data: &mut &str) -> WResult<CmpSymbol> {
    alt((
        symbol_cmp_eq,
        symbol_cmp_ne,
        symbol_cmp_ltgt,
        symbol_cmp_ge,
        symbol_cmp_le,
        symbol_cmp_gt,
        symbol_cmp_lt,
        symbol_cmp_sql_eq,
        symbol_cmp_like,
    ))
    .parse_next(data)
}

// ============================================================================
// Keywords
// ============================================================================

define_keyword!(kw_and, "and", "need 'and'");
define_keyword!(kw_or, "or", "need 'or'");
define_keyword!(kw_not, "not", "need 'not'");
define_keyword!(kw_is, "is", "need 'is'");
define_keyword!(kw_null, "null", "need 'null'");
define_keyword!(kw_in, "in", "need 'in'");
define_keyword!(kw_like, "like", "need 'like'");

// ============================================================================
// Helper Functions for Error Context
// ============================================================================

/// Creates a label context for winnow error reporting.
#[inline(always)]
pub fn ctx_label(label: &'static str) -> StrContext {
    StrContext::Label(label)
}

/// Creates a description context for winnow error reporting.
#[inline(always)]
pub fn ctx_desc(desc: &'static str) -> StrContext {
    StrContext::Expected(StrContextValue::Description(desc))
}
