use whereql_exp::ColumnRef;
use winnow::ascii::{multispace0, take_escaped};
use winnow::combinator::alt;
use winnow::token::{literal, none_of, one_of, take_until, take_while};
use winnow::{ModalResult as WResult, Parser};

use crate::symbol::ctx_desc;

/// Bare column name: a letter followed by letters and digits.
pub fn take_bare_name<'a>(input: &mut &'a str) -> WResult<&'a str> {
    (
        one_of(('a'..='z', 'A'..='Z')),
        take_while(0.., ('0'..='9', 'a'..='z', 'A'..='Z')),
    )
        .take()
        .parse_next(input)
}

/// Bracket-quoted column name: anything up to `]`, stored literally.
/// This is the spelling for names with embedded spaces.
pub fn take_quoted_name<'a>(input: &mut &'a str) -> WResult<&'a str> {
    literal('[').parse_next(input)?;
    let name = take_until(0.., "]").parse_next(input)?;
    literal(']').parse_next(input)?;
    Ok(name)
}

/// Either column spelling, leading whitespace allowed.
pub fn column_ref(data: &mut &str) -> WResult<ColumnRef> {
    multispace0.parse_next(data)?;
    alt((take_bare_name, take_quoted_name))
        .map(ColumnRef::new)
        .parse_next(data)
}

fn single_quoted<'a>(input: &mut &'a str) -> WResult<&'a str> {
    literal('\'').parse_next(input)?;
    let content = take_escaped(none_of(['\\', '\'']), '\\', one_of(|_: char| true))
        .parse_next(input)?;
    literal('\'').context(ctx_desc("closing '")).parse_next(input)?;
    Ok(content)
}

fn double_quoted<'a>(input: &mut &'a str) -> WResult<&'a str> {
    literal('"').parse_next(input)?;
    let content = take_escaped(none_of(['\\', '"']), '\\', one_of(|_: char| true))
        .parse_next(input)?;
    literal('"').context(ctx_desc("closing \"")).parse_next(input)?;
    Ok(content)
}

/// Quoted string in either quote style; returns the unescaped value.
pub fn quot_str(data: &mut &str) -> WResult<String> {
    alt((single_quoted, double_quoted))
        .map(decode_escapes)
        .parse_next(data)
}

/// Decode the escape table (\n \t \r \0 \' \" \\ \xHH) into the literal
/// value. An unknown escape keeps the backslash and the character.
pub fn decode_escapes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut it = s.chars();
    while let Some(c) = it.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match it.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('x') => {
                let h1 = it.next();
                let h2 = it.next();
                let byte = match (h1, h2) {
                    (Some(h1), Some(h2)) => h1
                        .to_digit(16)
                        .zip(h2.to_digit(16))
                        .map(|(a, b)| (a << 4) | b),
                    _ => None,
                };
                match byte.and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push_str("\\x");
                        out.extend(h1);
                        out.extend(h2);
                    }
                }
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    mod column_names {
        use super::*;

        #[test]
        fn valid_bare_name() -> WResult<()> {
            let mut data = "abc = 1";
            let col = column_ref.parse_next(&mut data)?;
            assert_eq!(col.name(), "abc");
            assert_eq!(data, " = 1");
            Ok(())
        }

        #[test]
        fn valid_alphanumeric() -> WResult<()> {
            let mut data = "a1b2";
            let col = column_ref.parse_next(&mut data)?;
            assert_eq!(col.name(), "a1b2");
            Ok(())
        }

        #[test]
        fn valid_bracketed_with_space() -> WResult<()> {
            let mut data = "[some col] = 1";
            let col = column_ref.parse_next(&mut data)?;
            assert_eq!(col.name(), "some col");
            assert_eq!(data, " = 1");
            Ok(())
        }

        #[test]
        fn invalid_leading_digit() {
            let mut data = "1abc";
            assert!(take_bare_name.parse_next(&mut data).is_err());
        }

        #[test]
        fn invalid_unclosed_bracket() {
            let mut data = "[some col";
            assert!(column_ref.parse_next(&mut data).is_err());
        }
    }

    mod strings {
        use super::*;

        #[test]
        fn valid_single_quoted() -> WResult<()> {
            let mut data = "'hello' rest";
            assert_eq!(quot_str.parse_next(&mut data)?, "hello");
            assert_eq!(data, " rest");
            Ok(())
        }

        #[test]
        fn valid_double_quoted() -> WResult<()> {
            let mut data = r#""hello""#;
            assert_eq!(quot_str.parse_next(&mut data)?, "hello");
            Ok(())
        }

        #[test]
        fn valid_escaped_quote() -> WResult<()> {
            let mut data = r"'it\'s'";
            assert_eq!(quot_str.parse_next(&mut data)?, "it's");
            Ok(())
        }

        #[test]
        fn valid_other_quote_inside() -> WResult<()> {
            let mut data = r#""it's""#;
            assert_eq!(quot_str.parse_next(&mut data)?, "it's");
            Ok(())
        }

        #[test]
        fn invalid_unterminated() {
            let mut data = "'hello";
            assert!(quot_str.parse_next(&mut data).is_err());
        }
    }

    mod escapes {
        use super::*;

        #[test]
        fn standard_table() {
            assert_eq!(decode_escapes(r"a\nb"), "a\nb");
            assert_eq!(decode_escapes(r"a\tb"), "a\tb");
            assert_eq!(decode_escapes(r"a\\b"), r"a\b");
            assert_eq!(decode_escapes(r"\x41"), "A");
        }

        #[test]
        fn unknown_escape_kept_literally() {
            assert_eq!(decode_escapes(r"a\qb"), r"a\qb");
        }
    }
}
