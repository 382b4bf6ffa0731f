//! Selector text → [`SelectorChain`].
//!
//! Grammar:
//!
//! ```text
//! chain    := compound (WS+ compound)*
//! compound := (name | "*")? ("#" name | "." name | attr)*
//! attr     := "[" WS* name WS* (op WS* value WS*)? "]"
//! op       := "=" | "~=" | "^=" | "$=" | "*=" | "|="
//! value    := '"' [^"]* '"' | "'" [^']* "'" | bare
//! ```

use std::str::FromStr;

use super::{AttrOperator, AttributeSelector, CompoundSelector, SelectorChain, SimpleSelector};
use crate::error::{AttributeFault, ParseError};

/// Parse a raw selector string into a [`SelectorChain`].
///
/// Supports:
/// - Type selectors: `div`, `p`, `h1`
/// - Universal selector: `*`
/// - ID selectors: `#id`
/// - Class selectors: `.class`, `.class1.class2`
/// - Attribute selectors: `[attr]`, `[attr=v]`, `[attr~=v]`, `[attr^=v]`,
///   `[attr$=v]`, `[attr*=v]`, `[attr|=v]`, with quoted or bare values
/// - Compound selectors: `div#main.wide[lang|="en"]`
/// - The descendant combinator: `div p`, `html body div`
///
/// # Errors
///
/// Returns the first [`ParseError`] found, scanning compounds left to right.
pub fn parse_selector(text: &str) -> Result<SelectorChain, ParseError> {
    let mut compounds = split_compounds(text)
        .into_iter()
        .map(parse_compound)
        .collect::<Result<Vec<_>, _>>()?;

    let subject = compounds.pop().ok_or(ParseError::Empty)?;
    Ok(SelectorChain {
        ancestors: compounds,
        subject,
    })
}

impl FromStr for SelectorChain {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_selector(text)
    }
}

/// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
/// "A descendant combinator is whitespace that separates two compound selectors."
///
/// Whitespace is ASCII whitespace throughout, the same set that separates
/// class and `~=` tokens.
///
/// Whitespace inside `[...]` belongs to the attribute clause, so
/// `[title="a b"]` stays one token. An unclosed `[` swallows the rest of the
/// input, which the compound parser then rejects.
fn split_compounds(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = None;
    let mut in_brackets = false;
    let mut quote = None;

    for (offset, c) in text.char_indices() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' if in_brackets => quote = Some(c),
            '[' => in_brackets = true,
            ']' => in_brackets = false,
            _ if c.is_ascii_whitespace() && !in_brackets => {
                if let Some(begin) = start.take() {
                    tokens.push(&text[begin..offset]);
                }
                continue;
            }
            _ => {}
        }
        if start.is_none() {
            start = Some(offset);
        }
    }

    if let Some(begin) = start {
        tokens.push(&text[begin..]);
    }
    tokens
}

/// Characters allowed in type, id, class and attribute names.
fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

/// Byte-offset cursor over one compound token.
struct Cursor<'a> {
    token: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    const fn new(token: &'a str) -> Self {
        Self { token, offset: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.token[self.offset..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    /// Consume characters while `pred` holds and return them.
    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.offset;
        while self.peek().is_some_and(&pred) {
            let _ = self.bump();
        }
        &self.token[start..self.offset]
    }

    fn skip_whitespace(&mut self) {
        let _ = self.eat_while(|c| c.is_ascii_whitespace());
    }
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "If it contains a type selector or universal selector, that type selector
/// or universal selector must come first in the sequence."
fn parse_compound(token: &str) -> Result<CompoundSelector, ParseError> {
    let mut cursor = Cursor::new(token);
    let mut simple_selectors = Vec::new();

    if cursor.peek() == Some('*') {
        let _ = cursor.bump();
        simple_selectors.push(SimpleSelector::Universal);
    } else {
        let name = cursor.eat_while(is_name_char);
        if !name.is_empty() {
            simple_selectors.push(SimpleSelector::Type(name.to_string()));
        }
    }

    while let Some(c) = cursor.peek() {
        let offset = cursor.offset;
        let _ = cursor.bump();
        match c {
            '#' | '.' => {
                let name = cursor.eat_while(is_name_char);
                if name.is_empty() {
                    return Err(ParseError::MissingName {
                        token: token.to_string(),
                        marker: c,
                    });
                }
                let name = name.to_string();
                simple_selectors.push(if c == '#' {
                    SimpleSelector::Id(name)
                } else {
                    SimpleSelector::Class(name)
                });
            }
            '[' => {
                let attr = parse_attribute(&mut cursor).map_err(|fault| {
                    ParseError::BadAttribute {
                        token: token.to_string(),
                        fault,
                    }
                })?;
                simple_selectors.push(SimpleSelector::Attribute(attr));
            }
            _ if simple_selectors.is_empty() => return Err(ParseError::Empty),
            _ => {
                return Err(ParseError::UnexpectedChar {
                    token: token.to_string(),
                    found: c,
                    offset,
                });
            }
        }
    }

    if simple_selectors.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(CompoundSelector { simple_selectors })
}

/// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// Parses the clause after its opening `[`, through the closing `]`.
fn parse_attribute(cursor: &mut Cursor<'_>) -> Result<AttributeSelector, AttributeFault> {
    cursor.skip_whitespace();
    let name = cursor.eat_while(is_name_char).to_string();
    if name.is_empty() {
        return Err(AttributeFault::MissingName);
    }
    cursor.skip_whitespace();

    let Some(first) = cursor.bump() else {
        return Err(AttributeFault::Unclosed);
    };
    if first == ']' {
        return Ok(AttributeSelector::Exists(name));
    }

    let mut op = String::from(first);
    if first != '=' && cursor.peek() == Some('=') {
        op.push('=');
        let _ = cursor.bump();
    }
    let Ok(operator) = op.parse::<AttrOperator>() else {
        return Err(AttributeFault::UnknownOperator(op));
    };

    cursor.skip_whitespace();
    let value = match cursor.peek() {
        None => return Err(AttributeFault::Unclosed),
        Some(quote @ ('"' | '\'')) => {
            let _ = cursor.bump();
            let value = cursor.eat_while(|c| c != quote);
            if cursor.bump().is_none() {
                return Err(AttributeFault::UnterminatedString);
            }
            value
        }
        Some(_) => {
            let value = cursor
                .eat_while(|c| !(c == ']' || c == '"' || c == '\'' || c.is_ascii_whitespace()));
            if value.is_empty() {
                return Err(AttributeFault::MissingValue);
            }
            value
        }
    };

    cursor.skip_whitespace();
    match cursor.bump() {
        Some(']') => Ok(AttributeSelector::Compare {
            name,
            operator,
            value: value.to_string(),
        }),
        Some(c) => Err(AttributeFault::Trailing(c)),
        None => Err(AttributeFault::Unclosed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_on_whitespace_runs() {
        assert_eq!(split_compounds("  html \t body\n div "), ["html", "body", "div"]);
        assert!(split_compounds(" \t ").is_empty());
    }

    #[test]
    fn split_ignores_non_ascii_whitespace() {
        assert_eq!(split_compounds("div\u{a0}p div\u{2003}"), ["div\u{a0}p", "div\u{2003}"]);
    }

    #[test]
    fn split_keeps_bracketed_whitespace() {
        assert_eq!(
            split_compounds(r#"p[title="a b"] [ lang |= 'x y' ]"#),
            [r#"p[title="a b"]"#, "[ lang |= 'x y' ]"]
        );
    }

    #[test]
    fn split_ignores_bracket_inside_quotes() {
        assert_eq!(split_compounds(r#"[a="]"] b"#), [r#"[a="]"]"#, "b"]);
    }

    #[test]
    fn unclosed_bracket_swallows_rest() {
        assert_eq!(split_compounds("a[x b"), ["a[x b"]);
    }

    #[test]
    fn cursor_offsets_are_bytes() {
        let mut cursor = Cursor::new("é#x");
        assert_eq!(cursor.eat_while(is_name_char), "é");
        assert_eq!(cursor.offset, 2);
        assert_eq!(cursor.bump(), Some('#'));
        assert_eq!(cursor.eat_while(is_name_char), "x");
        assert_eq!(cursor.peek(), None);
    }
}
