//! The slice of RQL the in-memory store understands.
//!
//! ```text
//! from <collection> [where id() >= <bound>]
//! ```
//!
//! `<collection>` is an identifier or a quoted string, `<bound>` is a quoted
//! string or a `$parameter`. Keywords are case-insensitive. Anything else is
//! rejected.

use serde_json::Value;

use crate::error::{Result, StoreError};
use crate::query::IndexQuery;

/// A parsed collection range: all documents of `collection` whose id is at or
/// after `lower_bound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CollectionRange {
    pub collection: String,
    pub lower_bound: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Word(String),
    Str(String),
    Param(String),
    Punct(&'static str),
}

fn rejected(reason: impl Into<String>) -> StoreError {
    StoreError::Rejected {
        reason: reason.into(),
    }
}

fn tokenize(text: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();
    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '\'' | '"' => {
                let quote = c;
                chars.next();
                let mut value = String::new();
                loop {
                    match chars.next() {
                        Some('\\') => match chars.next() {
                            Some(escaped) => value.push(escaped),
                            None => return Err(rejected("unterminated string literal")),
                        },
                        Some(ch) if ch == quote => break,
                        Some(ch) => value.push(ch),
                        None => return Err(rejected("unterminated string literal")),
                    }
                }
                tokens.push(Token::Str(value));
            }
            '$' => {
                chars.next();
                let mut name = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch.is_alphanumeric() || ch == '_' {
                        name.push(ch);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if name.is_empty() {
                    return Err(rejected("empty parameter name"));
                }
                tokens.push(Token::Param(name));
            }
            '(' => {
                chars.next();
                tokens.push(Token::Punct("("));
            }
            ')' => {
                chars.next();
                tokens.push(Token::Punct(")"));
            }
            '>' => {
                chars.next();
                if chars.peek() == Some(&'=') {
                    chars.next();
                    tokens.push(Token::Punct(">="));
                } else {
                    return Err(rejected("only the >= operator is supported"));
                }
            }
            c if c.is_alphanumeric() || c == '_' || c == '@' => {
                let mut word = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch.is_alphanumeric() || ch == '_' || ch == '@' || ch == '-' {
                        word.push(ch);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Word(word));
            }
            other => return Err(rejected(format!("unexpected character '{}'", other))),
        }
    }
    Ok(tokens)
}

fn expect_keyword(tokens: &mut std::slice::Iter<'_, Token>, keyword: &str) -> Result<()> {
    match tokens.next() {
        Some(Token::Word(w)) if w.eq_ignore_ascii_case(keyword) => Ok(()),
        other => Err(rejected(format!("expected '{}', found {:?}", keyword, other))),
    }
}

fn expect_punct(tokens: &mut std::slice::Iter<'_, Token>, punct: &str) -> Result<()> {
    match tokens.next() {
        Some(Token::Punct(p)) if *p == punct => Ok(()),
        other => Err(rejected(format!("expected '{}', found {:?}", punct, other))),
    }
}

/// Parse `query` into a collection range, resolving parameters.
pub(crate) fn parse_collection_range(query: &IndexQuery) -> Result<CollectionRange> {
    let tokens = tokenize(&query.query)?;
    let mut iter = tokens.iter();

    expect_keyword(&mut iter, "from")?;
    let collection = match iter.next() {
        Some(Token::Word(w)) | Some(Token::Str(w)) => w.clone(),
        other => return Err(rejected(format!("expected collection, found {:?}", other))),
    };

    let lower_bound = match iter.next() {
        None => None,
        Some(Token::Word(w)) if w.eq_ignore_ascii_case("where") => {
            expect_keyword(&mut iter, "id")?;
            expect_punct(&mut iter, "(")?;
            expect_punct(&mut iter, ")")?;
            expect_punct(&mut iter, ">=")?;
            let bound = match iter.next() {
                Some(Token::Str(s)) => s.clone(),
                Some(Token::Param(name)) => match query.parameters.get(name) {
                    Some(Value::String(s)) => s.clone(),
                    Some(other) => {
                        return Err(rejected(format!(
                            "parameter ${} must be a string, got {}",
                            name, other
                        )))
                    }
                    None => return Err(rejected(format!("parameter ${} is not bound", name))),
                },
                other => return Err(rejected(format!("expected id bound, found {:?}", other))),
            };
            Some(bound)
        }
        Some(other) => return Err(rejected(format!("unexpected token {:?}", other))),
    };

    if let Some(extra) = iter.next() {
        return Err(rejected(format!("unexpected trailing token {:?}", extra)));
    }

    Ok(CollectionRange {
        collection,
        lower_bound,
    })
}
