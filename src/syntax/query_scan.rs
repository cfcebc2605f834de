//! Highlight query scanning
//!
//! Reads a tree-sitter `highlights.scm` file as plain S-expressions and pulls
//! out the context-free patterns: a node kind or token immediately followed by
//! a capture at the top level of the file.
//!
//! ```text
//! (comment) @comment              → named "comment"  → comment
//! "fn" @keyword                   → token "fn"       → keyword
//! ["(" ")"] @punctuation.bracket  → tokens "(" ")"   → punctuation.bracket
//! ((identifier) @x (#eq? @x "a")) → skipped (predicate, no plain head)
//! ```
//!
//! Captures nested inside a pattern depend on their parent node and can't be
//! expressed in a kind → color table, so only top-level captures count.

use std::fmt;

/// A node kind paired with the capture a query assigns to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryMapping {
    pub kind: String,
    /// `true` for `(kind)` patterns, `false` for `"token"` patterns
    pub named: bool,
    /// Capture name without the leading `@`
    pub capture: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryScanError {
    UnterminatedString { line: usize },
    UnexpectedClose { line: usize, found: char },
    Unclosed { line: usize, open: char },
}

impl fmt::Display for QueryScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString { line } => {
                write!(f, "unterminated string starting on line {}", line)
            }
            Self::UnexpectedClose { line, found } => {
                write!(f, "unexpected '{}' on line {}", found, line)
            }
            Self::Unclosed { line, open } => {
                write!(f, "'{}' opened on line {} is never closed", open, line)
            }
        }
    }
}

impl std::error::Error for QueryScanError {}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Open(char),
    Close(char),
    Str(String),
    Capture(String),
    Atom(String),
}

#[derive(Debug, Clone, PartialEq)]
enum Form {
    /// `( ... )`; head is set when the first element is a bare identifier
    List { head: Option<String> },
    /// `[ ... ]` alternation
    Alternation(Vec<Form>),
    Str(String),
    Capture(String),
    Atom(String),
}

fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, QueryScanError> {
    let mut tokens = Vec::new();
    let mut chars = source.chars().peekable();
    let mut line = 1;

    while let Some(c) = chars.next() {
        match c {
            '\n' => line += 1,
            c if c.is_whitespace() => {}
            ';' => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        line += 1;
                        break;
                    }
                }
            }
            '(' | '[' => tokens.push((Token::Open(c), line)),
            ')' | ']' => tokens.push((Token::Close(c), line)),
            '"' => {
                let start_line = line;
                let mut text = String::new();
                let mut closed = false;
                while let Some(c) = chars.next() {
                    match c {
                        '"' => {
                            closed = true;
                            break;
                        }
                        '\\' => match chars.next() {
                            Some('n') => text.push('\n'),
                            Some('t') => text.push('\t'),
                            Some('r') => text.push('\r'),
                            Some('0') => text.push('\0'),
                            Some(other) => text.push(other),
                            None => break,
                        },
                        '\n' => {
                            line += 1;
                            text.push('\n');
                        }
                        other => text.push(other),
                    }
                }
                if !closed {
                    return Err(QueryScanError::UnterminatedString { line: start_line });
                }
                tokens.push((Token::Str(text), start_line));
            }
            _ => {
                let mut text = String::from(c);
                while let Some(&next) = chars.peek() {
                    if next.is_whitespace() || matches!(next, '(' | ')' | '[' | ']' | '"' | ';') {
                        break;
                    }
                    text.push(next);
                    chars.next();
                }
                let token = match text.strip_prefix('@') {
                    Some(name) => Token::Capture(name.to_string()),
                    None => Token::Atom(text),
                };
                tokens.push((token, line));
            }
        }
    }

    Ok(tokens)
}

/// Build the forms of one nesting level, consuming tokens up to `close`.
fn parse_level(
    tokens: &mut std::vec::IntoIter<(Token, usize)>,
    close: Option<(char, usize)>,
) -> Result<Vec<Form>, QueryScanError> {
    let mut forms = Vec::new();

    while let Some((token, line)) = tokens.next() {
        let form = match token {
            Token::Open(open) => {
                let expected = if open == '(' { ')' } else { ']' };
                let children = parse_level(tokens, Some((expected, line)))?;
                if open == '(' {
                    let head = match children.first() {
                        Some(Form::Atom(name)) if is_node_kind(name) => Some(name.clone()),
                        _ => None,
                    };
                    Form::List { head }
                } else {
                    Form::Alternation(children)
                }
            }
            Token::Close(found) => {
                return match close {
                    Some((expected, _)) if expected == found => Ok(forms),
                    _ => Err(QueryScanError::UnexpectedClose { line, found }),
                };
            }
            Token::Str(text) => Form::Str(text),
            Token::Capture(name) => Form::Capture(name),
            Token::Atom(text) => Form::Atom(text),
        };
        forms.push(form);
    }

    match close {
        Some((expected, line)) => Err(QueryScanError::Unclosed {
            line,
            open: if expected == ')' { '(' } else { '[' },
        }),
        None => Ok(forms),
    }
}

/// Plain identifiers only; excludes wildcards, fields, predicates and anchors
fn is_node_kind(atom: &str) -> bool {
    atom != "_"
        && !atom.ends_with(':')
        && !atom.starts_with('#')
        && !atom.starts_with('!')
        && atom
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_')
}

fn is_quantifier(atom: &str) -> bool {
    matches!(atom, "*" | "+" | "?")
}

fn push_unique(out: &mut Vec<QueryMapping>, kind: &str, named: bool, capture: &str) {
    if !out.iter().any(|m| m.kind == kind && m.named == named) {
        out.push(QueryMapping {
            kind: kind.to_string(),
            named,
            capture: capture.to_string(),
        });
    }
}

/// Extract top-level kind → capture mappings from a highlight query.
///
/// The first mapping for a given kind wins, matching the precedence
/// tree-sitter gives earlier patterns.
pub fn scan_query(source: &str) -> Result<Vec<QueryMapping>, QueryScanError> {
    let mut tokens = tokenize(source)?.into_iter();
    let forms = parse_level(&mut tokens, None)?;

    let mut mappings = Vec::new();
    let mut prev: Option<&Form> = None;

    for form in &forms {
        match form {
            Form::Capture(capture) => {
                match prev {
                    Some(Form::List { head: Some(kind) }) => {
                        push_unique(&mut mappings, kind, true, capture);
                    }
                    Some(Form::Str(token)) => {
                        push_unique(&mut mappings, token, false, capture);
                    }
                    Some(Form::Alternation(items)) => {
                        for item in items {
                            match item {
                                Form::List { head: Some(kind) } => {
                                    push_unique(&mut mappings, kind, true, capture)
                                }
                                Form::Str(token) => {
                                    push_unique(&mut mappings, token, false, capture)
                                }
                                _ => {}
                            }
                        }
                    }
                    _ => {}
                }
                prev = Some(form);
            }
            Form::Atom(atom) if is_quantifier(atom) => {}
            _ => prev = Some(form),
        }
    }

    Ok(mappings)
}
