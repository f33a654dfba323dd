use std::ops::Range;

use logos::Logos;
use tracing::trace;

use crate::{
    compiler::token::{COMPOUND_OPERATORS, DELIMITERS, Token, TokenCategory},
    error::{CompileError, CompileResult},
    util::num::NumericConvention,
};

/// Raw lexical pieces recognized before any numeric convention is applied.
///
/// Every input character falls into exactly one of these classes, so raw
/// scanning itself never fails. Separators, operators and grouping symbols
/// all arrive as single-character `Symbol` pieces and are sorted out by
/// [`assemble`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    /// A run of ASCII digits.
    #[regex(r"[0-9]+")]
    Digits,
    /// An identifier: a letter or `_`, then letters, digits or `_`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,
    /// Blanks between tokens.
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Blank,
    /// Any other single character.
    #[regex(r"[^0-9A-Za-z_ \t\r\n]")]
    Symbol,
}

/// Classifies a single character under `convention`.
///
/// Convention separators take precedence over the delimiter set, so `,` is a
/// number character under a convention that uses it as a separator.
///
/// # Example
/// ```
/// use equate::{
///     compiler::{lexer::classify, token::TokenCategory},
///     util::num::NumericConvention,
/// };
///
/// let invariant = NumericConvention::invariant();
/// assert_eq!(classify('7', &invariant), TokenCategory::Number);
/// assert_eq!(classify(',', &invariant), TokenCategory::Number);
/// assert_eq!(classify(';', &invariant), TokenCategory::Delimiter);
/// assert_eq!(classify('$', &invariant), TokenCategory::Undefined);
/// ```
#[must_use]
pub fn classify(c: char, convention: &NumericConvention) -> TokenCategory {
    if matches!(c, ' ' | '\t' | '\r' | '\n') {
        TokenCategory::Whitespace
    } else if c.is_ascii_digit() || convention.is_separator(c) {
        TokenCategory::Number
    } else if c.is_ascii_alphabetic() || c == '_' {
        TokenCategory::Letter
    } else if DELIMITERS.contains(c) {
        TokenCategory::Delimiter
    } else {
        TokenCategory::Undefined
    }
}

/// Converts expression text into an ordered token sequence.
///
/// Whitespace separates tokens and is otherwise dropped. Numeric literals are
/// assembled according to `convention`; two-character operators such as `<=`
/// are merged from adjacent delimiters.
///
/// # Errors
/// - `InvalidCharacter` for a character outside every category.
/// - `UnmatchedParentheses` for an excess `)` (reported at that `)`) or a
///   missing `)` (reported at the end of the text).
///
/// # Example
/// ```
/// use equate::{compiler::lexer::tokenize, util::num::NumericConvention};
///
/// let tokens = tokenize("if(a>=4,200;1;0)", &NumericConvention::invariant()).unwrap();
/// let texts = tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>();
/// assert_eq!(texts,
///            ["if", "(", "a", ">=", "4,200", ";", "1", ";", "0", ")"]);
/// ```
pub fn tokenize(text: &str, convention: &NumericConvention) -> CompileResult<Vec<Token>> {
    let pieces = scan(text)?;
    let tokens = assemble(text, &pieces, convention)?;
    let tokens = merge_compound_operators(tokens);

    trace!(count = tokens.len(),
           tokens = ?tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>(),
           "tokenized expression");

    Ok(tokens)
}

/// Runs the generated lexer and collects raw pieces with their byte spans.
fn scan(text: &str) -> CompileResult<Vec<(RawToken, Range<usize>)>> {
    let mut lexer = RawToken::lexer(text);
    let mut pieces = Vec::new();

    while let Some(piece) = lexer.next() {
        let span = lexer.span();
        match piece {
            Ok(raw) => pieces.push((raw, span)),
            Err(()) => {
                let character = text[span.start..].chars().next().unwrap_or_default();
                return Err(CompileError::InvalidCharacter { character,
                                                            position: span.start });
            },
        }
    }

    Ok(pieces)
}

/// Builds tokens from raw pieces, joining digit runs and separators into
/// numeric literals and tracking parenthesis depth.
fn assemble(text: &str,
            pieces: &[(RawToken, Range<usize>)],
            convention: &NumericConvention)
            -> CompileResult<Vec<Token>> {
    let mut tokens = Vec::with_capacity(pieces.len());
    let mut pending: Option<Range<usize>> = None;
    let mut depth = 0usize;

    for (index, (raw, span)) in pieces.iter().enumerate() {
        let continues_number = pending.as_ref().is_some_and(|number| number.end == span.start);

        match raw {
            RawToken::Digits => {
                if continues_number {
                    extend(&mut pending, span);
                } else {
                    flush(text, &mut pending, &mut tokens);
                    pending = Some(span.clone());
                }
            },
            RawToken::Word => {
                flush(text, &mut pending, &mut tokens);
                tokens.push(Token::new(&text[span.clone()], TokenCategory::Letter, span.start));
            },
            RawToken::Symbol => {
                let symbol = &text[span.clone()];
                let c = symbol.chars().next().unwrap_or_default();

                if c == convention.decimal_separator() {
                    if continues_number {
                        extend(&mut pending, span);
                    } else {
                        flush(text, &mut pending, &mut tokens);
                        pending = Some(span.clone());
                    }
                    continue;
                }

                if c == convention.group_separator()
                   && continues_number
                   && pieces.get(index + 1)
                            .is_some_and(|next| continues_grouping(text, next, span, convention))
                {
                    extend(&mut pending, span);
                    continue;
                }

                flush(text, &mut pending, &mut tokens);

                match classify(c, convention) {
                    TokenCategory::Delimiter | TokenCategory::Number => {
                        track_parentheses(c, span.start, &mut depth)?;
                        tokens.push(Token::new(symbol, TokenCategory::Delimiter, span.start));
                    },
                    _ => {
                        return Err(CompileError::InvalidCharacter { character: c,
                                                                    position:  span.start, });
                    },
                }
            },
            RawToken::Blank => flush(text, &mut pending, &mut tokens),
        }
    }

    flush(text, &mut pending, &mut tokens);

    if depth > 0 {
        return Err(CompileError::UnmatchedParentheses { position: text.len() });
    }

    Ok(tokens)
}

/// A group separator stays inside a literal only when the piece right after
/// it is adjacent and is either digits or another numeric separator.
fn continues_grouping(text: &str,
                      next: &(RawToken, Range<usize>),
                      separator: &Range<usize>,
                      convention: &NumericConvention)
                      -> bool {
    let (raw, span) = next;
    if span.start != separator.end {
        return false;
    }
    match raw {
        RawToken::Digits => true,
        RawToken::Symbol => text[span.clone()].chars().any(|c| convention.is_separator(c)),
        _ => false,
    }
}

fn extend(pending: &mut Option<Range<usize>>, span: &Range<usize>) {
    if let Some(number) = pending {
        number.end = span.end;
    }
}

fn flush(text: &str, pending: &mut Option<Range<usize>>, tokens: &mut Vec<Token>) {
    if let Some(number) = pending.take() {
        tokens.push(Token::new(&text[number.clone()], TokenCategory::Number, number.start));
    }
}

/// Keeps a running count of open parentheses. The count may never drop below
/// zero.
fn track_parentheses(c: char, position: usize, depth: &mut usize) -> CompileResult<()> {
    match c {
        '(' => *depth += 1,
        ')' => {
            *depth = depth.checked_sub(1)
                          .ok_or(CompileError::UnmatchedParentheses { position })?;
        },
        _ => {},
    }
    Ok(())
}

/// Merges physically adjacent delimiter pairs that spell a two-character
/// operator. Runs after the first scan because each decision needs one token
/// of lookahead.
fn merge_compound_operators(tokens: Vec<Token>) -> Vec<Token> {
    let mut merged = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter().peekable();

    while let Some(token) = iter.next() {
        if token.category == TokenCategory::Delimiter
           && let Some(next) = iter.peek()
           && next.category == TokenCategory::Delimiter
           && token.position + token.text.len() == next.position
        {
            let combined = format!("{}{}", token.text, next.text);
            if COMPOUND_OPERATORS.contains(&combined.as_str()) {
                iter.next();
                merged.push(Token::new(combined, TokenCategory::Delimiter, token.position));
                continue;
            }
        }
        merged.push(token);
    }

    merged
}
