use std::iter::Peekable;

use crate::{
    ast::Node,
    compiler::{
        parser::{
            core::{ParseContext, ParseResult, parse_expression},
            utils::parse_arguments,
        },
        token::{Token, TokenCategory},
    },
    error::CompileError,
    util::num::parse_number,
};

/// Parses an optionally signed atom.
///
/// A single leading `+` is dropped; a single leading `-` wraps the atom in a
/// [`Node::Negate`]. Signs do not repeat: `--3` is rejected, while `4--3`
/// is `4 - (-3)` because the first `-` belongs to the additive level.
///
/// Grammar: `sign := ("+" | "-")? atom`
pub(crate) fn parse_sign<'a, I>(tokens: &mut Peekable<I>,
                                context: &mut ParseContext<'_>)
                                -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let sign = tokens.next_if(|token| token.is_delimiter("+") || token.is_delimiter("-"));
    let atom = parse_atom(tokens, context)?;

    match sign {
        Some(token) if token.is_delimiter("-") => Ok(Node::Negate { operand: Box::new(atom) }),
        _ => Ok(atom),
    }
}

/// Parses an atomic expression.
///
/// Atoms form the base of the grammar:
/// - parenthesized expressions
/// - numeric literals
/// - variables
/// - function calls
///
/// Grammar:
/// ```text
///     atom := "(" expression ")"
///           | NUMBER
///           | IDENTIFIER
///           | IDENTIFIER "(" arguments ")"
/// ```
/// # Errors
/// - `UnexpectedEndOfInput` when no token is left.
/// - `UnexpectedToken` for a delimiter that cannot start an atom.
pub(crate) fn parse_atom<'a, I>(tokens: &mut Peekable<I>,
                                context: &mut ParseContext<'_>)
                                -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let token = *tokens.peek().ok_or(CompileError::UnexpectedEndOfInput)?;

    match token.category {
        TokenCategory::Delimiter if token.is_delimiter("(") => parse_grouping(tokens, context),
        TokenCategory::Number => {
            tokens.next();
            parse_literal(token, context)
        },
        TokenCategory::Letter => {
            tokens.next();
            parse_identifier_or_function(token, tokens, context)
        },
        _ => Err(CompileError::UnexpectedToken { token:    token.text.clone(),
                                                 position: token.position, }),
    }
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         context: &mut ParseContext<'_>)
                         -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    tokens.next();
    let inner = parse_expression(tokens, context)?;

    match tokens.next() {
        Some(token) if token.is_delimiter(")") => Ok(inner),
        Some(token) => Err(CompileError::UnexpectedToken { token:    token.text.clone(),
                                                           position: token.position, }),
        None => Err(CompileError::UnexpectedEndOfInput),
    }
}

/// Reads a numeric literal under the active convention into a constant.
///
/// # Errors
/// `NumericFormat` if the literal is malformed.
fn parse_literal(token: &Token, context: &ParseContext<'_>) -> ParseResult<Node> {
    let value = parse_number(&token.text, context.convention).ok_or_else(|| {
                    CompileError::NumericFormat { literal:  token.text.clone(),
                                                  position: token.position, }
                })?;

    Ok(Node::Constant { value })
}

/// Parses a variable reference or a function call.
///
/// An identifier directly followed by `(` is a call; the function must be
/// registered and receive exactly its registered number of arguments. Any
/// other identifier is a variable, bound to its cell in the store (creating
/// the cell on first reference).
///
/// # Errors
/// - `UnknownFunction` for a call to an unregistered name.
/// - `ArgumentCountMismatch` or `MissingArgument` for a malformed argument
///   list.
fn parse_identifier_or_function<'a, I>(name: &Token,
                                       tokens: &mut Peekable<I>,
                                       context: &mut ParseContext<'_>)
                                       -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    if tokens.next_if(|token| token.is_delimiter("(")).is_none() {
        let cell = context.variables.get_or_create(&name.text);
        return Ok(Node::Variable { name: name.text.clone(),
                                   cell });
    }

    let function = context.functions
                          .get(&name.text)
                          .cloned()
                          .ok_or_else(|| CompileError::UnknownFunction { name:     name.text.clone(),
                                                                         position: name.position, })?;

    let arguments = parse_arguments(tokens, context, name)?;

    if arguments.len() != function.arity() {
        return Err(CompileError::ArgumentCountMismatch { name:     name.text.clone(),
                                                         expected: function.arity(),
                                                         found:    arguments.len(), });
    }

    Ok(Node::FunctionCall { name: name.text.clone(),
                            function,
                            arguments })
}
