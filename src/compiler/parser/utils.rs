use std::iter::Peekable;

use crate::{
    ast::Node,
    compiler::{
        parser::core::{ParseContext, ParseResult, parse_expression},
        token::Token,
    },
    error::CompileError,
};

/// Argument separator inside a call.
pub const ARGUMENT_SEPARATOR: &str = ";";

/// Parses a `;`-separated argument list up to and including the closing `)`.
///
/// The opening `(` must already be consumed. An immediately encountered `)`
/// produces an empty list. Each argument is a full expression.
///
/// Grammar (simplified): `arguments := (expression (";" expression)*)? ")"`
///
/// # Errors
/// - `MissingArgument` when a `;` or `)` appears where an argument should
///   start (`min(;2)`, `min(1;)`), or the tokens run out there.
/// - `UnexpectedToken` when an argument is followed by anything other than
///   `;` or `)`.
pub(in crate::compiler::parser) fn parse_arguments<'a, I>(tokens: &mut Peekable<I>,
                                                          context: &mut ParseContext<'_>,
                                                          function: &Token)
                                                          -> ParseResult<Vec<Node>>
    where I: Iterator<Item = &'a Token>
{
    let mut arguments = Vec::new();

    if tokens.next_if(|token| token.is_delimiter(")")).is_some() {
        return Ok(arguments);
    }

    loop {
        match tokens.peek() {
            Some(token) if token.is_delimiter(ARGUMENT_SEPARATOR) || token.is_delimiter(")") => {
                return Err(CompileError::MissingArgument { name:     function.text.clone(),
                                                           position: token.position, });
            },
            None => {
                return Err(CompileError::MissingArgument { name:     function.text.clone(),
                                                           position: function.position, });
            },
            Some(_) => {},
        }

        arguments.push(parse_expression(tokens, context)?);

        match tokens.next() {
            Some(token) if token.is_delimiter(ARGUMENT_SEPARATOR) => {},
            Some(token) if token.is_delimiter(")") => break,
            Some(token) => {
                return Err(CompileError::UnexpectedToken { token:    token.text.clone(),
                                                           position: token.position, });
            },
            None => return Err(CompileError::UnexpectedEndOfInput),
        }
    }

    Ok(arguments)
}
