use std::iter::Peekable;

use crate::{
    ast::Node,
    compiler::{
        parser::{
            core::{ParseContext, ParseResult},
            unary::parse_sign,
        },
        token::Token,
    },
    error::CompileError,
};

/// Operators of the relational/logical level.
pub const RELATIONAL_OPERATORS: &[&str] = &["&&", "||", "==", "<", ">", "<=", ">=", "!=", "<>"];
/// Operators of the additive level.
pub const ADDITIVE_OPERATORS: &[&str] = &["+", "-"];
/// Operators of the multiplicative level.
pub const MULTIPLICATIVE_OPERATORS: &[&str] = &["*", "/"];
/// Operators of the modulo level.
pub const MODULO_OPERATORS: &[&str] = &["%"];
/// Operators of the power level.
pub const POWER_OPERATORS: &[&str] = &["^"];

/// Parses relational and logical operators.
///
/// Handles `&&`, `||`, `==`, `<`, `>`, `<=`, `>=`, `!=` and `<>`. The right
/// operand is parsed at this same level, so chains associate to the right:
/// `a < b < c` parses as `a < (b < c)`.
///
/// The rule is: `relational := additive (op relational)?`
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>,
                               context: &mut ParseContext<'_>)
                               -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_additive(tokens, context)?;

    while let Some(operator) = next_operator(tokens, RELATIONAL_OPERATORS) {
        let right = parse_relational(tokens, context)?;
        left = apply_operator(operator, left, right, context)?;
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>,
                             context: &mut ParseContext<'_>)
                             -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, context, ADDITIVE_OPERATORS, parse_multiplicative)
}

/// Parses multiplication and division expressions.
///
/// The rule is: `multiplicative := modulo (("*" | "/") modulo)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   context: &mut ParseContext<'_>)
                                   -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, context, MULTIPLICATIVE_OPERATORS, parse_modulo)
}

/// Parses remainder expressions.
///
/// `%` binds tighter than `*` and `/`, so `7 * 5 % 3` is `7 * (5 % 3)`.
///
/// The rule is: `modulo := power ("%" power)*`
pub fn parse_modulo<'a, I>(tokens: &mut Peekable<I>,
                           context: &mut ParseContext<'_>)
                           -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, context, MODULO_OPERATORS, parse_power)
}

/// Parses exponentiation expressions.
///
/// Unlike most grammars this level is left-associative, `2 ^ 3 ^ 2` is
/// `(2 ^ 3) ^ 2`, and it sits above the sign level, so `-2 ^ 2` is
/// `(-2) ^ 2`.
///
/// The rule is: `power := sign ("^" sign)*`
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>,
                          context: &mut ParseContext<'_>)
                          -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, context, POWER_OPERATORS, parse_sign)
}

/// Shared loop for the left-associative levels: parse an operand with
/// `operand`, then fold every following `symbols` operator and operand into
/// the left side.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 context: &mut ParseContext<'_>,
                                 symbols: &[&str],
                                 operand: impl Fn(&mut Peekable<I>,
                                                  &mut ParseContext<'_>)
                                                  -> ParseResult<Node>)
                                 -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let mut left = operand(tokens, context)?;

    while let Some(operator) = next_operator(tokens, symbols) {
        let right = operand(tokens, context)?;
        left = apply_operator(operator, left, right, context)?;
    }

    Ok(left)
}

/// Consumes and returns the next token if it is a delimiter whose text is
/// one of `symbols`.
fn next_operator<'a, I>(tokens: &mut Peekable<I>, symbols: &[&str]) -> Option<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next_if(|token| symbols.iter().any(|symbol| token.is_delimiter(symbol)))
}

/// Resolves `token` in the operator registry and binds both operands into a
/// binary node.
///
/// # Errors
/// `UnknownOperator` if the symbol has no registered meaning.
fn apply_operator(token: &Token,
                  left: Node,
                  right: Node,
                  context: &ParseContext<'_>)
                  -> ParseResult<Node> {
    let operator = context.operators
                          .resolve(&token.text)
                          .ok_or_else(|| CompileError::UnknownOperator { symbol:   token.text.clone(),
                                                                         position: token.position, })?;

    Ok(Node::BinaryOp { operator,
                        left: Box::new(left),
                        right: Box::new(right) })
}
