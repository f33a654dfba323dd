use std::iter::Peekable;

use crate::{
    ast::Node,
    compiler::{
        parser::binary::parse_relational,
        registry::{functions::FunctionTable, operators::OperatorTable},
        token::Token,
        variables::VariableStore,
    },
    error::CompileError,
    util::num::NumericConvention,
};

pub type ParseResult<T> = Result<T, CompileError>;

/// State shared by every grammar rule during one compilation.
///
/// The registries are only read. The variable store is mutated: the first
/// reference to a name creates its cell.
pub struct ParseContext<'c> {
    /// Convention used to read numeric literals.
    pub convention: &'c NumericConvention,
    /// Operator symbol table.
    pub operators:  &'c OperatorTable,
    /// Function name table.
    pub functions:  &'c FunctionTable,
    /// Variable cells, created on first reference.
    pub variables:  &'c mut VariableStore,
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing and for each function
/// argument. It begins at the lowest-precedence level, relational/logical,
/// and recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := relational`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               context: &mut ParseContext<'_>)
                               -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    parse_relational(tokens, context)
}

/// Parses a complete token sequence into a single tree.
///
/// # Errors
/// - `EmptyExpression` if there are no tokens.
/// - `UnexpectedToken` if tokens remain after the expression.
/// - Any error raised by the grammar rules.
///
/// # Example
/// ```
/// use equate::compiler::{
///     lexer::tokenize,
///     parser::core::{ParseContext, parse_tokens},
///     registry::{functions::FunctionTable, operators::OperatorTable},
///     variables::VariableStore,
/// };
/// use equate::util::num::NumericConvention;
///
/// let convention = NumericConvention::invariant();
/// let operators = OperatorTable::standard();
/// let functions = FunctionTable::standard();
/// let mut variables = VariableStore::new();
///
/// let tokens = tokenize("a < b < c", &convention).unwrap();
/// let mut context = ParseContext { convention: &convention,
///                                  operators:  &operators,
///                                  functions:  &functions,
///                                  variables:  &mut variables, };
/// let tree = parse_tokens(&tokens, &mut context).unwrap();
///
/// assert_eq!(tree.to_string(), "(a < (b < c))");
/// assert_eq!(variables.len(), 3);
/// ```
pub fn parse_tokens(tokens: &[Token], context: &mut ParseContext<'_>) -> ParseResult<Node> {
    if tokens.is_empty() {
        return Err(CompileError::EmptyExpression);
    }

    let mut iter = tokens.iter().peekable();
    let tree = parse_expression(&mut iter, context)?;

    if let Some(token) = iter.next() {
        return Err(CompileError::UnexpectedToken { token:    token.text.clone(),
                                                   position: token.position, });
    }

    Ok(tree)
}
