/// Lexical units.
///
/// Declares the `Token` type produced by the lexer and consumed by the
/// parser, together with the character categories used to classify input.
pub mod token;
/// The lexer turns expression text into tokens.
///
/// Raw scanning is generated by `logos`; a second pass applies the caller's
/// numeric convention to assemble numeric literals, and a third pass merges
/// two-character operators. Parenthesis balance is checked along the way.
///
/// # Responsibilities
/// - Classifies every character as number, letter, delimiter or whitespace.
/// - Rejects characters outside those categories.
/// - Reports unmatched parentheses as early as possible.
pub mod lexer;
/// The parser builds evaluation trees from tokens.
///
/// A precedence-climbing recursive descent over the token sequence that
/// resolves operators and functions against the registries and binds
/// variables to their cells while the tree is built.
///
/// # Responsibilities
/// - Implements operator precedence and associativity.
/// - Validates call arity against function registrations.
/// - Surfaces structural errors with the offending token.
pub mod parser;
/// Operator and function registries.
///
/// Maps operator symbols to numeric functions and function names to
/// arity-tagged callables, including the built-in set installed at
/// construction.
pub mod registry;
/// Variable cells.
///
/// A name-keyed table of shared numeric cells. Compiled trees observe these
/// cells, so assignments are visible without recompilation.
pub mod variables;
/// Tree evaluation.
///
/// Walks a compiled tree and produces its numeric value.
pub mod evaluator;
/// The public compiler type.
///
/// Ties the stages together: owns the expression text, numeric convention,
/// registries and variable store, compiles lazily and caches the tree.
pub mod core;
