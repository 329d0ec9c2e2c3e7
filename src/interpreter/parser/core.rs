use std::iter::Peekable;

use crate::{
    ast::{Expr, SPECIAL_FORMS},
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::{special_form::parse_special_form, utils::parse_until_close},
    },
    util::stack::ensure_sufficient_stack,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Tokenizes and parses a whole source text.
///
/// # Returns
/// The top-level expressions in source order.
///
/// # Example
/// ```
/// use schemer::{ast::Expr, interpreter::parser::core::parse_source};
///
/// let program = parse_source("(define size 2)\n(* 5 size)").unwrap();
///
/// assert_eq!(program.len(), 2);
/// assert!(matches!(program[0], Expr::Definition { .. }));
/// assert_eq!(program[1].line_number(), 2);
/// ```
pub fn parse_source(source: &str) -> ParseResult<Vec<Expr>> {
    let tokens = tokenize(source)?;
    parse_program(&mut tokens.iter().peekable())
}

/// Parses every expression left in the token stream.
///
/// Grammar: `program := expression*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut program = Vec::new();

    while let Some(&(_, line)) = tokens.peek().copied() {
        program.push(parse_expression(tokens, line)?);
    }

    Ok(program)
}

/// Parses a single expression.
///
/// Grammar:
/// ```text
///     expression  := number | boolean | identifier | "(" list ")"
///     list        := special_form | expression expression*
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an expression.
/// - `line`: Line of the enclosing form, reported if the stream is empty.
///
/// # Errors
/// - `UnbalancedClosingParen` when the expression starts with `)`.
/// - `IdentifierReserved` for a bare special form keyword such as `if`.
/// - `UnexpectedEndOfInput` on `line` when the stream is empty.
/// - Propagates any errors from nested expressions.
///
/// # Example
/// ```
/// use schemer::{
///     error::ParseError,
///     interpreter::{lexer::tokenize, parser::core::parse_expression},
/// };
///
/// let tokens = tokenize("(* 6 7)").unwrap();
/// let mut stream = tokens.iter().peekable();
///
/// assert!(parse_expression(&mut stream, 1).is_ok());
/// assert!(matches!(parse_expression(&mut stream, 4),
///                  Err(ParseError::UnexpectedEndOfInput { line: 4 })));
/// ```
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    ensure_sufficient_stack(|| parse_datum(tokens, line))
}

fn parse_datum<'a, I>(tokens: &mut Peekable<I>, enclosing_line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Number(value), line)) => Ok(Expr::Number { value: *value,
                                                                line:  *line, }),
        Some((Token::Bool(value), line)) => Ok(Expr::Bool { value: *value,
                                                            line:  *line, }),
        Some((Token::Identifier(name), line)) => {
            if SPECIAL_FORMS.contains(&name.as_str()) {
                return Err(ParseError::IdentifierReserved { name: name.clone(),
                                                            line: *line, });
            }
            Ok(Expr::Symbol { name: name.clone(),
                              line: *line, })
        },
        Some((Token::LParen, line)) => parse_list(tokens, *line),
        Some((Token::RParen, line)) => Err(ParseError::UnbalancedClosingParen { line: *line }),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: enclosing_line }),
    }
}

/// Parses the inside of a parenthesized expression, after the `(`.
///
/// A leading special form keyword hands over to [`parse_special_form`];
/// anything else is a combination.
fn parse_list<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek().copied() {
        Some((Token::Identifier(keyword), _)) if SPECIAL_FORMS.contains(&keyword.as_str()) => {
            tokens.next();
            parse_special_form(keyword, tokens, line)
        },
        Some((Token::RParen, _)) => Err(ParseError::EmptyCombination { line }),
        Some(_) => {
            let operator = parse_expression(tokens, line)?;
            let operands = parse_until_close(tokens, line)?;

            Ok(Expr::Combination { operator: Box::new(operator),
                                   operands,
                                   line })
        },
        None => Err(ParseError::ExpectedClosingParen { line }),
    }
}
