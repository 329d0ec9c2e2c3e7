use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Expr, SPECIAL_FORMS},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses expressions until the closing `)` of the list opened on `line`.
///
/// The closing parenthesis is consumed. An immediately encountered `)`
/// produces an empty list.
///
/// # Errors
/// Returns `ExpectedClosingParen` if the stream ends first, and propagates
/// errors from the expressions themselves.
pub(in crate::interpreter::parser) fn parse_until_close<'a, I>(tokens: &mut Peekable<I>,
                                                               line: usize)
                                                               -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut items = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RParen, _)) => {
                tokens.next();
                return Ok(items);
            },
            Some(_) => items.push(parse_expression(tokens, line)?),
            None => return Err(ParseError::ExpectedClosingParen { line }),
        }
    }
}

/// Parses the body of a `lambda` or procedure `define` up to its closing `)`.
///
/// # Errors
/// Returns `IllFormedSpecialForm` for an empty body.
pub(in crate::interpreter::parser) fn parse_body<'a, I>(tokens: &mut Peekable<I>,
                                                        form: &str,
                                                        line: usize)
                                                        -> ParseResult<Rc<[Expr]>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let body = parse_until_close(tokens, line)?;

    if body.is_empty() {
        let details = "body must contain at least one expression".to_string();
        return Err(ParseError::IllFormedSpecialForm { form: form.to_string(),
                                                      details,
                                                      line });
    }

    Ok(body.into())
}

/// Parses formal parameter names up to the closing `)` of the parameter list.
///
/// Grammar: `params := identifier* ")"`
///
/// # Errors
/// Returns a `ParseError` if:
/// - a parameter is not an identifier,
/// - a parameter is a special form keyword,
/// - the same name appears twice,
/// - the stream ends first.
pub(in crate::interpreter::parser) fn parse_params<'a, I>(tokens: &mut Peekable<I>,
                                                          form: &str,
                                                          line: usize)
                                                          -> ParseResult<Rc<[String]>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut params: Vec<String> = Vec::new();

    loop {
        match tokens.next() {
            Some((Token::RParen, _)) => return Ok(params.into()),
            Some((Token::Identifier(name), param_line)) => {
                check_bindable(name, *param_line)?;
                if params.contains(name) {
                    return Err(ParseError::DuplicateParameter { name: name.clone(),
                                                                line: *param_line, });
                }
                params.push(name.clone());
            },
            Some((tok, param_line)) => {
                return Err(ParseError::IllFormedSpecialForm { form:    form.to_string(),
                                                              details: format!("Expected parameter name, found {tok:?}"),
                                                              line:    *param_line, });
            },
            None => return Err(ParseError::ExpectedClosingParen { line }),
        }
    }
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the identifier is a special form keyword,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              form: &str,
                                                              line: usize)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), name_line)) => {
            check_bindable(name, *name_line)?;
            Ok(name.clone())
        },
        Some((tok, name_line)) => {
            Err(ParseError::IllFormedSpecialForm { form:    form.to_string(),
                                                   details: format!("Expected identifier, found {tok:?}"),
                                                   line:    *name_line, })
        },
        None => Err(ParseError::ExpectedClosingParen { line }),
    }
}

/// Rejects special form keywords in binding position.
///
/// # Example
/// ```
/// use schemer::interpreter::parser::utils::check_bindable;
///
/// assert!(check_bindable("square", 1).is_ok());
/// assert!(check_bindable("lambda", 1).is_err());
/// ```
pub fn check_bindable(name: &str, line: usize) -> ParseResult<()> {
    if SPECIAL_FORMS.contains(&name) {
        return Err(ParseError::IdentifierReserved { name: name.to_string(),
                                                    line });
    }
    Ok(())
}
