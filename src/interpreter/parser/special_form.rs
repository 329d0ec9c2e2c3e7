use std::iter::Peekable;

use crate::{
    ast::{CondClause, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{check_bindable, parse_body, parse_identifier, parse_params, parse_until_close},
        },
    },
};

/// Parses a special form whose keyword has already been consumed.
///
/// # Parameters
/// - `keyword`: The keyword after the opening parenthesis.
/// - `tokens`: Token stream positioned after the keyword.
/// - `line`: Line number of the opening parenthesis.
///
/// # Errors
/// `IdentifierReserved` for `else` outside a `cond` clause, otherwise whatever
/// the form-specific parser reports.
pub fn parse_special_form<'a, I>(keyword: &str,
                                 tokens: &mut Peekable<I>,
                                 line: usize)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match keyword {
        "define" => parse_define(tokens, line),
        "if" => parse_if(tokens, line),
        "cond" => parse_cond(tokens, line),
        "lambda" => parse_lambda(tokens, line),
        _ => Err(ParseError::IdentifierReserved { name: keyword.to_string(),
                                                  line }),
    }
}

/// Parses a definition in either of its two shapes:
///
/// ```text
///     (define <name> <expression>)
///     (define (<name> <formal parameters>) <body>)
/// ```
///
/// The second shape is rewritten into the first with a `lambda` value.
fn parse_define<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), name_line)) => {
            check_bindable(name, *name_line)?;

            let mut values = parse_until_close(tokens, line)?;
            if values.len() != 1 {
                return Err(ill_formed("define",
                                      format!("Expected one value for {name}, found {}",
                                              values.len()),
                                      line));
            }

            Ok(Expr::Definition { name: name.clone(),
                                  value: Box::new(values.remove(0)),
                                  line })
        },
        Some((Token::LParen, _)) => {
            let name = parse_identifier(tokens, "define", line)?;
            let params = parse_params(tokens, "define", line)?;
            let body = parse_body(tokens, "define", line)?;

            Ok(Expr::Definition { name,
                                  value: Box::new(Expr::Lambda { params, body, line }),
                                  line })
        },
        Some((tok, tok_line)) => {
            Err(ill_formed("define", format!("Expected a name, found {tok:?}"), *tok_line))
        },
        None => Err(ParseError::ExpectedClosingParen { line }),
    }
}

/// Parses `(if <predicate> <consequent> [<alternative>])`.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let parts = parse_until_close(tokens, line)?;
    let count = parts.len();
    let mut parts = parts.into_iter();

    match (parts.next(), parts.next(), parts.next()) {
        (Some(predicate), Some(consequent), alternative) if count <= 3 => {
            Ok(Expr::If { predicate: Box::new(predicate),
                          consequent: Box::new(consequent),
                          alternative: alternative.map(Box::new),
                          line })
        },
        _ => Err(ill_formed("if",
                            format!("Expected a predicate, a consequent and an optional \
                                     alternative, found {count} expression(s)"),
                            line)),
    }
}

/// Parses `(cond (<p1> <e1> ...) ... (else <e> ...))`.
///
/// Each clause is a parenthesized predicate followed by zero or more body
/// expressions. An `else` clause needs a body and must come last.
fn parse_cond<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut clauses: Vec<CondClause> = Vec::new();

    loop {
        match tokens.next() {
            Some((Token::RParen, _)) => break,
            Some((Token::LParen, clause_line)) => {
                if clauses.last().is_some_and(|c| c.predicate.is_none()) {
                    return Err(ill_formed("cond", "else clause must be last".to_string(), *clause_line));
                }
                clauses.push(parse_cond_clause(tokens, *clause_line)?);
            },
            Some((tok, tok_line)) => {
                return Err(ill_formed("cond", format!("Expected a clause, found {tok:?}"), *tok_line));
            },
            None => return Err(ParseError::ExpectedClosingParen { line }),
        }
    }

    Ok(Expr::Cond { clauses, line })
}

/// Parses a single `cond` clause after its opening parenthesis.
fn parse_cond_clause<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<CondClause>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Identifier(keyword), _)) if keyword == "else" => {
            tokens.next();
            let body = parse_until_close(tokens, line)?;
            if body.is_empty() {
                return Err(ill_formed("cond", "else clause needs a body".to_string(), line));
            }
            Ok(CondClause { predicate: None,
                            body })
        },
        Some((Token::RParen, _)) => Err(ill_formed("cond", "empty clause".to_string(), line)),
        Some(_) => {
            let predicate = parse_expression(tokens, line)?;
            let body = parse_until_close(tokens, line)?;
            Ok(CondClause { predicate: Some(predicate),
                            body })
        },
        None => Err(ParseError::ExpectedClosingParen { line }),
    }
}

/// Parses `(lambda (<formal parameters>) <body>)`.
fn parse_lambda<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::LParen, _)) => {
            let params = parse_params(tokens, "lambda", line)?;
            let body = parse_body(tokens, "lambda", line)?;

            Ok(Expr::Lambda { params, body, line })
        },
        Some((tok, tok_line)) => {
            Err(ill_formed("lambda", format!("Expected a parameter list, found {tok:?}"), *tok_line))
        },
        None => Err(ParseError::ExpectedClosingParen { line }),
    }
}

fn ill_formed(form: &str, details: String, line: usize) -> ParseError {
    ParseError::IllFormedSpecialForm { form: form.to_string(),
                                       details,
                                       line }
}
