use logos::{Lexer, Logos, Skip};

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Special form keywords such as `define` are ordinary identifiers at this
/// stage; the parser gives them meaning.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Numeric literal tokens, such as `486`, `-7`, `2.7`, `.5` or `1e-3`.
    #[regex(r"[+-]?[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number, priority = 5)]
    #[regex(r"[+-]?\.[0-9]+([eE][+-]?[0-9]+)?", parse_number, priority = 5)]
    Number(f64),
    /// Boolean literal tokens: `#t`, `#f`, `#true`, `#false`.
    #[token("#t", parse_bool)]
    #[token("#true", parse_bool)]
    #[token("#f", parse_bool)]
    #[token("#false", parse_bool)]
    Bool(bool),
    /// Identifier tokens such as `square`, `good-enough?` or `+`.
    #[regex(r"[a-zA-Z!$%&*/:<=>?^_~+\-][a-zA-Z0-9!$%&*/:<=>?^_~+\-.]*",
            |lex| lex.slice().to_string(),
            priority = 2)]
    Identifier(String),
    /// `; Comments.`
    #[token(";", skip_comment)]
    Comment,
    /// Newlines only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses a boolean literal from the current token slice.
///
/// # Returns
/// - `Some(true)` for `#t` and `#true`.
/// - `Some(false)` for `#f` and `#false`.
/// - `None` otherwise.
fn parse_bool(lex: &Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "#t" | "#true" => Some(true),
        "#f" | "#false" => Some(false),
        _ => None,
    }
}

/// Skips a `;` comment up to, but not including, the end of the line.
fn skip_comment(lex: &mut Lexer<Token>) -> Skip {
    let rest = lex.remainder();
    lex.bump(rest.find('\n').unwrap_or(rest.len()));
    Skip
}

/// Tokenizes `source` into `(Token, line)` pairs.
///
/// Lines are counted from 1.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for the first slice that is not a
/// valid token.
///
/// # Example
/// ```
/// use schemer::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(+ 1\n   2.5) ; sum").unwrap();
///
/// assert_eq!(tokens,
///            vec![(Token::LParen, 1),
///                 (Token::Identifier("+".to_string()), 1),
///                 (Token::Number(1.0), 1),
///                 (Token::Number(2.5), 2),
///                 (Token::RParen, 2)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                     line:  lexer.extras.line, });
        }
    }

    Ok(tokens)
}
