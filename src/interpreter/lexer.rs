use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Keywords start with an uppercase letter and identifiers with a lowercase
/// one, so a keyword such as `Pi` can never be read as a variable.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `0` or `4.30`, kept as written.
    /// No leading zeros except for the literal `0` itself.
    #[regex(r"(([1-9][0-9]*)|0)(\.[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),
    /// Identifier tokens; variable names such as `x`, `test_var` or `x-1`.
    #[regex(r"[a-z][a-zA-Z0-9_-]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `Sin`
    #[token("Sin")]
    Sin,
    /// `Poly`
    #[token("Poly")]
    Poly,
    /// `Apply`
    #[token("Apply")]
    Apply,
    /// `Derivate`
    #[token("Derivate")]
    Derivate,
    /// `Times`
    #[token("Times")]
    Times,
    /// `Pi`
    #[token("Pi")]
    Pi,
    /// `E`
    #[token("E")]
    E,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `=`
    #[token("=")]
    Equals,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// Spaces.
    #[regex(r" +", logos::skip)]
    Ignored,
    /// End of input. Never matched; appended by [`tokenize`].
    End,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(text) | Self::Identifier(text) => write!(f, "{text}"),
            Self::Sin => write!(f, "Sin"),
            Self::Poly => write!(f, "Poly"),
            Self::Apply => write!(f, "Apply"),
            Self::Derivate => write!(f, "Derivate"),
            Self::Times => write!(f, "Times"),
            Self::Pi => write!(f, "Pi"),
            Self::E => write!(f, "E"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Equals => write!(f, "="),
            Self::Comma => write!(f, ","),
            Self::Dot => write!(f, "."),
            Self::Ignored => write!(f, " "),
            Self::End => write!(f, "<end of input>"),
        }
    }
}

/// Converts source text into a token sequence terminated by [`Token::End`].
///
/// Each token is paired with the byte offset where it starts; `End` carries
/// the length of the input. Spaces are skipped.
///
/// # Errors
/// Returns `ParseError::UnexpectedCharacter` with the offending input and its
/// position when no token pattern matches.
///
/// # Example
/// ```
/// use polycalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("Pi + x1").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Pi, 0),
///                 (Token::Plus, 3),
///                 (Token::Identifier("x1".to_string()), 5),
///                 (Token::End, 7)]);
///
/// assert_eq!(tokenize("4.30").unwrap()[0], (Token::Number("4.30".to_string()), 0));
/// assert!(tokenize("2 % 3").is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            return Err(ParseError::UnexpectedCharacter { character: lexer.slice().to_string(),
                                                         position:  lexer.span().start, });
        }
    }

    tokens.push((Token::End, source.len()));
    Ok(tokens)
}
