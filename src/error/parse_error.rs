#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// No token pattern matched the input at this position.
    UnexpectedCharacter {
        /// The offending slice of input.
        character: String,
        /// Byte offset of the offending input.
        position:  usize,
    },
    /// Found a token the grammar does not allow here.
    UnexpectedToken {
        /// The token encountered, as written in the source.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// Reached the end of input while the grammar still expected a token.
    UnexpectedEndOfInput {
        /// Byte offset of the end of input.
        position: usize,
    },
}

impl ParseError {
    /// Source position the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => {
                write!(f,
                       "Error at position {position}: Unexpected character '{character}'.")
            },
            Self::UnexpectedToken { token, position } => {
                write!(f, "Syntax error at token '{token}' at position {position}.")
            },
            Self::UnexpectedEndOfInput { .. } => write!(f, "Syntax error at EOF."),
        }
    }
}

impl std::error::Error for ParseError {}
