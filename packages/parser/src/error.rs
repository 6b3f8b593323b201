use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

/// Modifier grammar violations. Each variant carries the offending class
/// token so callers can render a diagnostic tied to the literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Duplicate media modifier '{second}' in '{token}'")]
    DuplicateMedia { token: String, second: String },

    #[error("Duplicate pseudo modifier '{pseudo}' in '{token}'")]
    DuplicatePseudo { token: String, pseudo: String },

    #[error("Negation must be the first modifier in '{token}'")]
    MisplacedNegation { token: String },

    #[error("Negation must be followed by a media modifier in '{token}'")]
    NegationWithoutMedia { token: String },

    #[error("Negation cannot be combined with pseudo modifiers in '{token}'")]
    NegationWithPseudo { token: String },

    #[error("Missing base token in '{token}'")]
    EmptyBase { token: String },
}

impl ParseError {
    pub fn duplicate_media(token: impl Into<String>, second: impl Into<String>) -> Self {
        Self::DuplicateMedia {
            token: token.into(),
            second: second.into(),
        }
    }

    pub fn duplicate_pseudo(token: impl Into<String>, pseudo: impl Into<String>) -> Self {
        Self::DuplicatePseudo {
            token: token.into(),
            pseudo: pseudo.into(),
        }
    }

    /// The class token the error is about.
    pub fn token(&self) -> &str {
        match self {
            Self::DuplicateMedia { token, .. }
            | Self::DuplicatePseudo { token, .. }
            | Self::MisplacedNegation { token }
            | Self::NegationWithoutMedia { token }
            | Self::NegationWithPseudo { token }
            | Self::EmptyBase { token } => token,
        }
    }
}
