use thiserror::Error;

pub type CompileResult<T> = Result<T, CompileError>;

/// Structural failures. A document that cannot be scanned cannot be safely
/// patched, so the whole compile call fails; token-level modifier errors
/// never land here — they become visible marker rules instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("Unterminated comment at byte {pos}")]
    UnterminatedComment { pos: usize },

    #[error("Unterminated tag at byte {pos}")]
    UnterminatedTag { pos: usize },

    #[error("Unterminated attribute value in tag at byte {pos}")]
    UnterminatedAttribute { pos: usize },

    #[error("Missing closing tag for <{tag}> element at byte {pos}")]
    UnclosedRawText { tag: String, pos: usize },
}

impl CompileError {
    pub fn unterminated_comment(pos: usize) -> Self {
        Self::UnterminatedComment { pos }
    }

    pub fn unterminated_tag(pos: usize) -> Self {
        Self::UnterminatedTag { pos }
    }

    pub fn unterminated_attribute(pos: usize) -> Self {
        Self::UnterminatedAttribute { pos }
    }

    pub fn unclosed_raw_text(tag: impl Into<String>, pos: usize) -> Self {
        Self::UnclosedRawText {
            tag: tag.into(),
            pos,
        }
    }
}
