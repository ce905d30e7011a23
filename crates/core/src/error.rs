use thiserror::Error;

/// Failure of a render attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError<E> {
    /// The pending computation settled with an error
    #[error("pending computation failed: {0}")]
    Computation(E),
}

impl<E> RenderError<E> {
    pub fn into_inner(self) -> E {
        match self {
            Self::Computation(err) => err,
        }
    }

    pub const fn get(&self) -> &E {
        match self {
            Self::Computation(err) => err,
        }
    }
}
