use futures_util::future::{ready, Ready};

/// Inputs shared by [`Await`](crate::Await) and [`ClientAwait`](crate::ClientAwait).
///
/// `resolve` is the pending computation settling to `Result<T, E>`,
/// `children` converts the resolved value into output.
#[derive(Debug, Clone)]
pub struct AwaitProps<F, C> {
    pub resolve: F,
    pub children: C,
}

impl<F, C> AwaitProps<F, C> {
    pub const fn new(resolve: F, children: C) -> Self {
        Self { resolve, children }
    }
}

impl<T, E, C> AwaitProps<Ready<Result<T, E>>, C> {
    /// Create props with an already settled computation
    pub fn ready(result: Result<T, E>, children: C) -> Self {
        Self::new(ready(result), children)
    }
}
