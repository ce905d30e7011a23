//! Server variant, suspending the render call until the computation settles

use std::future::{Future, IntoFuture};

use await_component_core::RenderError;
use futures_util::future::BoxFuture;

use crate::AwaitProps;

/// Renders `children` with the resolved value of `resolve`.
///
/// The render call is suspended at the single `.await` on `resolve`. A failed
/// computation is returned as [`RenderError::Computation`] and `children` is not called.
/// Dropping the future abandons the computation.
#[derive(Debug)]
pub struct Await<F, C> {
    props: AwaitProps<F, C>,
}

impl<F, C, T, E, O> Await<F, C>
where
    F: Future<Output = Result<T, E>>,
    C: FnOnce(T) -> O,
{
    pub const fn new(props: AwaitProps<F, C>) -> Self {
        Self { props }
    }

    pub async fn render(self) -> Result<O, RenderError<E>> {
        let AwaitProps { resolve, children } = self.props;

        let result = resolve.await.map_err(RenderError::Computation)?;
        tracing::trace!("server computation resolved");

        Ok(children(result))
    }
}

impl<F, C, T, E, O> IntoFuture for Await<F, C>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    C: FnOnce(T) -> O + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
    O: Send + 'static,
{
    type Output = Result<O, RenderError<E>>;

    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.render())
    }
}
