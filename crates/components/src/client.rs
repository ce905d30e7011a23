//! Client variant, reading the computation through [`Use`]

use std::{future::Future, task::Poll};

use await_component_core::{context::RenderContext, Component, RenderError, Use};

use crate::AwaitProps;

/// Renders `children` with the resolved value of `resolve`, under a re-render loop.
///
/// Render passes before settlement return [`Poll::Pending`] and leave the component
/// registered for another pass. The first settled pass calls `children` and keeps its
/// output, so later passes return the same output without calling `children` again.
/// A failed computation is returned as [`RenderError::Computation`] on every pass.
pub struct ClientAwait<F: Future, C, O> {
    resolve: Option<Use<F>>,
    children: Option<C>,
    output: Option<O>,
}

impl<F, C, T, E, O> ClientAwait<F, C, O>
where
    F: Future<Output = Result<T, E>>,
    C: FnOnce(T) -> O,
{
    pub fn new(props: AwaitProps<F, C>) -> Self {
        Self {
            resolve: Some(Use::new(props.resolve)),
            children: Some(props.children),
            output: None,
        }
    }

    /// Returns true if the computation has settled
    pub fn is_settled(&self) -> bool {
        self.resolve.as_ref().map_or(true, Use::is_settled)
    }

    /// Output of the settled render, if any
    pub const fn output(&self) -> Option<&O> {
        self.output.as_ref()
    }
}

impl<F, C, T, E, O> Component for ClientAwait<F, C, O>
where
    F: Future<Output = Result<T, E>>,
    C: FnOnce(T) -> O,
    E: Clone,
    O: Clone,
{
    type Output = Result<O, RenderError<E>>;

    fn render(&mut self, cx: &RenderContext) -> Poll<Self::Output> {
        if let Some(ref output) = self.output {
            return Poll::Ready(Ok(output.clone()));
        }

        let Some(ref mut resolve) = self.resolve else {
            return Poll::Pending;
        };

        match resolve.read(cx) {
            Poll::Pending => return Poll::Pending,
            Poll::Ready(Err(err)) => {
                return Poll::Ready(Err(RenderError::Computation(err.clone())))
            }
            Poll::Ready(Ok(_)) => {}
        }

        // The cell is consumed once the value reaches `children`
        let (Some(Ok(value)), Some(children)) = (
            self.resolve.take().and_then(Use::into_output),
            self.children.take(),
        ) else {
            return Poll::Pending;
        };

        tracing::trace!("client computation resolved");
        let output = children(value);
        self.output = Some(output.clone());

        Poll::Ready(Ok(output))
    }
}
