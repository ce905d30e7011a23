use std::{fmt::Display, task::Poll};

use await_component_core::{context::RenderContext, Component};

/// Catches a failed render of the child and renders `handler` output instead.
///
/// The caught error is kept and can be inspected with [`ErrorBoundary::error`].
/// It is logged once when caught; a successful pass clears it.
#[derive(Debug)]
pub struct ErrorBoundary<C, H, E> {
    component: C,
    handler: H,
    error: Option<E>,
}

impl<C, H, O, E> ErrorBoundary<C, H, E>
where
    C: Component<Output = Result<O, E>>,
    H: FnMut(&E) -> O,
{
    pub const fn new(component: C, handler: H) -> Self {
        Self {
            component,
            handler,
            error: None,
        }
    }

    /// Last error caught by this boundary
    pub const fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }

    pub const fn get(&self) -> &C {
        &self.component
    }

    pub fn get_mut(&mut self) -> &mut C {
        &mut self.component
    }
}

impl<C, H, O, E> Component for ErrorBoundary<C, H, E>
where
    C: Component<Output = Result<O, E>>,
    H: FnMut(&E) -> O,
    E: Display,
{
    type Output = O;

    fn render(&mut self, cx: &RenderContext) -> Poll<O> {
        match self.component.render(cx) {
            Poll::Ready(Ok(output)) => {
                self.error = None;

                Poll::Ready(output)
            }

            Poll::Ready(Err(err)) => {
                if self.error.is_none() {
                    tracing::warn!("render failed: {err}");
                }

                let output = (self.handler)(&err);
                self.error = Some(err);

                Poll::Ready(output)
            }

            Poll::Pending => Poll::Pending,
        }
    }
}
