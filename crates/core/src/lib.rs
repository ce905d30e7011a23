#![doc = include_str!("../README.md")]

pub mod context;
pub mod error;

pub use error::RenderError;

use context::RenderContext;

use std::{
    fmt::{self, Debug},
    future::Future,
    pin::Pin,
    task::Poll,
};

/// Core trait
///
/// A component produces its output from a render pass. Returning [`Poll::Pending`] means
/// the render attempt did not complete and the component registered the waker of
/// [`RenderContext`] with whatever it waits on.
pub trait Component {
    type Output;

    fn render(&mut self, cx: &RenderContext) -> Poll<Self::Output>;
}

impl<C: ?Sized + Component> Component for Box<C> {
    type Output = C::Output;

    fn render(&mut self, cx: &RenderContext) -> Poll<Self::Output> {
        (**self).render(cx)
    }
}

impl<C: ?Sized + Component> Component for &mut C {
    type Output = C::Output;

    fn render(&mut self, cx: &RenderContext) -> Poll<Self::Output> {
        (**self).render(cx)
    }
}

/// Read a pending computation from a render pass.
///
/// While the computation is pending, every [`Use::read`] polls it with the waker of the
/// given [`RenderContext`], so the component is rendered again once it settles.
/// The settled output is kept and returned by later reads without polling again.
/// [`Use::into_output`] consumes the cell to move it out.
pub struct Use<F: Future> {
    state: UseState<F>,
}

enum UseState<F: Future> {
    Pending(Pin<Box<F>>),
    Settled(F::Output),
}

impl<F: Future> Use<F> {
    /// Create new [`Use`]
    pub fn new(fut: F) -> Self {
        Self {
            state: UseState::Pending(Box::pin(fut)),
        }
    }

    pub fn read(&mut self, cx: &RenderContext) -> Poll<&F::Output> {
        if let UseState::Pending(ref mut fut) = self.state {
            match fut.as_mut().poll(&mut cx.task_context()) {
                Poll::Ready(output) => {
                    tracing::trace!("pending computation settled");
                    self.state = UseState::Settled(output);
                }

                Poll::Pending => return Poll::Pending,
            }
        }

        match self.state {
            UseState::Settled(ref output) => Poll::Ready(output),
            UseState::Pending(_) => Poll::Pending,
        }
    }

    pub const fn is_settled(&self) -> bool {
        matches!(self.state, UseState::Settled(_))
    }

    /// Take settled output. Returns [`None`] if the computation is still pending.
    pub fn into_output(self) -> Option<F::Output> {
        match self.state {
            UseState::Settled(output) => Some(output),
            UseState::Pending(_) => None,
        }
    }
}

impl<F: Future> From<F> for Use<F> {
    fn from(fut: F) -> Self {
        Self::new(fut)
    }
}

impl<F: Future> Debug for Use<F>
where
    F::Output: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            UseState::Pending(_) => f.debug_tuple("Use").field(&"<pending>").finish(),
            UseState::Settled(ref output) => f.debug_tuple("Use").field(output).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::Cell,
        future::{poll_fn, ready},
        task::Poll,
    };

    use futures::{channel::oneshot, task::noop_waker};

    use crate::{context::RenderContext, Use};

    #[test]
    fn read_ready_future() {
        let cx = RenderContext::new(noop_waker());
        let mut cell = Use::new(ready(7));

        assert_eq!(cell.read(&cx), Poll::Ready(&7));
        assert!(cell.is_settled());
        assert_eq!(cell.into_output(), Some(7));
    }

    #[test]
    fn read_pending_then_settled() {
        let cx = RenderContext::new(noop_waker());
        let (sender, recv) = oneshot::channel::<i32>();
        let mut cell = Use::new(recv);

        assert!(cell.read(&cx).is_pending());
        assert!(!cell.is_settled());

        sender.send(5).unwrap();

        assert_eq!(cell.read(&cx), Poll::Ready(&Ok(5)));
    }

    #[test]
    fn into_output_requires_settlement() {
        let cx = RenderContext::new(noop_waker());

        assert_eq!(Use::new(ready(String::from("value"))).into_output(), None);

        let mut cell = Use::new(ready(String::from("value")));
        assert!(cell.read(&cx).is_ready());
        assert_eq!(cell.into_output().as_deref(), Some("value"));
    }

    #[test]
    fn settled_output_is_not_polled_again() {
        let cx = RenderContext::new(noop_waker());
        let polls = Cell::new(0);
        let mut cell = Use::new(poll_fn(|_| {
            polls.set(polls.get() + 1);
            Poll::Ready("done")
        }));

        for _ in 0..3 {
            assert_eq!(cell.read(&cx), Poll::Ready(&"done"));
        }

        assert_eq!(polls.get(), 1);
    }
}
