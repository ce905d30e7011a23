use std::{
    pin::Pin,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    task::{Context, Poll, Wake, Waker},
};

use atomic_waker::AtomicWaker;
use futures_core::Stream;

use crate::Component;

/// Re-renders a component each time one of its dependencies wakes it.
#[derive(Debug)]
pub struct RenderLoop<C> {
    inner: Arc<Inner>,
    cx: RenderContext,
    component: C,
}

impl<C: Component> RenderLoop<C> {
    /// Create new [`RenderLoop`]. The first render pass is always scheduled.
    pub fn new(component: C) -> Self {
        let inner = Arc::new(Inner::default());
        let cx = RenderContext::new(Waker::from(inner.clone()));

        Self {
            inner,
            cx,
            component,
        }
    }

    /// Run one render pass regardless of invalidation.
    pub fn render_pass(&mut self) -> Poll<C::Output> {
        self.inner.invalidated.store(false, Ordering::Relaxed);

        let poll = self.component.render(&self.cx);
        tracing::trace!(ready = poll.is_ready(), "render pass");

        poll
    }

    /// Returns true if a dependency woke the component since the last render pass
    pub fn is_invalidated(&self) -> bool {
        self.inner.invalidated.load(Ordering::Relaxed)
    }

    pub fn context(&self) -> &RenderContext {
        &self.cx
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    pub fn into_inner(self) -> C {
        self.component
    }
}

impl<C: Component> Stream for RenderLoop<C> {
    type Item = C::Output;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context) -> Poll<Option<C::Output>> {
        self.inner.waker.register(cx.waker());

        if !self.is_invalidated() {
            return Poll::Pending;
        }

        if let Poll::Ready(output) = self.render_pass() {
            return Poll::Ready(Some(output));
        }

        // Woken during the pass. Render again on the next poll.
        if self.is_invalidated() {
            cx.waker().wake_by_ref();
        }

        Poll::Pending
    }
}

impl<C> Unpin for RenderLoop<C> {}

/// Handle given to each render pass.
#[derive(Debug, Clone)]
pub struct RenderContext(Waker);

impl RenderContext {
    pub const fn new(waker: Waker) -> Self {
        RenderContext(waker)
    }

    /// Request another render pass
    pub fn signal(&self) {
        self.0.wake_by_ref();
    }

    pub fn waker(&self) -> &Waker {
        &self.0
    }

    /// Returns [`Context`] which can be used for polling future
    pub fn task_context(&self) -> Context<'_> {
        Context::from_waker(&self.0)
    }
}

#[derive(Debug)]
struct Inner {
    invalidated: AtomicBool,
    waker: AtomicWaker,
}

impl Wake for Inner {
    fn wake(self: Arc<Self>) {
        self.wake_by_ref()
    }

    fn wake_by_ref(self: &Arc<Self>) {
        self.invalidated.store(true, Ordering::Relaxed);
        self.waker.wake()
    }
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            invalidated: AtomicBool::new(true),
            waker: Default::default(),
        }
    }
}
