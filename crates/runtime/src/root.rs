//! Interactive client re-render loop

use std::{
    fmt::{self, Debug},
    future::poll_fn,
    sync::Arc,
    task::{Poll, Waker},
};

use await_component_core::{context::RenderContext, Component};

use crate::signal::RootSignal;

/// Root of an interactive component tree.
///
/// A render pass runs only when the root was woken since the previous one. Each
/// completed pass is committed: the commit hook receives its output.
pub struct ClientRoot<C: Component> {
    signal: Arc<RootSignal>,
    cx: RenderContext,

    component: C,

    commit: Option<Box<dyn FnMut(&C::Output)>>,
    commits: usize,
}

impl<C: Component> ClientRoot<C> {
    /// Create new [`ClientRoot`]. The first pass is scheduled.
    pub fn new(component: C) -> Self {
        let signal = Arc::new(RootSignal::new());
        let cx = RenderContext::new(Waker::from(signal.clone()));

        Self {
            signal,
            cx,
            component,
            commit: None,
            commits: 0,
        }
    }

    /// Set hook called with each committed output
    pub fn with_commit(mut self, commit: impl FnMut(&C::Output) + 'static) -> Self {
        self.commit = Some(Box::new(commit));
        self
    }

    /// Run a render pass if one is scheduled.
    pub fn tick(&mut self) -> Poll<C::Output> {
        if !self.signal.take_scheduled() {
            return Poll::Pending;
        }

        match self.component.render(&self.cx) {
            Poll::Ready(output) => {
                self.commits += 1;
                tracing::debug!(commits = self.commits, "root committed");

                if let Some(ref mut commit) = self.commit {
                    commit(&output);
                }

                Poll::Ready(output)
            }

            Poll::Pending => {
                tracing::trace!("root suspended");

                Poll::Pending
            }
        }
    }

    /// Re-render on every wake until a pass completes.
    pub async fn run_until_ready(mut self) -> C::Output {
        poll_fn(|cx| {
            self.signal.register(cx.waker());

            if let Poll::Ready(output) = self.tick() {
                return Poll::Ready(output);
            }

            // Woken during the pass. Render again on the next poll.
            if self.signal.is_scheduled() {
                cx.waker().wake_by_ref();
            }

            Poll::Pending
        })
        .await
    }

    /// Returns true if a render pass is scheduled
    pub fn is_scheduled(&self) -> bool {
        self.signal.is_scheduled()
    }

    /// Number of committed outputs
    pub const fn commits(&self) -> usize {
        self.commits
    }

    pub fn context(&self) -> &RenderContext {
        &self.cx
    }

    pub const fn component(&self) -> &C {
        &self.component
    }

    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }
}

impl<C: Component + Debug> Debug for ClientRoot<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientRoot")
            .field("signal", &self.signal)
            .field("component", &self.component)
            .field("commits", &self.commits)
            .finish_non_exhaustive()
    }
}
