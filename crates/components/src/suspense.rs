use std::task::Poll;

use await_component_core::{context::RenderContext, Component};

/// Renders `fallback` while the child component is pending.
///
/// The pass always completes. The child stays registered with the render loop, so
/// it replaces the fallback on the pass after it settles.
#[derive(Debug)]
pub struct Suspense<C, Fb> {
    component: C,
    fallback: Fb,
    ready: bool,
}

impl<C: Component, Fb: FnMut() -> C::Output> Suspense<C, Fb> {
    pub const fn new(component: C, fallback: Fb) -> Self {
        Self {
            component,
            fallback,
            ready: false,
        }
    }

    /// Returns true if the last pass rendered the child
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    pub const fn get(&self) -> &C {
        &self.component
    }

    pub fn get_mut(&mut self) -> &mut C {
        &mut self.component
    }
}

impl<C: Component, Fb: FnMut() -> C::Output> Component for Suspense<C, Fb> {
    type Output = C::Output;

    fn render(&mut self, cx: &RenderContext) -> Poll<Self::Output> {
        match self.component.render(cx) {
            Poll::Ready(output) => {
                self.ready = true;

                Poll::Ready(output)
            }

            Poll::Pending => {
                self.ready = false;

                Poll::Ready((self.fallback)())
            }
        }
    }
}
