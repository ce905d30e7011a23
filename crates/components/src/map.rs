use std::task::Poll;

use await_component_core::{context::RenderContext, Component};

/// Maps ready output of the child component.
#[derive(Debug)]
pub struct MapComponent<C, M> {
    component: C,
    map: M,
}

impl<C: Component, M: FnMut(C::Output) -> O, O> MapComponent<C, M> {
    pub const fn new(component: C, map: M) -> Self {
        Self { component, map }
    }

    pub fn into_inner(self) -> C {
        self.component
    }
}

impl<C: Component, M: FnMut(C::Output) -> O, O> Component for MapComponent<C, M> {
    type Output = O;

    fn render(&mut self, cx: &RenderContext) -> Poll<O> {
        self.component.render(cx).map(&mut self.map)
    }
}
