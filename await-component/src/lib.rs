#![doc = include_str!("../../readme.md")]

pub use await_component_core::{
    context::{RenderContext, RenderLoop},
    Component, RenderError, Use,
};

#[cfg(feature = "client")]
pub use await_component_components::ClientAwait;
#[cfg(feature = "server")]
pub use await_component_components::Await;
pub use await_component_components::{AwaitProps, ErrorBoundary, MapComponent, Suspense};

pub use await_component_runtime::{render_blocking, ClientRoot};
