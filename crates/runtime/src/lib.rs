#![doc = include_str!("../README.md")]

pub mod root;
pub mod signal;

use std::future::Future;

pub use root::ClientRoot;

/// Run a suspending render on the current thread, blocking until it completes.
pub fn render_blocking<F: Future>(render: F) -> F::Output {
    let _span = tracing::trace_span!("render_blocking").entered();

    futures::executor::block_on(render)
}
