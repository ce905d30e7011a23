#![doc = include_str!("../README.md")]

pub mod boundary;
#[cfg(feature = "client")]
pub mod client;
pub mod map;
pub mod props;
#[cfg(feature = "server")]
pub mod server;
pub mod suspense;

pub use boundary::ErrorBoundary;
#[cfg(feature = "client")]
pub use client::ClientAwait;
pub use map::MapComponent;
pub use props::AwaitProps;
#[cfg(feature = "server")]
pub use server::Await;
pub use suspense::Suspense;
