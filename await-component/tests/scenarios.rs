#![cfg(all(feature = "server", feature = "client"))]

use std::{
    cell::Cell,
    fmt,
    future::ready,
    rc::Rc,
    task::Poll,
    time::Duration,
};

use await_component::{
    render_blocking, Await, AwaitProps, ClientAwait, ClientRoot, ErrorBoundary,
    MapComponent, RenderError, RenderLoop, Suspense,
};
use futures::{channel::oneshot, StreamExt};

#[derive(Debug, Clone, PartialEq)]
struct Text(i32);

#[derive(Debug, Clone, PartialEq)]
struct NetworkError;

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("network error")
    }
}

#[test]
fn server_resolved_now() {
    let calls = Cell::new(0);

    let output = render_blocking(
        Await::new(AwaitProps::ready(Ok::<_, NetworkError>(42), |n: i32| {
            calls.set(calls.get() + 1);
            Text(n * 2)
        }))
        .render(),
    );

    assert_eq!(output, Ok(Text(84)));
    assert_eq!(calls.get(), 1);
}

#[test]
fn client_resolved_now() {
    let calls = Cell::new(0);
    let mut render_loop = RenderLoop::new(ClientAwait::new(AwaitProps::ready(
        Ok::<_, NetworkError>(42),
        |n: i32| {
            calls.set(calls.get() + 1);
            Text(n * 2)
        },
    )));

    assert_eq!(render_loop.render_pass(), Poll::Ready(Ok(Text(84))));
    assert_eq!(calls.get(), 1);
}

#[tokio::test]
async fn server_rejected() {
    let called = Rc::new(Cell::new(false));

    let output = Await::new(AwaitProps::new(ready(Err::<i32, _>(NetworkError)), {
        let called = called.clone();
        move |n: i32| {
            called.set(true);
            Text(n)
        }
    }))
    .render()
    .await;

    assert_eq!(output, Err(RenderError::Computation(NetworkError)));
    assert!(!called.get());
}

#[test]
fn client_rejected_reaches_boundary() {
    let called = Cell::new(false);
    let mut render_loop = RenderLoop::new(ErrorBoundary::new(
        ClientAwait::new(AwaitProps::new(ready(Err::<i32, _>(NetworkError)), |n: i32| {
            called.set(true);
            Text(n)
        })),
        |_: &RenderError<NetworkError>| Text(-1),
    ));

    assert_eq!(render_loop.render_pass(), Poll::Ready(Text(-1)));
    assert_eq!(
        render_loop.component().error(),
        Some(&RenderError::Computation(NetworkError))
    );
    assert!(!called.get());
}

#[test]
fn client_reentrant_render() {
    let calls = Cell::new(0);
    let (sender, recv) = oneshot::channel::<i32>();

    let mut render_loop = RenderLoop::new(ClientAwait::new(AwaitProps::new(recv, |n| {
        calls.set(calls.get() + 1);
        Text(n)
    })));

    assert!(render_loop.render_pass().is_pending());
    assert_eq!(calls.get(), 0);

    sender.send(7).unwrap();
    assert!(render_loop.is_invalidated());

    assert_eq!(render_loop.render_pass(), Poll::Ready(Ok(Text(7))));
    assert_eq!(calls.get(), 1);

    // Settled output is reused without calling children again
    assert_eq!(render_loop.render_pass(), Poll::Ready(Ok(Text(7))));
    assert_eq!(calls.get(), 1);
}

#[tokio::test]
async fn client_root_commits_after_settlement() {
    let (sender, recv) = oneshot::channel::<i32>();
    let commits = Rc::new(Cell::new(0));

    let root = ClientRoot::new(MapComponent::new(
        ClientAwait::new(AwaitProps::new(recv, |n| Text(n * 10))),
        |output: Result<Text, RenderError<oneshot::Canceled>>| output.ok(),
    ))
    .with_commit({
        let commits = commits.clone();
        move |_: &Option<Text>| commits.set(commits.get() + 1)
    });

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        sender.send(4).ok();
    });

    assert_eq!(root.run_until_ready().await, Some(Text(40)));
    assert_eq!(commits.get(), 1);
}

#[tokio::test]
async fn render_loop_stream_with_suspense() {
    let (sender, recv) = oneshot::channel::<i32>();

    let mut render_loop = RenderLoop::new(Suspense::new(
        ClientAwait::new(AwaitProps::new(recv, Text)),
        || Ok(Text(0)),
    ));

    assert_eq!(render_loop.next().await, Some(Ok(Text(0))));

    tokio::spawn(async move {
        sender.send(5).ok();
    });

    assert_eq!(render_loop.next().await, Some(Ok(Text(5))));
    assert!(render_loop.component().is_ready());
}
