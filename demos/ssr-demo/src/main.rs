use std::{fmt, time::Duration};

use await_component::{Await, AwaitProps, ClientAwait, ClientRoot, ErrorBoundary, RenderError};
use futures::channel::oneshot;
use tokio::time::sleep;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct Profile {
    name: String,
    posts: u32,
}

#[derive(Debug, Clone)]
enum FetchError {
    NotFound(u32),
    Dropped,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "profile {id} not found"),
            Self::Dropped => f.write_str("request dropped"),
        }
    }
}

async fn fetch_profile(id: u32) -> Result<Profile, FetchError> {
    sleep(Duration::from_millis(200)).await;

    match id {
        1 => Ok(Profile {
            name: "storycraft".to_string(),
            posts: 12,
        }),
        _ => Err(FetchError::NotFound(id)),
    }
}

fn profile_card(profile: Profile) -> String {
    format!("<div class=\"card\">{} ({} posts)</div>", profile.name, profile.posts)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Server: the render call suspends until the profile is fetched
    for id in [1, 2] {
        match Await::new(AwaitProps::new(fetch_profile(id), profile_card))
            .render()
            .await
        {
            Ok(html) => info!("server rendered {html}"),
            Err(err) => info!("server render failed: {err}"),
        }
    }

    // Client: the root re-renders once the request settles
    let (sender, recv) = oneshot::channel();
    tokio::spawn(async move {
        sender.send(fetch_profile(1).await).ok();
    });

    let resolve = async move { recv.await.unwrap_or(Err(FetchError::Dropped)) };

    let mut root = ClientRoot::new(ErrorBoundary::new(
        ClientAwait::new(AwaitProps::new(resolve, profile_card)),
        |err: &RenderError<FetchError>| format!("<div class=\"error\">{err}</div>"),
    ))
    .with_commit(|html: &String| info!("client committed {html}"));

    if root.tick().is_pending() {
        info!("client waiting for profile");
    }

    let html = root.run_until_ready().await;
    println!("{html}");
}
