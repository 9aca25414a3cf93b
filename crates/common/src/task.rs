use std::future::Future;

use tokio_util::sync::CancellationToken;

/// Run `f` until it finishes or `token` is cancelled, whichever comes first
pub async fn spawn_with_token<R>(token: CancellationToken, f: impl Future<Output = R>) {
    tokio::select! {
        _ = token.cancelled() => {},
        _ = f => {},
    }
}
