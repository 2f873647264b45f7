//! Bounded concurrent map with per-item error isolation.

use std::future::Future;

use futures::stream::{self, StreamExt};

/// Runs `f` over `items` with at most `limit` futures in flight.
///
/// Every item yields its own `Result`; a failure never cancels or fails its
/// siblings. Output order matches input order.
pub async fn map_isolated<I, T, U, E, F, Fut>(items: I, limit: usize, f: F) -> Vec<Result<U, E>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Result<U, E>>,
{
    stream::iter(items)
        .map(f)
        .buffered(limit.max(1))
        .collect()
        .await
}
