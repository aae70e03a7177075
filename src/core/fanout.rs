//! Bounded concurrent fan-out with results returned in input order.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::debug;

use crate::Result;

/// Requests allowed in flight when the caller does not say otherwise.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Run `fetch` for every item with at most `limit` calls in flight.
///
/// The returned vector is index-aligned with `items`, whatever order the
/// calls complete in. The first error aborts all outstanding calls.
pub async fn fetch_ordered<I, T, F, Fut>(items: Vec<I>, limit: usize, fetch: F) -> Result<Vec<T>>
where
    I: Send + 'static,
    T: Send + 'static,
    F: Fn(I) -> Fut,
    Fut: Future<Output = Result<T>> + Send + 'static,
{
    let total = items.len();
    let permits = Arc::new(Semaphore::new(limit.max(1)));
    let mut tasks = JoinSet::new();

    for (idx, item) in items.into_iter().enumerate() {
        let permits = Arc::clone(&permits);
        let fut = fetch(item);
        tasks.spawn(async move {
            // Semaphore is never closed; the permit lives until the fetch ends.
            let _permit = permits.acquire_owned().await;
            (idx, fut.await)
        });
    }

    let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None).take(total).collect();
    while let Some(joined) = tasks.join_next().await {
        let (idx, result) = joined?;
        slots[idx] = Some(result?);
    }
    debug!(total, "fan-out complete");

    Ok(slots.into_iter().flatten().collect())
}
