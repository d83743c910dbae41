use futures::future::{self, Either, TryFutureExt};

use std::future::Future;

/// Resolves a batch of references concurrently, keeping results in input
/// order. Fails fast: the first lookup error becomes the batch error and no
/// partial batch is returned.
pub async fn hydrate_ordered<I, T, E, F, Fut>(ids: I, lookup: F) -> Result<Vec<T>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    future::try_join_all(ids.into_iter().map(lookup)).await
}

/// Sparse variant for rows that may omit the reference. A `None` slot stays
/// `None` in the output without touching the lookup.
pub async fn hydrate_optional<Id, T, E, F, Fut>(
    ids: impl IntoIterator<Item = Option<Id>>,
    mut lookup: F,
) -> Result<Vec<Option<T>>, E>
where
    F: FnMut(Id) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    future::try_join_all(ids.into_iter().map(|id| match id {
        Some(id) => Either::Left(lookup(id).map_ok(Some)),
        None => Either::Right(future::ready(Ok(None))),
    }))
    .await
}
