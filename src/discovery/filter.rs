use std::future::Future;

use futures::future::try_join_all;

use crate::errors::HermesResult;

/// Run `predicate` over every item concurrently and keep the items it accepts.
///
/// All checks are in flight at once and the result keeps input order, not
/// completion order. The first predicate error aborts the whole filter: the
/// remaining checks are dropped and the error is returned.
pub async fn filter_async<'a, T, F, Fut>(predicate: F, items: &'a [T]) -> HermesResult<Vec<T>>
where
    T: Clone,
    F: Fn(&'a T) -> Fut,
    Fut: Future<Output = HermesResult<bool>>,
{
    let verdicts = try_join_all(items.iter().map(predicate)).await?;

    Ok(items
        .iter()
        .zip(verdicts)
        .filter_map(|(item, keep)| keep.then(|| item.clone()))
        .collect())
}
