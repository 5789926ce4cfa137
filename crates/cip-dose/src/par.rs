//! Order-preserving row mapping, parallel or sequential.

use rayon::prelude::*;

/// Maps every item, keeping input order in the output.
pub(crate) fn map_rows<T, U, F>(items: &[T], parallel: bool, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    if parallel {
        items.par_iter().map(f).collect()
    } else {
        items.iter().map(f).collect()
    }
}
