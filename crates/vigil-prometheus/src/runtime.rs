use std::future::Future;

use tokio::runtime::Handle;

/// Wait for an async health-check execution from a synchronous scrape.
///
/// `prometheus` collectors are invoked synchronously by
/// [`Registry::gather`](prometheus::Registry::gather), while the health
/// source is async. When the scrape runs on a runtime worker thread the
/// wait must go through `block_in_place` so the worker can be handed off;
/// from a non-runtime thread a plain `block_on` on the stored handle
/// suffices.
///
/// The handle must belong to a multi-thread runtime when scrapes are served
/// from runtime workers.
pub(crate) fn block_on_scrape<F: Future>(handle: &Handle, fut: F) -> F::Output {
    match Handle::try_current() {
        Ok(_) => tokio::task::block_in_place(|| handle.block_on(fut)),
        Err(_) => handle.block_on(fut),
    }
}
