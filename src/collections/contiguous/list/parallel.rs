use tracing::trace;

use super::List;

impl<T: Sync> List<T> {
    /// Calls `f` with the index and a reference to each element, running one task per element on
    /// the `rayon` thread pool.
    ///
    /// Every element is visited exactly once, in no particular order and on no particular thread.
    /// This method blocks until all tasks have completed, so no work outlives the call. The List
    /// can't be modified while the tasks run, but nothing synchronizes what `f` itself does; any
    /// shared state it touches needs its own locking.
    ///
    /// # Panics
    /// If `f` panics, the panic is propagated once all other tasks have finished.
    ///
    /// # Examples
    /// ```
    /// # use container_kit::collections::contiguous::List;
    /// # use std::sync::atomic::{AtomicUsize, Ordering};
    /// let list = List::from([1, 2, 3, 4]);
    /// let sum = AtomicUsize::new(0);
    /// list.par_for_each(|_, &item| {
    ///     sum.fetch_add(item, Ordering::Relaxed);
    /// });
    /// assert_eq!(sum.into_inner(), 10);
    /// ```
    pub fn par_for_each<F>(&self, f: F)
    where
        F: Fn(usize, &T) + Sync,
    {
        trace!(tasks = self.len(), "spawning par_for_each tasks");

        let f = &f;
        rayon::scope(|scope| {
            for (index, item) in self.iter().enumerate() {
                scope.spawn(move |_| f(index, item));
            }
        });

        trace!(tasks = self.len(), "joined par_for_each tasks");
    }
}
