//! Progress notification seam for long-running operations.
//!
//! The engine reports one event per unit of work and leaves rendering
//! (progress bars, log lines) to the caller.

use std::marker::PhantomData;

/// Receives progress events of type `T`.
pub trait ProgressCallback<T> {
    fn on_progress(&self, progress: &T);
}

/// A callback that ignores every event.
pub struct NoProgress;

impl<T> ProgressCallback<T> for NoProgress {
    fn on_progress(&self, _progress: &T) {}
}

/// A progress callback that wraps a closure.
pub struct FnProgress<F, T> {
    callback: F,
    _marker: PhantomData<T>,
}

impl<F, T> ProgressCallback<T> for FnProgress<F, T>
where
    F: Fn(&T),
{
    fn on_progress(&self, progress: &T) {
        (self.callback)(progress)
    }
}

/// Create a progress callback from a closure.
pub fn progress_fn<F, T>(f: F) -> FnProgress<F, T>
where
    F: Fn(&T),
{
    FnProgress {
        callback: f,
        _marker: PhantomData,
    }
}
