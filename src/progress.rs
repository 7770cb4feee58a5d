// src/progress.rs
/// Lightweight progress reporting used by long-running operations (load/export).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One page of records arrived; `total` is the running record count.
    fn page_done(&mut self, _page: usize, _total: usize) {}

    /// Something the user should know about that does not stop the operation.
    fn warn(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
