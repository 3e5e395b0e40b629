// src/progress.rs
/// Lightweight progress reporting for single-pass stages.
/// The CLI implements this to print periodic row counts.
pub trait Progress {
    /// Called at the start with the number of data rows.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after each data row; `processed` counts from 1.
    fn row_done(&mut self, _processed: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
