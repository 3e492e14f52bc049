/// ProgressReporter port for reporting progress during long-running operations
///
/// Building the dependency index visits every asset of the project, which
/// can take a while on large projects. This port lets the caller observe that
/// work (e.g., a progress bar on stderr) without influencing it.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress as `current` out of `total` steps
    ///
    /// # Arguments
    /// * `current` - Steps completed so far
    /// * `total` - Total expected steps
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
