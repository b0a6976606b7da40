/// ProgressReporter port for reporting progress during a run
///
/// This port abstracts status output (e.g., to stderr) so it does not mix
/// with the interactive dialogue on stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Reports a warning that does not stop the run
    ///
    /// # Arguments
    /// * `message` - The warning message
    fn report_warning(&self, message: &str);

    /// Reports completion of an operation
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn report_completion(&self, message: &str);
}
