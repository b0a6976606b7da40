use crate::shared::Result;

/// OperatorConsole port for the interactive dialogue with the operator
///
/// Calls block until the operator answers; there is no timeout.
pub trait OperatorConsole {
    /// Shows `label` and returns one line of operator input without its
    /// line terminator
    ///
    /// # Errors
    /// Returns `InputClosed` if the input stream ends before a line is read
    fn prompt_line(&self, label: &str) -> Result<String>;

    /// Shows informational text that needs no answer
    fn show(&self, text: &str);
}
