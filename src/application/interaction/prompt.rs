use crate::ports::outbound::OperatorConsole;
use crate::shared::Result;

/// Asks `label` until `accept` maps an answer to a value.
///
/// There is no retry limit; the loop only ends early when the console fails,
/// e.g. because the operator closed the input stream.
pub fn prompt_until<C, T, F>(console: &C, label: &str, mut accept: F) -> Result<T>
where
    C: OperatorConsole + ?Sized,
    F: FnMut(&str) -> Option<T>,
{
    loop {
        let answer = console.prompt_line(label)?;
        if let Some(value) = accept(&answer) {
            return Ok(value);
        }
    }
}

/// Yes/no question where only `y` or `Y` counts as yes
pub fn confirm<C>(console: &C, label: &str) -> Result<bool>
where
    C: OperatorConsole + ?Sized,
{
    let answer = console.prompt_line(label)?;
    Ok(matches!(answer.trim(), "y" | "Y"))
}
