/// Console adapters for operator interaction and progress output
mod progress_reporter;
mod terminal_console;

pub use progress_reporter::StderrProgressReporter;
pub use terminal_console::{StdinConsole, TerminalConsole};
