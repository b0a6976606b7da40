/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, operator console, etc.).
pub mod file_store;
pub mod operator_console;
pub mod progress_reporter;
pub mod source_reader;

pub use file_store::FileStore;
pub use operator_console::OperatorConsole;
pub use progress_reporter::ProgressReporter;
pub use source_reader::SourceReader;
