/// Mock implementations for testing
mod in_memory_file_store;
mod in_memory_source_reader;
mod mock_progress_reporter;
mod scripted_console;

pub use in_memory_file_store::InMemoryFileStore;
pub use in_memory_source_reader::InMemorySourceReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use scripted_console::ScriptedConsole;
