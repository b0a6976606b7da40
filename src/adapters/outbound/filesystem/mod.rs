/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_store;

pub use file_reader::FileSystemReader;
pub use file_store::FileSystemStore;
