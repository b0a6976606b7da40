use crate::shared::Result;
use std::path::Path;

/// SourceReader port for reading the plain-text port description
///
/// This port abstracts the file system operations needed to load the
/// declaration lines the generator works on.
pub trait SourceReader {
    /// Reads the source description at `path`
    ///
    /// # Returns
    /// The content split into lines, without line terminators
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_lines(&self, path: &Path) -> Result<Vec<String>>;
}
