use crate::shared::Result;

/// FileStore port for persisting the generated document
///
/// Names are relative to the store's root (e.g. the output directory).
pub trait FileStore {
    /// Whether an entry named `name` already exists
    fn exists(&self, name: &str) -> bool;

    /// Writes `content` to a new entry named `name`
    ///
    /// # Returns
    /// A displayable location of the written entry
    ///
    /// # Errors
    /// Returns an error if:
    /// - An entry with that name already exists
    /// - Writing fails (permissions, missing directory, disk space)
    fn write(&self, name: &str, content: &str) -> Result<String>;
}
