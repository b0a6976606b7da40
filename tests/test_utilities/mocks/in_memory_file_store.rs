use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use sv_ifgen::prelude::*;

/// Mock FileStore keeping written documents in memory
#[derive(Default, Clone)]
pub struct InMemoryFileStore {
    files: Arc<Mutex<BTreeMap<String, String>>>,
}

impl InMemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `names` as already present
    #[allow(dead_code)]
    pub fn with_existing(names: &[&str]) -> Self {
        let store = Self::default();
        {
            let mut files = store.files.lock().unwrap();
            for name in names {
                files.insert(name.to_string(), String::new());
            }
        }
        store
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.files.lock().unwrap().get(name).cloned()
    }

    pub fn names(&self) -> Vec<String> {
        self.files.lock().unwrap().keys().cloned().collect()
    }
}

impl FileStore for InMemoryFileStore {
    fn exists(&self, name: &str) -> bool {
        self.files.lock().unwrap().contains_key(name)
    }

    fn write(&self, name: &str, content: &str) -> Result<String> {
        let mut files = self.files.lock().unwrap();
        if files.contains_key(name) {
            anyhow::bail!("{} already exists", name);
        }
        files.insert(name.to_string(), content.to_string());
        Ok(name.to_string())
    }
}
