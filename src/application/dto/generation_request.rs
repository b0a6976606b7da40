use crate::interface_generation::domain::InterfaceConfig;
use std::path::PathBuf;

/// GenerationRequest - Internal request DTO for the interface generation use case
///
/// `base_config` carries the defaults merged with the optional config file.
/// Its `interface_name` is ignored; the name is always asked interactively.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Path to the plain-text port description
    pub source_path: PathBuf,
    /// Settings the operator's answers start from
    pub base_config: InterfaceConfig,
    /// Skip the "use default block names / skews" questions and keep
    /// `base_config` as is
    pub accept_defaults: bool,
}

impl GenerationRequest {
    pub fn new(source_path: PathBuf, base_config: InterfaceConfig, accept_defaults: bool) -> Self {
        Self {
            source_path,
            base_config,
            accept_defaults,
        }
    }
}
