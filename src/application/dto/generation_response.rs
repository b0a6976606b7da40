use crate::interface_generation::domain::InterfaceConfig;

/// GenerationResponse - Result of a completed generation run
#[derive(Debug, Clone)]
pub struct GenerationResponse {
    /// Where the document was written, as reported by the file store
    pub output_location: String,
    /// The generated interface text
    pub document: String,
    /// Number of ports read from the source
    pub port_count: usize,
    /// Identifier of the port chosen as clock
    pub clock_identifier: String,
    /// Final configuration used for assembly
    pub config: InterfaceConfig,
}

impl GenerationResponse {
    pub fn new(
        output_location: String,
        document: String,
        port_count: usize,
        clock_identifier: String,
        config: InterfaceConfig,
    ) -> Self {
        Self {
            output_location,
            document,
            port_count,
            clock_identifier,
            config,
        }
    }
}
