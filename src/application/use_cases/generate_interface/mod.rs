use crate::application::dto::{GenerationRequest, GenerationResponse};
use crate::application::interaction::{ConfigurationPrompter, DirectionResolver};
use crate::interface_generation::domain::{InterfaceConfig, Port};
use crate::interface_generation::policies::OutputNaming;
use crate::interface_generation::services::{
    DeclarationParser, InterfaceAssembler, TemplateComposer,
};
use crate::ports::outbound::{FileStore, OperatorConsole, ProgressReporter, SourceReader};
use crate::shared::error::GeneratorError;
use crate::shared::Result;

const SIGNALS_HEADER: &str = "\n\n================ SIGNALS =================";

/// GenerateInterfaceUseCase - Core use case for interface generation
///
/// This use case orchestrates the whole run, from reading the port
/// description to writing the generated document, using generic dependency
/// injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `SR` - SourceReader implementation
/// * `OC` - OperatorConsole implementation
/// * `FS` - FileStore implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateInterfaceUseCase<SR, OC, FS, PR> {
    source_reader: SR,
    console: OC,
    file_store: FS,
    progress_reporter: PR,
}

impl<SR, OC, FS, PR> GenerateInterfaceUseCase<SR, OC, FS, PR>
where
    SR: SourceReader,
    OC: OperatorConsole,
    FS: FileStore,
    PR: ProgressReporter,
{
    /// Creates a new GenerateInterfaceUseCase with injected dependencies
    pub fn new(source_reader: SR, console: OC, file_store: FS, progress_reporter: PR) -> Self {
        Self {
            source_reader,
            console,
            file_store,
            progress_reporter,
        }
    }

    /// Executes the interface generation use case
    ///
    /// # Arguments
    /// * `request` - Source path, base configuration and dialogue options
    ///
    /// # Returns
    /// GenerationResponse with the written location and the generated text
    ///
    /// # Errors
    /// Nothing is written when any step fails. Parse errors surface before
    /// the first prompt.
    pub fn execute(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        // Step 1: Reject a broken config before touching the source
        request.base_config.validate_settings()?;

        // Step 2: Read and parse the source description
        let ports = self.read_and_parse(&request)?;
        let port_count = ports.len();

        // Step 3: Ask for every missing direction
        let ports = DirectionResolver::new(&self.console).resolve_directions(ports)?;
        self.show_signals(&ports)?;

        // Step 4: Clock and naming
        let clock_index = DirectionResolver::new(&self.console).select_clock(&ports)?;
        let config = self.complete_config(&request)?;

        // Step 5: Assemble
        self.progress_reporter.report(&format!(
            "🔧 Generating interface '{}' ({} port(s), clock '{}')",
            config.interface_name,
            port_count,
            ports[clock_index].identifier()
        ));
        let document = InterfaceAssembler::new(&config).assemble(&ports, clock_index)?;

        // Step 6: Write under a free name
        let output_location = self.write_document(&config.interface_name, &document)?;
        self.progress_reporter
            .report_completion(&format!("✅ Output written to {}", output_location));

        Ok(GenerationResponse::new(
            output_location,
            document,
            port_count,
            ports[clock_index].identifier().to_string(),
            config,
        ))
    }

    fn read_and_parse(&self, request: &GenerationRequest) -> Result<Vec<Port>> {
        self.progress_reporter.report(&format!(
            "📖 Loading source description from: {}",
            request.source_path.display()
        ));

        let lines = self.source_reader.read_lines(&request.source_path)?;
        let parsed = DeclarationParser::parse_lines(&lines)?;
        for warning in &parsed.warnings {
            self.progress_reporter
                .report_warning(&format!("⚠️  Warning: {}", warning));
        }

        if parsed.ports.is_empty() {
            return Err(GeneratorError::EmptySource {
                path: request.source_path.clone(),
            }
            .into());
        }

        self.progress_reporter
            .report(&format!("✅ Parsed {} port(s)", parsed.ports.len()));
        Ok(parsed.ports)
    }

    /// Lists every port as a port-list entry without direction suffixes
    fn show_signals(&self, ports: &[Port]) -> Result<()> {
        let modifiers = &InterfaceConfig::default().modifiers;
        let mut preview = String::from(SIGNALS_HEADER);
        for port in ports {
            preview.push('\n');
            preview.push_str(&TemplateComposer::port_declaration(port, modifiers, false)?);
        }
        self.console.show(&preview);
        Ok(())
    }

    fn complete_config(&self, request: &GenerationRequest) -> Result<InterfaceConfig> {
        let prompter = ConfigurationPrompter::new(&self.console);
        let base = &request.base_config;

        let interface_name = prompter.prompt_interface_name()?;
        let blocks = prompter.prompt_block_names(base.blocks.clone(), request.accept_defaults)?;
        let skews = prompter.prompt_skews(base.skews.clone(), request.accept_defaults)?;

        Ok(InterfaceConfig {
            interface_name,
            modifiers: base.modifiers.clone(),
            blocks,
            skews,
        })
    }

    fn write_document(&self, interface_name: &str, document: &str) -> Result<String> {
        let name = OutputNaming::free_name(interface_name, |candidate| {
            self.file_store.exists(candidate)
        });
        self.file_store.write(&name, document)
    }
}
