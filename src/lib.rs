//! sv-ifgen - SystemVerilog interface generator
//!
//! This library turns a plain-text list of port declarations into a
//! SystemVerilog `interface` with a port list, internal items, master and
//! slave clocking blocks and synchronous/asynchronous modports, following
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`interface_generation`): Port model, parser, renderers and naming policy
//! - **Application Layer** (`application`): Use case and the interactive dialogue
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sv_ifgen::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let source_reader = FileSystemReader::new();
//! let console = StdinConsole::stdio();
//! let file_store = FileSystemStore::new(PathBuf::from("."));
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case =
//!     GenerateInterfaceUseCase::new(source_reader, console, file_store, progress_reporter);
//!
//! // Execute
//! let request = GenerationRequest::new(PathBuf::from("ports.txt"), InterfaceConfig::default(), false);
//! let response = use_case.execute(request)?;
//! println!("{}", response.output_location);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod interface_generation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{
        StderrProgressReporter, StdinConsole, TerminalConsole,
    };
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, FileSystemStore};
    pub use crate::application::dto::{GenerationRequest, GenerationResponse};
    pub use crate::application::use_cases::GenerateInterfaceUseCase;
    pub use crate::interface_generation::domain::{
        BlockNames, Direction, DirectionToken, InterfaceConfig, ModifierConfig, Port, Skew, Skews,
    };
    pub use crate::interface_generation::policies::OutputNaming;
    pub use crate::interface_generation::services::{
        DeclarationParser, InterfaceAssembler, TemplateComposer,
    };
    pub use crate::ports::outbound::{FileStore, OperatorConsole, ProgressReporter, SourceReader};
    pub use crate::shared::error::GeneratorError;
    pub use crate::shared::Result;
}
