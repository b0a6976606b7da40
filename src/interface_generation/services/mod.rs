pub mod declaration_parser;
pub mod interface_assembler;
pub mod template_composer;

pub use declaration_parser::{DeclarationParser, ParsedSource, COMMENT_MARKER};
pub use interface_assembler::InterfaceAssembler;
pub use template_composer::TemplateComposer;
