/// Interactive steps of a generation run
mod configuration_prompter;
mod direction_resolver;
mod prompt;

pub use configuration_prompter::{
    ConfigurationPrompter, DEFAULT_BLOCKS_PROMPT, DEFAULT_SKEWS_PROMPT, INTERFACE_NAME_PROMPT,
};
pub use direction_resolver::{DirectionResolver, CLOCK_PROMPT};
pub use prompt::{confirm, prompt_until};
