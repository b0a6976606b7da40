use super::prompt::{confirm, prompt_until};
use crate::interface_generation::domain::{is_valid_identifier, BlockNames, Skew, Skews};
use crate::ports::outbound::OperatorConsole;
use crate::shared::Result;

pub const INTERFACE_NAME_PROMPT: &str = "\nInterface name: ";
pub const DEFAULT_BLOCKS_PROMPT: &str = "Use default block names? (y/_): ";
pub const DEFAULT_SKEWS_PROMPT: &str = "Use default skews? (y/_): ";

/// ConfigurationPrompter - asks the operator for naming and skew settings
pub struct ConfigurationPrompter<'a, C: ?Sized> {
    console: &'a C,
}

impl<'a, C> ConfigurationPrompter<'a, C>
where
    C: OperatorConsole + ?Sized,
{
    pub fn new(console: &'a C) -> Self {
        Self { console }
    }

    /// Asks for the interface name until it is a legal identifier
    pub fn prompt_interface_name(&self) -> Result<String> {
        prompt_until(self.console, INTERFACE_NAME_PROMPT, |answer| {
            let name = answer.trim();
            if is_valid_identifier(name) {
                Some(name.to_string())
            } else {
                if !name.is_empty() {
                    self.console.show(&format!(
                        "'{}' is not a valid identifier (letters, digits, _ and $, not starting with a digit)",
                        name
                    ));
                }
                None
            }
        })
    }

    /// Block names, either `defaults` or the operator's answers.
    ///
    /// An empty modport name skips the block, and its clocking block name is
    /// not asked for.
    pub fn prompt_block_names(&self, defaults: BlockNames, accept_defaults: bool) -> Result<BlockNames> {
        if accept_defaults || confirm(self.console, DEFAULT_BLOCKS_PROMPT)? {
            return Ok(defaults);
        }

        let mut blocks = defaults;
        blocks.sync_master = self.prompt_optional_name(
            "Name of synchronous master modport (empty to skip): ",
        )?;
        if !blocks.sync_master.is_empty() {
            blocks.master_clocking = self.prompt_required_name("Name of master clocking block: ")?;
        }
        blocks.sync_slave = self.prompt_optional_name(
            "Name of synchronous slave modport (empty to skip): ",
        )?;
        if !blocks.sync_slave.is_empty() {
            blocks.slave_clocking = self.prompt_required_name("Name of slave clocking block: ")?;
        }
        blocks.async_master = self.prompt_optional_name(
            "Enter name of asynchronous master modport (empty to skip):\n",
        )?;
        blocks.async_slave = self.prompt_optional_name(
            "Enter name of asynchronous slave modport (empty to skip):\n",
        )?;
        Ok(blocks)
    }

    /// Skews, either `defaults` or the operator's answers
    pub fn prompt_skews(&self, defaults: Skews, accept_defaults: bool) -> Result<Skews> {
        if accept_defaults || confirm(self.console, DEFAULT_SKEWS_PROMPT)? {
            return Ok(defaults);
        }

        Ok(Skews {
            master: Skew {
                input: self.prompt_required("Master block input skew: ")?,
                output: self.prompt_required("Master block output skew: ")?,
            },
            slave: Skew {
                input: self.prompt_required("Slave block input skew: ")?,
                output: self.prompt_required("Slave block output skew: ")?,
            },
        })
    }

    /// Empty answer or a legal identifier
    fn prompt_optional_name(&self, label: &str) -> Result<String> {
        prompt_until(self.console, label, |answer| {
            let name = answer.trim();
            (name.is_empty() || is_valid_identifier(name)).then(|| name.to_string())
        })
    }

    fn prompt_required_name(&self, label: &str) -> Result<String> {
        prompt_until(self.console, label, |answer| {
            let name = answer.trim();
            is_valid_identifier(name).then(|| name.to_string())
        })
    }

    fn prompt_required(&self, label: &str) -> Result<String> {
        prompt_until(self.console, label, |answer| {
            let value = answer.trim();
            (!value.is_empty()).then(|| value.to_string())
        })
    }
}
