use super::Direction;
use crate::shared::error::GeneratorError;
use crate::shared::Result;

/// Default suffix appended to master-side input identifiers
pub const DEFAULT_INPUT_MODIFIER: &str = "_i";
/// Default suffix appended to master-side output identifiers
pub const DEFAULT_OUTPUT_MODIFIER: &str = "_o";
/// Default suffix appended to inout identifiers
pub const DEFAULT_INOUT_MODIFIER: &str = "_io";

pub const DEFAULT_SYNC_MASTER: &str = "master_sp";
pub const DEFAULT_MASTER_CLOCKING: &str = "mcb";
pub const DEFAULT_SYNC_SLAVE: &str = "slave_sp";
pub const DEFAULT_SLAVE_CLOCKING: &str = "scb";
pub const DEFAULT_ASYNC_MASTER: &str = "master";
pub const DEFAULT_ASYNC_SLAVE: &str = "slave";

pub const DEFAULT_INPUT_SKEW: &str = "1step";
pub const DEFAULT_OUTPUT_SKEW: &str = "1ns";

/// Whether `name` is a SystemVerilog simple identifier: letters, digits, `_`
/// and `$`, not starting with a digit or `$`
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Identifier suffixes distinguishing per-direction names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierConfig {
    pub enabled: bool,
    pub input: String,
    pub output: String,
    pub inout: String,
}

impl ModifierConfig {
    pub fn suffix_for(&self, direction: Direction) -> &str {
        match direction {
            Direction::Input => &self.input,
            Direction::Output => &self.output,
            Direction::Inout => &self.inout,
        }
    }
}

impl Default for ModifierConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            input: DEFAULT_INPUT_MODIFIER.to_string(),
            output: DEFAULT_OUTPUT_MODIFIER.to_string(),
            inout: DEFAULT_INOUT_MODIFIER.to_string(),
        }
    }
}

/// Modport and clocking block names. An empty modport name skips that block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNames {
    pub sync_master: String,
    pub master_clocking: String,
    pub sync_slave: String,
    pub slave_clocking: String,
    pub async_master: String,
    pub async_slave: String,
}

impl Default for BlockNames {
    fn default() -> Self {
        Self {
            sync_master: DEFAULT_SYNC_MASTER.to_string(),
            master_clocking: DEFAULT_MASTER_CLOCKING.to_string(),
            sync_slave: DEFAULT_SYNC_SLAVE.to_string(),
            slave_clocking: DEFAULT_SLAVE_CLOCKING.to_string(),
            async_master: DEFAULT_ASYNC_MASTER.to_string(),
            async_slave: DEFAULT_ASYNC_SLAVE.to_string(),
        }
    }
}

/// Default input/output skew of one clocking block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skew {
    pub input: String,
    pub output: String,
}

impl Default for Skew {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT_SKEW.to_string(),
            output: DEFAULT_OUTPUT_SKEW.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Skews {
    pub master: Skew,
    pub slave: Skew,
}

/// Everything the assembler needs besides the ports and the clock.
///
/// Built once from defaults, the config file and the operator's answers,
/// then passed by reference and never mutated during assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceConfig {
    pub interface_name: String,
    pub modifiers: ModifierConfig,
    pub blocks: BlockNames,
    pub skews: Skews,
}

impl InterfaceConfig {
    pub fn new(interface_name: impl Into<String>) -> Self {
        Self {
            interface_name: interface_name.into(),
            ..Self::default()
        }
    }

    /// Checks the settings that do not depend on the interface name.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if enabled suffixes are empty or collide, or if a
    /// synchronous modport has no clocking block name.
    pub fn validate_settings(&self) -> Result<()> {
        if self.modifiers.enabled {
            let suffixes = [
                ("input", &self.modifiers.input),
                ("output", &self.modifiers.output),
                ("inout", &self.modifiers.inout),
            ];
            for (name, suffix) in &suffixes {
                if suffix.is_empty() {
                    return Err(invalid(format!("{} modifier must not be empty", name)));
                }
            }
            for (i, (a_name, a)) in suffixes.iter().enumerate() {
                for (b_name, b) in &suffixes[i + 1..] {
                    if a == b {
                        return Err(invalid(format!(
                            "{} and {} modifiers are both '{}'",
                            a_name, b_name, a
                        )));
                    }
                }
            }
        }

        let names = [
            &self.blocks.sync_master,
            &self.blocks.master_clocking,
            &self.blocks.sync_slave,
            &self.blocks.slave_clocking,
            &self.blocks.async_master,
            &self.blocks.async_slave,
        ];
        if let Some(bad) = names
            .iter()
            .find(|name| !name.is_empty() && !is_valid_identifier(name.as_str()))
        {
            return Err(invalid(format!(
                "block name '{}' is not a valid identifier",
                bad
            )));
        }

        if !self.blocks.sync_master.is_empty() && self.blocks.master_clocking.is_empty() {
            return Err(invalid(format!(
                "synchronous master modport '{}' needs a clocking block name",
                self.blocks.sync_master
            )));
        }
        if !self.blocks.sync_slave.is_empty() && self.blocks.slave_clocking.is_empty() {
            return Err(invalid(format!(
                "synchronous slave modport '{}' needs a clocking block name",
                self.blocks.sync_slave
            )));
        }

        Ok(())
    }

    /// Full validation run right before assembly
    pub fn validate(&self) -> Result<()> {
        if self.interface_name.trim().is_empty() {
            return Err(invalid("interface name must not be empty".to_string()));
        }
        if !is_valid_identifier(&self.interface_name) {
            return Err(invalid(format!(
                "interface name '{}' is not a valid identifier",
                self.interface_name
            )));
        }
        self.validate_settings()
    }
}

fn invalid(reason: String) -> anyhow::Error {
    GeneratorError::InvalidConfig { reason }.into()
}
