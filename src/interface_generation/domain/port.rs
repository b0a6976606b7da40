use super::ModifierConfig;
use crate::shared::error::GeneratorError;
use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// Signal direction as seen from the master side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Input,
    Output,
    Inout,
}

impl Direction {
    /// SystemVerilog keyword for this direction
    pub fn keyword(self) -> &'static str {
        match self {
            Direction::Input => "input",
            Direction::Output => "output",
            Direction::Inout => "inout",
        }
    }

    /// input and output swap; inout stays
    pub fn inverted(self) -> Self {
        match self {
            Direction::Input => Direction::Output,
            Direction::Output => Direction::Input,
            Direction::Inout => Direction::Inout,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Decoded direction token: `i`, `o`, `io`, optionally followed by `!`.
///
/// The trailing `!` marks a main port, i.e. one that appears in the
/// interface port list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionToken {
    pub direction: Direction,
    pub main_port: bool,
}

impl FromStr for DirectionToken {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let token = s.trim();
        let (body, main_port) = match token.strip_suffix('!') {
            Some(body) => (body, true),
            None => (token, false),
        };
        let direction = match body {
            "i" => Direction::Input,
            "o" => Direction::Output,
            "io" => Direction::Inout,
            _ => {
                return Err(format!(
                    "Invalid direction token: '{}'. Expected one of i, o, io (optionally followed by !)",
                    s
                ))
            }
        };
        Ok(Self {
            direction,
            main_port,
        })
    }
}

/// One signal of the interface.
///
/// `direction` is `None` until the port has been resolved; every generation
/// step requires it to be set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    direction: Option<Direction>,
    data_type: String,
    size: String,
    identifier: String,
    expression: Option<String>,
    main_port: bool,
}

impl Port {
    /// Creates an unresolved, internal (non-main) port.
    ///
    /// # Errors
    /// Returns an error if the identifier is empty or the size is neither
    /// empty nor a bracketed range.
    pub fn new(data_type: String, size: String, identifier: String) -> Result<Self> {
        if identifier.is_empty() {
            anyhow::bail!("Port identifier cannot be empty");
        }
        if !size.is_empty() && !size.starts_with('[') {
            anyhow::bail!(
                "Port size '{}' of '{}' must start with '['",
                size,
                identifier
            );
        }

        Ok(Self {
            direction: None,
            data_type,
            size,
            identifier,
            expression: None,
            main_port: false,
        })
    }

    /// Returns a copy with direction and main-port flag taken from `token`
    pub fn resolved(&self, token: DirectionToken) -> Self {
        Self {
            direction: Some(token.direction),
            main_port: token.main_port,
            ..self.clone()
        }
    }

    /// Returns a copy connected through `.expression(identifier)` instead of a typed declaration
    pub fn with_expression(&self, expression: impl Into<String>) -> Self {
        Self {
            expression: Some(expression.into()),
            ..self.clone()
        }
    }

    /// Returns a copy with input and output swapped, used for slave-side views.
    /// inout and unresolved ports come back unchanged.
    pub fn inverted_direction(&self) -> Self {
        Self {
            direction: self.direction.map(Direction::inverted),
            ..self.clone()
        }
    }

    /// Identifier with the direction-specific suffix appended when modifiers are enabled
    pub fn identifier_with_modifier(&self, modifiers: &ModifierConfig) -> String {
        match self.direction {
            Some(direction) if modifiers.enabled => {
                format!("{}{}", self.identifier, modifiers.suffix_for(direction))
            }
            _ => self.identifier.clone(),
        }
    }

    /// Direction of a resolved port
    ///
    /// # Errors
    /// Returns `UnresolvedDirection` if the port was never resolved
    pub fn require_direction(&self) -> Result<Direction> {
        self.direction.ok_or_else(|| {
            GeneratorError::UnresolvedDirection {
                identifier: self.identifier.clone(),
            }
            .into()
        })
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn is_resolved(&self) -> bool {
        self.direction.is_some()
    }

    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn expression(&self) -> Option<&str> {
        self.expression.as_deref()
    }

    pub fn is_main_port(&self) -> bool {
        self.main_port
    }
}
