use super::prompt::prompt_until;
use crate::interface_generation::domain::{DirectionToken, Port};
use crate::ports::outbound::OperatorConsole;
use crate::shared::Result;

/// Prompt shown before the clock port is chosen
pub const CLOCK_PROMPT: &str = "Clock signal name: ";

const DIRECTION_HELP: &str = "For each interface item without a specified direction in the source file, enter the direction for the master blocks:\n
    'i' \tfor input
    'o' \tfor output
    'io'\tfor inout
Add ! (e.g. 'i!') to force the same direction for both sets of ports, this will add the item to the interface port list.\n";

/// DirectionResolver - completes ports through the operator console
///
/// Ports are handled one at a time in source order. Invalid answers are
/// asked again without limit; nothing is ever defaulted.
pub struct DirectionResolver<'a, C: ?Sized> {
    console: &'a C,
}

impl<'a, C> DirectionResolver<'a, C>
where
    C: OperatorConsole + ?Sized,
{
    pub fn new(console: &'a C) -> Self {
        Self { console }
    }

    /// Returns the ports with every missing direction filled in.
    ///
    /// Already resolved ports are passed through untouched.
    pub fn resolve_directions(&self, ports: Vec<Port>) -> Result<Vec<Port>> {
        if ports.iter().all(Port::is_resolved) {
            return Ok(ports);
        }

        self.console.show(DIRECTION_HELP);
        ports
            .into_iter()
            .map(|port| {
                if port.is_resolved() {
                    return Ok(port);
                }
                let token = self.prompt_direction(port.identifier())?;
                Ok(port.resolved(token))
            })
            .collect()
    }

    /// Asks for a direction token for `identifier` until a valid one is given
    pub fn prompt_direction(&self, identifier: &str) -> Result<DirectionToken> {
        let label = format!("{}\t:\t", identifier);
        prompt_until(self.console, &label, |answer| answer.parse().ok())
    }

    /// Asks for the clock port name until it matches a port.
    ///
    /// # Returns
    /// Position of the first port in source order carrying that identifier
    pub fn select_clock(&self, ports: &[Port]) -> Result<usize> {
        prompt_until(self.console, CLOCK_PROMPT, |answer| {
            let name = answer.trim();
            ports.iter().position(|port| port.identifier() == name)
        })
    }
}
