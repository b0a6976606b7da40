use crate::interface_generation::domain::{Direction, ModifierConfig, Port, Skew};
use crate::shared::Result;

/// Placeholder used in the size column when a port has no range
const EMPTY_SIZE_FIELD: &str = "\t";

/// TemplateComposer - stateless renderers for the text fragments of an interface
///
/// Every renderer reads ports and configuration only. Fragments are indented
/// with tabs so the columns of the generated file line up.
pub struct TemplateComposer;

impl TemplateComposer {
    /// Renders a port as it appears in a port list.
    ///
    /// Exactly one of six forms is chosen from the port's direction and
    /// whether it carries a connection expression. The direction suffix is
    /// appended only when `apply_modifier` is set.
    ///
    /// # Errors
    /// Returns `UnresolvedDirection` for a port without direction
    pub fn port_declaration(
        port: &Port,
        modifiers: &ModifierConfig,
        apply_modifier: bool,
    ) -> Result<String> {
        let direction = port.require_direction()?;
        let modifier = if apply_modifier {
            modifiers.suffix_for(direction)
        } else {
            ""
        };
        let size = Self::size_field(port);
        let identifier = port.identifier();
        let dtype = port.data_type();

        let rendered = match (direction, port.expression()) {
            (Direction::Input, None) => {
                format!("input\t{}\t{}\t{}{}", dtype, size, identifier, modifier)
            }
            (Direction::Output, None) => {
                format!("output\t{}\t{}\t{}{}", dtype, size, identifier, modifier)
            }
            // inout ports are nets, so the variable type is dropped
            (Direction::Inout, None) => format!("inout\t\t{}\t{}{}", size, identifier, modifier),
            (Direction::Input, Some(expression)) => {
                format!("input\t.{}{}({})", expression, modifier, identifier)
            }
            (Direction::Output, Some(expression)) => {
                format!("output\t.{}{}({})", expression, modifier, identifier)
            }
            (Direction::Inout, Some(expression)) => {
                format!("inout\t.{}{}({})", expression, modifier, identifier)
            }
        };
        Ok(rendered)
    }

    /// Renders an internal signal declared in the interface body
    pub fn item_declaration(port: &Port) -> String {
        format!(
            "{}\t{}\t{};",
            port.data_type(),
            Self::size_field(port),
            port.identifier()
        )
    }

    /// Renders one signal line of a clocking block.
    ///
    /// Main ports keep their direction and use the suffixed name; internal
    /// signals use the plain name and are inverted for the slave side.
    pub fn clocking_entry(port: &Port, modifiers: &ModifierConfig, inverted: bool) -> Result<String> {
        if port.is_main_port() {
            let direction = port.require_direction()?;
            return Ok(format!(
                "{}\t{};",
                direction,
                port.identifier_with_modifier(modifiers)
            ));
        }

        let oriented = if inverted {
            port.inverted_direction()
        } else {
            port.clone()
        };
        let direction = oriented.require_direction()?;
        Ok(format!("{}\t{};", direction, oriented.identifier()))
    }

    /// Renders a clocking block sampling every port except the clock itself.
    ///
    /// # Arguments
    /// * `name` - Clocking block identifier
    /// * `ports` - All ports in source order
    /// * `clock_index` - Position of the clock port in `ports`
    /// * `skew` - Default input and output skew
    /// * `inverted` - Generate the slave-side view
    pub fn clocking_block(
        name: &str,
        ports: &[Port],
        clock_index: usize,
        skew: &Skew,
        modifiers: &ModifierConfig,
        inverted: bool,
    ) -> Result<String> {
        let clock = ports
            .get(clock_index)
            .ok_or_else(|| anyhow::anyhow!("Clock port index {} is out of range", clock_index))?;

        let mut items = String::new();
        for (index, port) in ports.iter().enumerate() {
            if index == clock_index {
                continue;
            }
            items.push_str("\t\t");
            items.push_str(&Self::clocking_entry(port, modifiers, inverted)?);
            items.push('\n');
        }

        Ok(format!(
            "\n\tclocking {name} @(posedge {clock});\n\t\tdefault input #{input} output #{output};\n{items}\tendclocking : {name}\n\n",
            name = name,
            clock = clock.identifier_with_modifier(modifiers),
            input = skew.input,
            output = skew.output,
            items = items,
        ))
    }

    /// Renders a modport that exposes a clocking block
    pub fn sync_modport(name: &str, clocking_name: &str) -> String {
        Self::modport(name, &format!("clocking {}", clocking_name))
    }

    /// Renders one entry of an asynchronous modport.
    ///
    /// Internal signals are bound to their suffixed name through
    /// `.name_suffix(name)` when modifiers are enabled.
    pub fn async_modport_entry(
        port: &Port,
        modifiers: &ModifierConfig,
        inverted: bool,
    ) -> Result<String> {
        let oriented = if inverted && !port.is_main_port() {
            port.inverted_direction()
        } else {
            port.clone()
        };
        let direction = oriented.require_direction()?;
        let named = oriented.identifier_with_modifier(modifiers);

        if oriented.is_main_port() || !modifiers.enabled {
            Ok(format!("{}\t{}", direction, named))
        } else {
            Ok(format!(
                "{}\t.{}({})",
                direction,
                named,
                oriented.identifier()
            ))
        }
    }

    /// Renders an asynchronous modport listing every port
    pub fn async_modport(
        name: &str,
        ports: &[Port],
        modifiers: &ModifierConfig,
        inverted: bool,
    ) -> Result<String> {
        let entries = ports
            .iter()
            .map(|port| {
                Self::async_modport_entry(port, modifiers, inverted).map(|e| format!("\t\t{}", e))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::modport(name, &format!("\n{}\n\t", entries.join(",\n"))))
    }

    fn modport(name: &str, list_of_ports: &str) -> String {
        format!("\tmodport {} ({});\n", name, list_of_ports)
    }

    fn size_field(port: &Port) -> &str {
        if port.size().is_empty() {
            EMPTY_SIZE_FIELD
        } else {
            port.size()
        }
    }
}
