use super::TemplateComposer;
use crate::interface_generation::domain::{InterfaceConfig, Port};
use crate::shared::Result;

/// InterfaceAssembler - combines every fragment into one interface document
///
/// Block order is fixed: port list, internal items, master and slave
/// clocking blocks, then synchronous and asynchronous modports. A block whose
/// governing name is empty renders as an empty string.
pub struct InterfaceAssembler<'a> {
    config: &'a InterfaceConfig,
}

impl<'a> InterfaceAssembler<'a> {
    pub fn new(config: &'a InterfaceConfig) -> Self {
        Self { config }
    }

    /// Builds the complete document.
    ///
    /// # Arguments
    /// * `ports` - Resolved ports in source order
    /// * `clock_index` - Position of the clock port in `ports`
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or any port is unresolved
    pub fn assemble(&self, ports: &[Port], clock_index: usize) -> Result<String> {
        self.config.validate()?;
        for port in ports {
            port.require_direction()?;
        }

        let blocks = &self.config.blocks;
        let name = &self.config.interface_name;

        let port_list = self.port_list(ports)?;
        let items = Self::items(ports);

        let mut clocking_blocks = String::new();
        if !blocks.sync_master.is_empty() {
            clocking_blocks.push_str(&TemplateComposer::clocking_block(
                &blocks.master_clocking,
                ports,
                clock_index,
                &self.config.skews.master,
                &self.config.modifiers,
                false,
            )?);
        }
        if !blocks.sync_slave.is_empty() {
            clocking_blocks.push_str(&TemplateComposer::clocking_block(
                &blocks.slave_clocking,
                ports,
                clock_index,
                &self.config.skews.slave,
                &self.config.modifiers,
                true,
            )?);
        }

        let modports = [
            self.sync_modport(&blocks.sync_master, &blocks.master_clocking),
            self.sync_modport(&blocks.sync_slave, &blocks.slave_clocking),
            self.async_modport(&blocks.async_master, ports, false)?,
            self.async_modport(&blocks.async_slave, ports, true)?,
        ]
        .join("\n");

        Ok(format!(
            "interface {name} ({port_list});\n{items}{clocking_blocks}{modports}endinterface : {name}\n",
            name = name,
            port_list = port_list,
            items = items,
            clocking_blocks = clocking_blocks,
            modports = modports,
        ))
    }

    /// Main ports in source order, one per line, comma separated
    pub fn port_list(&self, ports: &[Port]) -> Result<String> {
        let declarations = ports
            .iter()
            .filter(|port| port.is_main_port())
            .map(|port| {
                TemplateComposer::port_declaration(
                    port,
                    &self.config.modifiers,
                    self.config.modifiers.enabled,
                )
                .map(|declaration| format!("\t{}", declaration))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(format!("\n{}\n", declarations.join(",\n")))
    }

    /// Body declarations of every internal signal
    pub fn items(ports: &[Port]) -> String {
        ports
            .iter()
            .filter(|port| !port.is_main_port())
            .map(|port| format!("\t{}\n", TemplateComposer::item_declaration(port)))
            .collect()
    }

    fn sync_modport(&self, name: &str, clocking_name: &str) -> String {
        if name.is_empty() {
            return String::new();
        }
        TemplateComposer::sync_modport(name, clocking_name)
    }

    fn async_modport(&self, name: &str, ports: &[Port], inverted: bool) -> Result<String> {
        if name.is_empty() {
            return Ok(String::new());
        }
        TemplateComposer::async_modport(name, ports, &self.config.modifiers, inverted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface_generation::services::DeclarationParser;

    fn ports(lines: &[&str]) -> Vec<Port> {
        DeclarationParser::parse_lines(lines).unwrap().ports
    }

    fn sample_ports() -> Vec<Port> {
        ports(&[
            "logic clk; i!",
            "logic [7:0] data; o",
            "logic valid; o",
            "logic ready; i",
        ])
    }

    #[test]
    fn test_assemble_full_document() {
        let config = InterfaceConfig::new("bus");
        let document = InterfaceAssembler::new(&config)
            .assemble(&sample_ports(), 0)
            .unwrap();

        let expected = "interface bus (\n\
\tinput\tlogic\t\t\tclk_i\n\
);\n\
\tlogic\t[7:0]\tdata;\n\
\tlogic\t\t\tvalid;\n\
\tlogic\t\t\tready;\n\
\n\
\tclocking mcb @(posedge clk_i);\n\
\t\tdefault input #1step output #1ns;\n\
\t\toutput\tdata;\n\
\t\toutput\tvalid;\n\
\t\tinput\tready;\n\
\tendclocking : mcb\n\
\n\
\n\
\tclocking scb @(posedge clk_i);\n\
\t\tdefault input #1step output #1ns;\n\
\t\tinput\tdata;\n\
\t\tinput\tvalid;\n\
\t\toutput\tready;\n\
\tendclocking : scb\n\
\n\
\tmodport master_sp (clocking mcb);\n\
\n\
\tmodport slave_sp (clocking scb);\n\
\n\
\tmodport master (\n\
\t\tinput\tclk_i,\n\
\t\toutput\t.data_o(data),\n\
\t\toutput\t.valid_o(valid),\n\
\t\tinput\t.ready_i(ready)\n\
\t);\n\
\n\
\tmodport slave (\n\
\t\tinput\tclk_i,\n\
\t\tinput\t.data_i(data),\n\
\t\tinput\t.valid_i(valid),\n\
\t\toutput\t.ready_o(ready)\n\
\t);\n\
endinterface : bus\n";
        assert_eq!(document, expected);
    }

    #[test]
    fn test_port_list_contains_only_main_ports_in_order() {
        let ports = ports(&[
            "logic clk; i!",
            "logic a; o",
            "logic [1:0] irq; o!",
            "logic b; i",
            "wire pad; io!",
        ]);
        let config = InterfaceConfig::new("bus");
        let list = InterfaceAssembler::new(&config).port_list(&ports).unwrap();

        assert_eq!(
            list,
            "\n\tinput\tlogic\t\t\tclk_i,\n\toutput\tlogic\t[1:0]\tirq_o,\n\tinout\t\t\t\tpad_io\n"
        );
        assert!(!list.trim_end().ends_with(','));
    }

    #[test]
    fn test_port_list_without_main_ports() {
        let config = InterfaceConfig::new("bus");
        let list = InterfaceAssembler::new(&config)
            .port_list(&ports(&["logic a; o"]))
            .unwrap();
        assert_eq!(list, "\n\n");
    }

    #[test]
    fn test_no_sync_blocks() {
        let mut config = InterfaceConfig::new("bus");
        config.blocks.sync_master = String::new();
        config.blocks.sync_slave = String::new();

        let document = InterfaceAssembler::new(&config)
            .assemble(&sample_ports(), 0)
            .unwrap();

        assert!(!document.contains("clocking"));
        assert!(!document.contains("master_sp"));
        assert!(!document.contains("slave_sp"));
        assert!(document.contains("\tmodport master (\n"));
        assert!(document.contains("\tmodport slave (\n"));
    }

    #[test]
    fn test_slave_only_configuration() {
        let mut config = InterfaceConfig::new("bus");
        config.blocks.sync_master = String::new();
        config.blocks.async_master = String::new();

        let document = InterfaceAssembler::new(&config)
            .assemble(&sample_ports(), 0)
            .unwrap();

        assert!(!document.contains("clocking mcb"));
        assert!(document.contains("clocking scb"));
        assert!(document.contains("modport slave_sp (clocking scb);"));
        assert!(!document.contains("modport master"));
        assert!(document.ends_with("endinterface : bus\n"));
    }

    #[test]
    fn test_modifiers_disabled() {
        let mut config = InterfaceConfig::new("bus");
        config.modifiers.enabled = false;

        let document = InterfaceAssembler::new(&config)
            .assemble(&sample_ports(), 0)
            .unwrap();

        assert!(document.contains("\tinput\tlogic\t\t\tclk\n"));
        assert!(document.contains("@(posedge clk);"));
        assert!(document.contains("\t\toutput\tdata,\n"));
        assert!(!document.contains("_o"));
    }

    #[test]
    fn test_clock_excluded_by_position_not_name() {
        let ports = ports(&["logic clk; i!", "logic clk; o"]);
        let config = InterfaceConfig::new("bus");
        let document = InterfaceAssembler::new(&config).assemble(&ports, 0).unwrap();

        assert!(document.contains("\t\toutput\tclk;\n"));
    }

    #[test]
    fn test_assemble_rejects_unresolved_port() {
        let ports = ports(&["logic clk; i!", "logic data;"]);
        let config = InterfaceConfig::new("bus");
        let err = InterfaceAssembler::new(&config)
            .assemble(&ports, 0)
            .unwrap_err();
        assert!(err.to_string().contains("`data` has no direction"));
    }

    #[test]
    fn test_assemble_rejects_empty_name() {
        let config = InterfaceConfig::new("");
        assert!(InterfaceAssembler::new(&config)
            .assemble(&sample_ports(), 0)
            .is_err());
    }

    #[test]
    fn test_items_reparse_to_same_fields() {
        let ports = ports(&[
            "logic [7:0] data; o",
            "logic signed [ 3 : 0 ] count; i",
            "bit flag; o",
        ]);
        let items = InterfaceAssembler::items(&ports);

        let reparsed: Vec<&str> = items.lines().collect();
        let reparsed = DeclarationParser::parse_lines(&reparsed).unwrap().ports;
        assert_eq!(reparsed.len(), ports.len());
        for (original, again) in ports.iter().zip(&reparsed) {
            assert_eq!(again.data_type(), original.data_type());
            assert_eq!(again.size(), original.size());
            assert_eq!(again.identifier(), original.identifier());
        }
    }
}
