pub mod interface_config;
pub mod port;

pub use interface_config::{
    is_valid_identifier, BlockNames, InterfaceConfig, ModifierConfig, Skew, Skews,
};
pub use port::{Direction, DirectionToken, Port};
