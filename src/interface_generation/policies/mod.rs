pub mod output_naming;

pub use output_naming::{OutputNaming, OUTPUT_EXTENSION};
