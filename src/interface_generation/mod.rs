/// Domain layer - port model, parsing and text composition
///
/// Nothing in this layer performs I/O; everything the operator or the file
/// system provides arrives through the application layer.
pub mod domain;
pub mod policies;
pub mod services;
