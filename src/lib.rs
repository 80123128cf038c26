pub mod arguments;
pub mod error;
pub mod targets;
pub mod updater;
