//! Terminal output for the `agent-graph` binary

pub mod console;

pub use console::Console;
