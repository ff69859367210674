//! Directed graph execution over shared mutable state
//!
//! A run starts at one node and keeps executing whatever node the previous one
//! returned, until some node returns `Transition::End`:
//! - `Node` - One step; implemented by a closed enum per graph
//! - `Transition` - `Next(node)` or `End(output)`
//! - `Graph` - Registered node kinds plus `RunConfig`; entry points `run`,
//!   `iter` and `run_blocking`
//! - `GraphRun` - A run advanced one node at a time
//! - `RunRecord` - Output, final state and history of a finished run

mod config;
mod node;
mod record;
mod run;
mod runner;
mod transition;

pub use config::RunConfig;
pub use node::Node;
pub use record::{RecordOf, RunRecord};
pub use run::{GraphRun, StepOutcome};
pub use runner::Graph;
pub use transition::Transition;
