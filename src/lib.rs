pub mod core;
pub mod graph;

// Optional components
pub mod cli;
pub mod logging;

// Example graphs built on the runner
pub mod demos;

pub use crate::core::{GraphError, GraphResult};
pub use crate::graph::{
    Graph, GraphRun, Node, RecordOf, RunConfig, RunRecord, StepOutcome, Transition,
};
