//! Run record produced by a finished run

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::Node;

/// Outcome of one complete run: the output, the final state and every node
/// executed, in order.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord<N, S, T> {
    /// Unique ID of the run (also attached to its log lines)
    pub run_id: Uuid,

    /// Value carried by the end transition
    pub output: T,

    /// State after the last node ran
    pub state: S,

    /// Executed nodes; a node visited twice appears twice
    pub history: Vec<N>,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// The record type a run of node type `N` produces
pub type RecordOf<N> = RunRecord<N, <N as Node>::State, <N as Node>::Output>;

impl<N, S, T> RunRecord<N, S, T> {
    /// Number of node executions in the run
    pub fn steps(&self) -> usize {
        self.history.len()
    }

    /// Split into (final state, output, history)
    pub fn into_parts(self) -> (S, T, Vec<N>) {
        (self.state, self.output, self.history)
    }
}

impl<N: Node, S, T> RunRecord<N, S, T> {
    /// Names of the executed nodes, in order
    pub fn history_names(&self) -> Vec<&'static str> {
        self.history.iter().map(|node| node.name()).collect()
    }
}
