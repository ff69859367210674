//! Step-wise execution of a single graph run

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::GraphError;

use super::record::{RecordOf, RunRecord};
use super::runner::Graph;
use super::{Node, Transition};

/// Result of executing one node with `GraphRun::step`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The node transitioned to another node
    Continued,
    /// The node ended the run; take the record with `into_record`
    Finished,
}

/// A run in progress.
///
/// Owns the state, the node waiting to execute and the history so far. Created
/// by `Graph::iter`; `Graph::run` drives one of these to the end.
///
/// ```ignore
/// let mut run = graph.iter(CounterNode::Increment, CounterState::new(41));
/// while run.step().await? == StepOutcome::Continued {
///     println!("number is now {}", run.state().number);
/// }
/// let record = run.into_record();
/// ```
pub struct GraphRun<'g, N: Node> {
    graph: &'g Graph<N>,
    run_id: Uuid,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
    state: N::State,
    pending: Option<N>,
    history: Vec<N>,
    output: Option<N::Output>,
}

impl<'g, N: Node> GraphRun<'g, N> {
    pub(crate) fn new(graph: &'g Graph<N>, start: N, state: N::State) -> Self {
        let run_id = Uuid::new_v4();
        tracing::debug!(run_id = %run_id, start = start.name(), "Graph run created");

        Self {
            graph,
            run_id,
            started_at: Utc::now(),
            finished_at: None,
            state,
            pending: Some(start),
            history: Vec::new(),
            output: None,
        }
    }

    /// Unique ID of this run
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// The node the next `step` will execute, if the run has not ended
    pub fn next_node(&self) -> Option<&N> {
        self.pending.as_ref()
    }

    pub fn state(&self) -> &N::State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut N::State {
        &mut self.state
    }

    /// Nodes executed so far, in order
    pub fn history(&self) -> &[N] {
        &self.history
    }

    /// Number of node executions so far
    pub fn steps(&self) -> usize {
        self.history.len()
    }

    /// Check if a node has ended the run
    pub fn is_finished(&self) -> bool {
        self.output.is_some()
    }

    /// Execute exactly one node.
    ///
    /// If the node fails, or the returned future is dropped before the node
    /// completes, the node stays pending and the history is unchanged; the
    /// state keeps whatever the node wrote. A failed node's error is returned
    /// as-is. Stepping a finished run fails with `GraphError::RunFinished`.
    pub async fn step(&mut self) -> Result<StepOutcome, N::Error> {
        if self.is_finished() {
            return Err(GraphError::RunFinished.into());
        }

        match self.advance().await? {
            Some(output) => {
                self.output = Some(output);
                self.finished_at = Some(Utc::now());
                Ok(StepOutcome::Finished)
            }
            None => Ok(StepOutcome::Continued),
        }
    }

    /// Step until a node ends the run.
    pub async fn run_to_end(mut self) -> Result<RecordOf<N>, N::Error> {
        if let Some(output) = self.output.take() {
            return Ok(self.finish(output));
        }

        loop {
            if let Some(output) = self.advance().await? {
                return Ok(self.finish(output));
            }
        }
    }

    /// Take the run record. `None` until a node has ended the run.
    pub fn into_record(mut self) -> Option<RecordOf<N>> {
        let output = self.output.take()?;
        Some(self.finish(output))
    }

    async fn advance(&mut self) -> Result<Option<N::Output>, N::Error> {
        // The node stays in `pending` until it returns, so a dropped step
        // future leaves it ready to run again.
        let node = self.pending.as_ref().ok_or(GraphError::RunFinished)?;

        if let Some(limit) = self.graph.config().limit_reached(self.history.len()) {
            return Err(GraphError::StepLimitExceeded { limit }.into());
        }

        self.graph.check_registered(node)?;

        tracing::debug!(
            run_id = %self.run_id,
            step = self.history.len() + 1,
            node = node.name(),
            "Executing node"
        );

        let transition = node.run(&mut self.state).await?;

        let (next, output) = match transition {
            Transition::Next(next) => {
                tracing::trace!(run_id = %self.run_id, next = next.name(), "Transition");
                (Some(next), None)
            }
            Transition::End(output) => (None, Some(output)),
        };

        if let Some(executed) = std::mem::replace(&mut self.pending, next) {
            self.history.push(executed);
        }
        Ok(output)
    }

    fn finish(self, output: N::Output) -> RecordOf<N> {
        tracing::info!(
            run_id = %self.run_id,
            steps = self.history.len(),
            "Graph run finished"
        );

        RunRecord {
            run_id: self.run_id,
            output,
            state: self.state,
            history: self.history,
            started_at: self.started_at,
            finished_at: self.finished_at.unwrap_or_else(Utc::now),
        }
    }
}
