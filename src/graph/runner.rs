//! Graph definition and run entry points

use std::collections::BTreeSet;
use std::marker::PhantomData;

use crate::core::{GraphError, GraphResult};

use super::config::RunConfig;
use super::record::RecordOf;
use super::run::GraphRun;
use super::Node;

/// A graph over node type `N`.
///
/// The edges live in the nodes themselves (each `Node::run` picks its
/// successor), so a graph only carries the set of node kinds allowed to appear
/// and the run configuration. Runs never share state, so one graph can drive
/// any number of runs at once.
///
/// ```ignore
/// let graph = Graph::new()
///     .with_nodes(["Increment", "Check42"])
///     .with_max_steps(100);
///
/// let record = graph.run(CounterNode::Increment, CounterState::new(41)).await?;
/// assert_eq!(record.output, 43);
/// ```
pub struct Graph<N> {
    nodes: Option<BTreeSet<&'static str>>,
    config: RunConfig,
    _node: PhantomData<fn() -> N>,
}

impl<N: Node> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> Graph<N> {
    /// Create a graph that accepts any node and never limits steps
    pub fn new() -> Self {
        Self {
            nodes: None,
            config: RunConfig::default(),
            _node: PhantomData,
        }
    }

    /// Register the node kinds (by `Node::name`) that may appear in a run.
    ///
    /// Once registered, a run fails with `GraphError::UnregisteredNode` as soon
    /// as it is about to execute a node outside the set.
    pub fn with_nodes(mut self, names: impl IntoIterator<Item = &'static str>) -> Self {
        self.nodes
            .get_or_insert_with(BTreeSet::new)
            .extend(names);
        self
    }

    /// Set the run configuration
    pub fn with_config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    /// Limit every run to `max` node executions
    pub fn with_max_steps(mut self, max: usize) -> Self {
        self.config = self.config.with_max_steps(max);
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Registered node names in sorted order, or `None` if any node is accepted
    pub fn node_names(&self) -> Option<Vec<&'static str>> {
        self.nodes.as_ref().map(|names| names.iter().copied().collect())
    }

    /// Check if a node kind may appear in a run of this graph
    pub fn is_registered(&self, name: &str) -> bool {
        self.nodes
            .as_ref()
            .map_or(true, |names| names.contains(name))
    }

    pub(crate) fn check_registered(&self, node: &N) -> GraphResult<()> {
        let name = node.name();
        if self.is_registered(name) {
            Ok(())
        } else {
            Err(GraphError::unregistered(name))
        }
    }

    /// Start a run that the caller advances one node at a time
    pub fn iter(&self, start: N, state: N::State) -> GraphRun<'_, N> {
        GraphRun::new(self, start, state)
    }

    /// Run from `start` until a node ends the run.
    ///
    /// Nodes execute one at a time; each node's future completes before the
    /// next node starts. A node error is returned unchanged and no record is
    /// produced.
    pub async fn run(&self, start: N, state: N::State) -> Result<RecordOf<N>, N::Error> {
        self.iter(start, state).run_to_end().await
    }

    /// Blocking variant of `run` for callers outside an async context.
    ///
    /// Drives the run on a fresh current-thread runtime, so it must not be
    /// called from inside another tokio runtime.
    pub fn run_blocking(&self, start: N, state: N::State) -> Result<RecordOf<N>, N::Error> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(GraphError::from)?;

        runtime.block_on(self.run(start, state))
    }
}
