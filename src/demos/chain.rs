//! Three-node chain: A → B → C, where B can end the run early.

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::graph::{Graph, Node, Transition};

/// Nodes of the chain graph. Every node carries the tracked number forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ChainNode {
    NodeA { track_number: i64 },
    NodeB { track_number: i64 },
    NodeC { track_number: i64 },
}

impl ChainNode {
    pub const NAMES: [&'static str; 3] = ["NodeA", "NodeB", "NodeC"];

    /// Entry node of the chain
    pub fn start(track_number: i64) -> Self {
        ChainNode::NodeA { track_number }
    }
}

#[async_trait]
impl Node for ChainNode {
    type State = ();
    type Output = String;
    type Error = anyhow::Error;

    fn name(&self) -> &'static str {
        match self {
            ChainNode::NodeA { .. } => "NodeA",
            ChainNode::NodeB { .. } => "NodeB",
            ChainNode::NodeC { .. } => "NodeC",
        }
    }

    async fn run(&self, _state: &mut ()) -> Result<Transition<Self, String>> {
        tracing::debug!(node = self.name(), "Calling node");

        let transition = match *self {
            ChainNode::NodeA { track_number } => {
                Transition::next(ChainNode::NodeB { track_number })
            }
            // B only stops the chain for 1
            ChainNode::NodeB { track_number } if track_number == 1 => {
                Transition::end(format!("Stop at Node B with value --> {}", track_number))
            }
            ChainNode::NodeB { track_number } => {
                Transition::next(ChainNode::NodeC { track_number })
            }
            ChainNode::NodeC { track_number } => {
                Transition::end(format!("Stop at Node C with value --> {}", track_number))
            }
        };
        Ok(transition)
    }
}

/// The chain graph with its three nodes registered
pub fn graph() -> Graph<ChainNode> {
    Graph::new().with_nodes(ChainNode::NAMES)
}
