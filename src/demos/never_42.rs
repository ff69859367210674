//! Counter graph that refuses to finish on 42.
//!
//! `Increment` bumps the counter, `Check42` sends it back for another bump when
//! it lands on 42 and ends the run with the number otherwise.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::graph::{Graph, Node, Transition};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    pub number: i64,
}

impl CounterState {
    pub fn new(number: i64) -> Self {
        Self { number }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CounterNode {
    Increment,
    Check42,
}

impl CounterNode {
    pub const NAMES: [&'static str; 2] = ["Increment", "Check42"];
}

#[async_trait]
impl Node for CounterNode {
    type State = CounterState;
    type Output = i64;
    type Error = anyhow::Error;

    fn name(&self) -> &'static str {
        match self {
            CounterNode::Increment => "Increment",
            CounterNode::Check42 => "Check42",
        }
    }

    async fn run(&self, state: &mut CounterState) -> Result<Transition<Self, i64>> {
        match self {
            CounterNode::Increment => {
                state.number = state
                    .number
                    .checked_add(1)
                    .ok_or_else(|| anyhow::anyhow!("Counter overflow at {}", state.number))?;
                Ok(Transition::next(CounterNode::Check42))
            }
            CounterNode::Check42 if state.number == 42 => {
                Ok(Transition::next(CounterNode::Increment))
            }
            CounterNode::Check42 => Ok(Transition::end(state.number)),
        }
    }
}

pub fn graph() -> Graph<CounterNode> {
    Graph::new().with_nodes(CounterNode::NAMES)
}
