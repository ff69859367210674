//! Node trait: one step in a graph

use async_trait::async_trait;

use crate::core::GraphError;

use super::Transition;

/// One step in a graph.
///
/// A graph is a closed set of steps, so the usual implementor is an enum whose
/// variants carry each step's own parameters (feedback text, a drafted email,
/// a counter). The shared state is not part of the node; the runner lends it
/// to every call by `&mut`.
///
/// # Example
///
/// ```ignore
/// enum Counter { Increment, Check }
///
/// #[async_trait]
/// impl Node for Counter {
///     type State = i64;
///     type Output = i64;
///     type Error = anyhow::Error;
///
///     fn name(&self) -> &'static str { ... }
///
///     async fn run(&self, n: &mut i64) -> anyhow::Result<Transition<Self, i64>> {
///         match self {
///             Counter::Increment => { *n += 1; Ok(Transition::next(Counter::Check)) }
///             Counter::Check => Ok(Transition::end(*n)),
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait Node: Sized + Send + Sync {
    /// Mutable state threaded through every node of one run
    type State: Send;

    /// Value carried by the end transition
    type Output: Send;

    /// Error raised by node bodies. Runner errors convert into it, so a run
    /// reports one error type and node errors come back untouched.
    type Error: From<GraphError> + Send;

    /// Name of this node's kind (e.g. `"WriteEmail"`). Two instances of the
    /// same variant share a name.
    fn name(&self) -> &'static str;

    /// Execute the node against the shared state and pick the next step.
    async fn run(
        &self,
        state: &mut Self::State,
    ) -> Result<Transition<Self, Self::Output>, Self::Error>;
}
