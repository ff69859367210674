//! Transition result returned by a node

use serde::{Deserialize, Serialize};

/// What the runner does after a node finishes.
///
/// - **Next**: run the given node next (it may be a node already visited).
/// - **End**: stop the run and return the value as its output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition<N, T> {
    /// Continue with this node
    Next(N),
    /// Terminate with this output
    End(T),
}

impl<N, T> Transition<N, T> {
    /// Continue with `node`
    pub fn next(node: N) -> Self {
        Transition::Next(node)
    }

    /// Terminate with `output`
    pub fn end(output: T) -> Self {
        Transition::End(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_checks() {
        let next: Transition<&str, i32> = Transition::next("B");
        assert_eq!(next, Transition::Next("B"));

        let end: Transition<&str, i32> = Transition::end(42);
        assert_eq!(end, Transition::End(42));
    }
}
