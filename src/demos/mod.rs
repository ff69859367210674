//! Example graphs
//!
//! - `chain` - Three linear nodes where the middle one can end the run
//! - `never_42` - Counter that loops back whenever it lands on 42
//! - `email_feedback` - Write/review/rewrite loop with pluggable collaborators

pub mod chain;
pub mod email_feedback;
pub mod never_42;

pub use chain::ChainNode;
pub use email_feedback::{
    Draft, Email, EmailNode, EmailReviewer, EmailState, EmailWriter, InterestReviewer, Review,
    TemplateWriter, User,
};
pub use never_42::{CounterNode, CounterState};
