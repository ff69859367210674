//! Write → critique → rewrite loop for a welcome email.
//!
//! `WriteEmail` asks an `EmailWriter` for a draft (passing reviewer feedback on
//! rewrites), `Feedback` asks an `EmailReviewer` to judge it and either ends the
//! run with the email or loops back to `WriteEmail` with the feedback text.
//! The writer and reviewer are collaborators (in practice LLM agents); the
//! offline `TemplateWriter` and `InterestReviewer` are deterministic stand-ins.

use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::graph::{Graph, Node, Transition};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub subject: String,
    pub body: String,
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subject: {}\n\n{}", self.subject, self.body)
    }
}

/// Reviewer verdict on a draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Review {
    /// Draft must be rewritten following the feedback
    RequiresRewrite { feedback: String },
    /// Draft can be sent
    Approved,
}

/// A draft plus the conversation messages that produced it
#[derive(Debug, Clone)]
pub struct Draft {
    pub email: Email,
    pub messages: Vec<String>,
}

/// Produces email drafts
#[async_trait]
pub trait EmailWriter: Send + Sync {
    /// Write a draft for `user`. `feedback` is set on rewrites; `history` holds
    /// the messages of all earlier writes in this run.
    async fn write(&self, user: &User, feedback: Option<&str>, history: &[String])
        -> Result<Draft>;
}

/// Judges email drafts
#[async_trait]
pub trait EmailReviewer: Send + Sync {
    async fn review(&self, user: &User, email: &Email) -> Result<Review>;
}

/// Shared state of one email run
#[derive(Clone, Serialize)]
pub struct EmailState {
    pub user: User,

    /// Accumulated writer conversation, carried into every rewrite
    pub writer_messages: Vec<String>,

    #[serde(skip)]
    writer: Arc<dyn EmailWriter>,

    #[serde(skip)]
    reviewer: Arc<dyn EmailReviewer>,
}

impl EmailState {
    pub fn new(user: User, writer: Arc<dyn EmailWriter>, reviewer: Arc<dyn EmailReviewer>) -> Self {
        Self {
            user,
            writer_messages: Vec::new(),
            writer,
            reviewer,
        }
    }

    /// State wired to the offline writer and reviewer
    pub fn offline(user: User) -> Self {
        Self::new(user, Arc::new(TemplateWriter), Arc::new(InterestReviewer))
    }
}

impl fmt::Debug for EmailState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailState")
            .field("user", &self.user)
            .field("writer_messages", &self.writer_messages.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EmailNode {
    WriteEmail { feedback: Option<String> },
    Feedback { email: Email },
}

impl EmailNode {
    pub const NAMES: [&'static str; 2] = ["WriteEmail", "Feedback"];

    /// First write, without feedback
    pub fn start() -> Self {
        EmailNode::WriteEmail { feedback: None }
    }
}

#[async_trait]
impl Node for EmailNode {
    type State = EmailState;
    type Output = Email;
    type Error = anyhow::Error;

    fn name(&self) -> &'static str {
        match self {
            EmailNode::WriteEmail { .. } => "WriteEmail",
            EmailNode::Feedback { .. } => "Feedback",
        }
    }

    async fn run(&self, state: &mut EmailState) -> Result<Transition<Self, Email>> {
        match self {
            EmailNode::WriteEmail { feedback } => {
                tracing::debug!(feedback = ?feedback, "Writing email");

                let draft = state
                    .writer
                    .write(&state.user, feedback.as_deref(), &state.writer_messages)
                    .await?;
                state.writer_messages.extend(draft.messages);

                Ok(Transition::next(EmailNode::Feedback { email: draft.email }))
            }
            EmailNode::Feedback { email } => {
                let review = state.reviewer.review(&state.user, email).await?;
                tracing::debug!(review = ?review, "Email reviewed");

                match review {
                    Review::RequiresRewrite { feedback } => Ok(Transition::next(
                        EmailNode::WriteEmail {
                            feedback: Some(feedback),
                        },
                    )),
                    Review::Approved => Ok(Transition::end(email.clone())),
                }
            }
        }
    }
}

pub fn graph() -> Graph<EmailNode> {
    Graph::new().with_nodes(EmailNode::NAMES)
}

/// Offline writer: a generic welcome first, a tailored one on rewrite.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateWriter;

#[async_trait]
impl EmailWriter for TemplateWriter {
    async fn write(
        &self,
        user: &User,
        feedback: Option<&str>,
        _history: &[String],
    ) -> Result<Draft> {
        let (request, email) = match feedback {
            None => (
                format!("Write a welcome email for {} <{}>", user.name, user.email),
                Email {
                    subject: "Welcome to the blog!".to_string(),
                    body: format!(
                        "Hi {},\n\nThanks for subscribing. New posts land every week.",
                        user.name
                    ),
                },
            ),
            Some(feedback) => (
                format!(
                    "Rewrite the email for {} <{}>\nFeedback: {}",
                    user.name, user.email, feedback
                ),
                Email {
                    subject: format!("Welcome aboard, {}!", user.name),
                    body: format!(
                        "Hi {},\n\nThanks for subscribing. Expect posts on {} every week.",
                        user.name,
                        user.interests.join(", ")
                    ),
                },
            ),
        };

        let messages = vec![
            format!("user: {}", request),
            format!("assistant: {}", email.subject),
        ];
        Ok(Draft { email, messages })
    }
}

/// Offline reviewer: approves only emails that mention every user interest.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterestReviewer;

#[async_trait]
impl EmailReviewer for InterestReviewer {
    async fn review(&self, user: &User, email: &Email) -> Result<Review> {
        let body = email.body.to_lowercase();
        let missing: Vec<&str> = user
            .interests
            .iter()
            .filter(|interest| !body.contains(&interest.to_lowercase()))
            .map(String::as_str)
            .collect();

        if missing.is_empty() {
            Ok(Review::Approved)
        } else {
            Ok(Review::RequiresRewrite {
                feedback: format!(
                    "The email must reference the user's interests: {}",
                    missing.join(", ")
                ),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GraphError;

    fn user() -> User {
        User {
            name: "Jay".to_string(),
            email: "jay@example.com".to_string(),
            interests: vec![
                "AI Agent".to_string(),
                "Photography".to_string(),
                "Automation".to_string(),
            ],
        }
    }

    struct ApproveAll;

    #[async_trait]
    impl EmailReviewer for ApproveAll {
        async fn review(&self, _user: &User, _email: &Email) -> Result<Review> {
            Ok(Review::Approved)
        }
    }

    struct NeverSatisfied;

    #[async_trait]
    impl EmailReviewer for NeverSatisfied {
        async fn review(&self, _user: &User, _email: &Email) -> Result<Review> {
            Ok(Review::RequiresRewrite {
                feedback: "try again".to_string(),
            })
        }
    }

    struct BrokenWriter;

    #[async_trait]
    impl EmailWriter for BrokenWriter {
        async fn write(&self, _user: &User, _feedback: Option<&str>, _history: &[String]) -> Result<Draft> {
            anyhow::bail!("model unavailable")
        }
    }

    #[tokio::test]
    async fn test_rewrite_loop() {
        let record = graph()
            .run(EmailNode::start(), EmailState::offline(user()))
            .await
            .unwrap();

        assert_eq!(
            record.history_names(),
            vec!["WriteEmail", "Feedback", "WriteEmail", "Feedback"]
        );
        assert!(record.output.body.contains("Photography"));
        assert_eq!(record.output.subject, "Welcome aboard, Jay!");
        assert_eq!(record.state.writer_messages.len(), 4);

        match &record.history[2] {
            EmailNode::WriteEmail { feedback: Some(feedback) } => {
                assert!(feedback.contains("AI Agent"));
            }
            other => panic!("unexpected node: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_approved_first_draft() {
        let state = EmailState::new(user(), Arc::new(TemplateWriter), Arc::new(ApproveAll));
        let record = graph().run(EmailNode::start(), state).await.unwrap();

        assert_eq!(record.steps(), 2);
        assert_eq!(record.output.subject, "Welcome to the blog!");
    }

    #[tokio::test]
    async fn test_writer_error_propagates() {
        let state = EmailState::new(user(), Arc::new(BrokenWriter), Arc::new(ApproveAll));
        let err = graph().run(EmailNode::start(), state).await.unwrap_err();
        assert_eq!(err.to_string(), "model unavailable");
    }

    #[tokio::test]
    async fn test_endless_feedback_hits_step_limit() {
        let state = EmailState::new(user(), Arc::new(TemplateWriter), Arc::new(NeverSatisfied));
        let err = graph()
            .with_max_steps(6)
            .run(EmailNode::start(), state)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<GraphError>(),
            Some(GraphError::StepLimitExceeded { limit: 6 })
        ));
    }

    #[tokio::test]
    async fn test_interest_reviewer_is_case_insensitive() {
        let email = Email {
            subject: "Hi".to_string(),
            body: "ai agent, photography and automation".to_string(),
        };
        let review = InterestReviewer.review(&user(), &email).await.unwrap();
        assert_eq!(review, Review::Approved);
    }

    #[test]
    fn test_email_display() {
        let email = Email {
            subject: "Hello".to_string(),
            body: "Body".to_string(),
        };
        assert_eq!(email.to_string(), "Subject: Hello\n\nBody");
    }

    #[test]
    fn test_state_serializes_without_collaborators() {
        let json = serde_json::to_value(EmailState::offline(user())).unwrap();
        assert_eq!(json["user"]["name"], "Jay");
        assert!(json.get("writer").is_none());
    }
}
