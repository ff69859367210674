use std::fmt::Display;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use agent_graph::cli::Console;
use agent_graph::demos::{
    chain, email_feedback, never_42, ChainNode, CounterNode, CounterState, EmailNode, EmailState,
    User,
};
use agent_graph::graph::{Graph, Node, RunConfig};
use agent_graph::logging;

#[derive(Debug, Parser)]
#[command(name = "agent-graph")]
#[command(about = "Run the example state graphs", version)]
struct Args {
    /// Fail a run after this many node executions
    #[arg(long, global = true, env = "AGENT_GRAPH_MAX_STEPS")]
    max_steps: Option<usize>,

    /// Print the run record as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// NodeA → NodeB → NodeC; NodeB ends the run when the number is 1
    Chain {
        #[arg(long, default_value_t = 4)]
        track_number: i64,
    },

    /// Counter that loops back whenever it lands on 42
    Never42 {
        #[arg(long, default_value_t = 41)]
        start: i64,
    },

    /// Welcome email write/review loop using the offline writer and reviewer
    Email {
        #[arg(long, default_value = "Jay")]
        name: String,

        #[arg(long, default_value = "jay@example.com")]
        email: String,

        /// Reader interest the email must mention (repeatable)
        #[arg(long = "interest")]
        interests: Vec<String>,
    },
}

const DEFAULT_INTERESTS: [&str; 3] = ["AI Agent", "Photography", "Automation"];

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging()?;

    let args = Args::parse();
    let config = RunConfig::new().with_step_limit(args.max_steps);
    let console = Console::new();

    let result = match args.command {
        Command::Chain { track_number } => {
            execute(
                &console,
                "Chain graph",
                chain::graph().with_config(config),
                ChainNode::start(track_number),
                (),
                args.json,
            )
            .await
        }
        Command::Never42 { start } => {
            execute(
                &console,
                "Never 42 graph",
                never_42::graph().with_config(config),
                CounterNode::Increment,
                CounterState::new(start),
                args.json,
            )
            .await
        }
        Command::Email {
            name,
            email,
            interests,
        } => {
            let interests = if interests.is_empty() {
                DEFAULT_INTERESTS.iter().map(|s| s.to_string()).collect()
            } else {
                interests
            };
            let user = User {
                name,
                email,
                interests,
            };

            execute(
                &console,
                "Email feedback graph",
                email_feedback::graph().with_config(config),
                EmailNode::start(),
                EmailState::offline(user),
                args.json,
            )
            .await
        }
    };

    if let Err(e) = result {
        console.print_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

async fn execute<N>(
    console: &Console,
    title: &str,
    graph: Graph<N>,
    start: N,
    state: N::State,
    json: bool,
) -> Result<()>
where
    N: Node<Error = anyhow::Error> + Serialize,
    N::State: Serialize,
    N::Output: Serialize + Display,
{
    tracing::info!("=== {} starting at {} ===", title, start.name());

    let record = graph.run(start, state).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        console.print_banner(title);
        console.print_record(&record);
    }

    Ok(())
}
