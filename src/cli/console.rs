use colored::*;
use std::fmt::Display;

use crate::graph::{Node, RunRecord};

/// Console prints run progress and results with colored formatting
pub struct Console {
    node_color: Color,
    output_color: Color,
}

impl Console {
    /// Create a new Console with default colors
    pub fn new() -> Self {
        Self {
            node_color: Color::Cyan,
            output_color: Color::Green,
        }
    }

    /// Print a banner naming the graph about to run
    pub fn print_banner(&self, title: &str) {
        println!("{}", "=".repeat(60).bright_blue());
        println!("{}", format!("  {}", title).bright_blue().bold());
        println!("{}", "=".repeat(60).bright_blue());
        println!();
    }

    /// Print a separator line
    pub fn print_separator(&self) {
        println!("{}", "-".repeat(60).bright_black());
    }

    /// Print the executed nodes, one numbered line each
    pub fn print_history<N: Node>(&self, history: &[N]) {
        println!("{}", "History:".bright_white().bold());
        for (i, node) in history.iter().enumerate() {
            println!(
                "  {} {}",
                format!("{:>3}.", i + 1).bright_black(),
                node.name().color(self.node_color)
            );
        }
    }

    /// Print the output of a run
    pub fn print_output(&self, output: &impl Display) {
        println!(
            "{} {}",
            "Output:".color(self.output_color).bold(),
            output.to_string().color(self.output_color)
        );
    }

    /// Print history, step count and output of a finished run
    pub fn print_record<N, S, T>(&self, record: &RunRecord<N, S, T>)
    where
        N: Node,
        T: Display,
    {
        self.print_history(&record.history);
        self.print_separator();
        println!(
            "{} {} {}",
            "Run:".yellow().bold(),
            record.run_id,
            format!("({} steps)", record.steps()).bright_black()
        );
        self.print_output(&record.output);
    }

    /// Print an error message
    pub fn print_error(&self, error: &str) {
        eprintln!("{} {}", "Error:".red().bold(), error);
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
