// UI layer: the interactive terminal flow, built with `dialoguer` and
// `indicatif`. The only decision logic lives in `submit_topic`; the
// menu loop collects input and renders the outcome.

use crate::api::TopicAnalyzer;
use anyhow::Result;
use crossterm::style::Stylize;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Outcome of one submit action. `Rejected` never reached the network;
/// `Failed` carries the display message for an error the request
/// produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Submission {
    Rejected { warning: String },
    Answered { text: String },
    Failed { message: String },
}

/// Decide what one press of "analyze" does: reject blank topics before
/// any request is issued, otherwise forward the topic and wrap whatever
/// comes back. Exactly one `analyze` call happens per non-blank topic.
pub fn submit_topic(analyzer: &dyn TopicAnalyzer, raw_topic: &str) -> Submission {
    let topic = raw_topic.trim();
    if topic.is_empty() {
        return Submission::Rejected {
            warning: "Please enter a topic first!".into(),
        };
    }
    match analyzer.analyze(topic) {
        Ok(text) => Submission::Answered { text },
        Err(e) => Submission::Failed {
            message: format!("An error occurred: {e}"),
        },
    }
}

/// Main interactive loop. Receives the analyzer and keeps offering the
/// menu until the user chooses "Exit".
///
/// Note: `Select::interact()` is keyboard-driven: arrow keys and Enter
/// choose an option.
pub fn main_menu(analyzer: &dyn TopicAnalyzer) -> Result<()> {
    print_banner();
    loop {
        let items = vec!["Analyze a topic", "Exit"];
        let selection = Select::new().items(&items).default(0).interact()?;
        match selection {
            0 => handle_analyze(analyzer)?,
            1 => break,
            _ => {}
        }
    }
    println!("{}", "Bridge-The-Gap prototype | powered by Gemini".dark_grey());
    Ok(())
}

/// Title, subtitle and a short description of what the tool does.
fn print_banner() {
    println!("{}", "Bridge-The-Gap".bold());
    println!("{}", "Find your missing knowledge".dark_grey());
    println!("Struggling with a complex topic? Type it in and we'll identify the");
    println!("3 fundamental concepts you need to master first.");
    println!();
}

/// Collect a topic and run one submission. The call blocks for the full
/// round trip, so a spinner keeps the terminal alive while it waits; no
/// cancellation is offered.
fn handle_analyze(analyzer: &dyn TopicAnalyzer) -> Result<()> {
    let raw_topic: String = Input::new()
        .with_prompt("What topic is confusing you? (e.g. Eigenvalues, Backpropagation, CRISPR)")
        .allow_empty(true)
        .interact_text()?;

    let topic = raw_topic.trim().to_string();
    let outcome = if topic.is_empty() {
        submit_topic(analyzer, &raw_topic)
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
        spinner.set_message(format!("Analyzing '{topic}'..."));
        spinner.enable_steady_tick(Duration::from_millis(120));
        let outcome = submit_topic(analyzer, &raw_topic);
        spinner.finish_and_clear();
        outcome
    };

    match outcome {
        Submission::Rejected { warning } => println!("{}", warning.yellow()),
        Submission::Answered { text } => {
            println!("---");
            println!(
                "{}",
                format!("To understand {topic}, master these first:").green()
            );
            println!();
            // The model's markdown, verbatim.
            println!("{text}");
            println!();
            println!(
                "{}",
                "Tip: master these foundations first to make the complex topic easy!".dark_grey()
            );
        }
        Submission::Failed { message } => {
            println!("{}", message.red());
            println!(
                "{}",
                "Note: ensure your API key is enabled for the selected model.".dark_grey()
            );
        }
    }
    Ok(())
}
