use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::controller::{Controller, Generated};
use crate::render;
use crate::spinner::{SUMMARIZING, Spinner};

pub struct SummarizeCommand;

#[async_trait]
impl Command for SummarizeCommand {
    fn name(&self) -> &str {
        "/summarize"
    }

    fn aliases(&self) -> &[&str] {
        &["/generate", "/gen"]
    }

    fn usage(&self) -> &str {
        "[index]"
    }

    fn description(&self) -> &str {
        "generate a summary for the selected (or given) article"
    }

    async fn execute(&self, args: &str, controller: &mut Controller) -> CommandResult {
        let index = if args.is_empty() {
            None
        } else {
            match args.parse::<usize>() {
                Ok(i) => Some(i),
                Err(_) => {
                    eprintln!("  ✗ usage: /summarize [index]");
                    return CommandResult::Handled;
                }
            }
        };

        let result = match index {
            Some(i) => Spinner::during(SUMMARIZING, controller.generate_summary_for(i)).await,
            None => Spinner::during(SUMMARIZING, controller.generate_summary()).await,
        };

        match result {
            Ok(Generated::Failed { reason, .. }) => {
                eprintln!("  ✗ summary generation failed: {reason}");
                print!("{}", render::summaries(controller.summaries()));
            }
            Ok(Generated::Summary(_)) => {
                print!("{}", render::summaries(controller.summaries()));
            }
            Err(e) => eprintln!("  ✗ {e}"),
        }
        CommandResult::Handled
    }
}
