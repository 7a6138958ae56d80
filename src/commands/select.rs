use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::controller::Controller;

pub struct SelectCommand;

#[async_trait]
impl Command for SelectCommand {
    fn name(&self) -> &str {
        "/select"
    }

    fn usage(&self) -> &str {
        "<index>"
    }

    fn description(&self) -> &str {
        "choose the article index to summarize"
    }

    async fn execute(&self, args: &str, controller: &mut Controller) -> CommandResult {
        let index: usize = match args.parse() {
            Ok(i) => i,
            Err(_) => {
                eprintln!("  ✗ usage: /select <index> (a number from the available range)");
                return CommandResult::Handled;
            }
        };

        match controller.select(index) {
            Ok(()) => {
                let name = controller
                    .dataset()
                    .and_then(|d| d.row(index))
                    .map(|r| r.name)
                    .unwrap_or_default();
                println!("  ✓ selected [{index}] {name}");
            }
            Err(e) => eprintln!("  ✗ {e}"),
        }
        CommandResult::Handled
    }
}
