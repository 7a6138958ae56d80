use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::consts::pluralize;
use crate::controller::Controller;

pub struct StatusCommand;

#[async_trait]
impl Command for StatusCommand {
    fn name(&self) -> &str {
        "/status"
    }

    fn description(&self) -> &str {
        "show model, destination, loaded CSV and selection"
    }

    async fn execute(&self, _args: &str, controller: &mut Controller) -> CommandResult {
        println!("  model     {}", controller.model());
        println!("  telegram  {}", controller.destination());
        match controller.dataset() {
            Some(ds) => println!("  csv       {}", pluralize(ds.len(), "article", "articles")),
            None => println!("  csv       none"),
        }
        match controller.selected() {
            Some(i) => println!("  selected  {i}"),
            None => println!("  selected  —"),
        }
        println!(
            "  stored    {}",
            pluralize(controller.summaries().len(), "summary", "summaries")
        );
        println!("  phase     {:?}", controller.phase());
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::{loaded_controller, test_controller};

    #[tokio::test]
    async fn returns_handled() {
        let mut idle = test_controller();
        assert_eq!(StatusCommand.execute("", &mut idle).await, CommandResult::Handled);
        let mut loaded = loaded_controller();
        assert_eq!(StatusCommand.execute("", &mut loaded).await, CommandResult::Handled);
    }

    #[test]
    fn metadata() {
        assert_eq!(StatusCommand.name(), "/status");
        assert!(StatusCommand.aliases().is_empty());
    }
}
