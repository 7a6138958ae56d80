use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::consts::pluralize;
use crate::controller::Controller;

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &str {
        "/clear"
    }

    fn description(&self) -> &str {
        "clear all generated summaries"
    }

    async fn execute(&self, _args: &str, controller: &mut Controller) -> CommandResult {
        let count = controller.summaries().len();
        controller.clear();
        if count == 0 {
            println!("  nothing to clear");
        } else {
            println!("  ✓ cleared {}", pluralize(count, "summary", "summaries"));
        }
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::{loaded_controller, test_controller};

    #[tokio::test]
    async fn clears_summaries() {
        let mut c = loaded_controller();
        c.generate_summary().await.unwrap();
        ClearCommand.execute("", &mut c).await;
        assert!(c.summaries().is_empty());
    }

    #[tokio::test]
    async fn clearing_twice_is_fine() {
        let mut c = test_controller();
        ClearCommand.execute("", &mut c).await;
        assert_eq!(ClearCommand.execute("", &mut c).await, CommandResult::Handled);
        assert!(c.summaries().is_empty());
    }
}
