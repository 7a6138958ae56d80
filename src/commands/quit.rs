use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::controller::Controller;

pub struct QuitCommand;

#[async_trait]
impl Command for QuitCommand {
    fn name(&self) -> &str {
        "/quit"
    }

    fn aliases(&self) -> &[&str] {
        &["quit", "exit", "/exit"]
    }

    fn description(&self) -> &str {
        "exit (summaries are not kept)"
    }

    async fn execute(&self, _args: &str, _controller: &mut Controller) -> CommandResult {
        CommandResult::Quit
    }
}
