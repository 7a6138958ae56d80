use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::controller::Controller;

/// Listed in the registry so `/help` shows up in its own output.
/// [`CommandRegistry::dispatch`](super::CommandRegistry::dispatch) answers it
/// with the help of every registered command, so `execute` has nothing to do.
pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        "/help"
    }

    fn aliases(&self) -> &[&str] {
        &["/h", "/?"]
    }

    fn description(&self) -> &str {
        "show this help"
    }

    async fn execute(&self, _args: &str, _controller: &mut Controller) -> CommandResult {
        CommandResult::Handled
    }
}
