use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::controller::Controller;
use crate::render;

pub struct ListCommand;

#[async_trait]
impl Command for ListCommand {
    fn name(&self) -> &str {
        "/list"
    }

    fn aliases(&self) -> &[&str] {
        &["/ls"]
    }

    fn description(&self) -> &str {
        "show all generated summaries"
    }

    async fn execute(&self, _args: &str, controller: &mut Controller) -> CommandResult {
        print!("{}", render::summaries(controller.summaries()));
        CommandResult::Handled
    }
}
