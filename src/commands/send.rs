use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::controller::{Controller, ControllerError};
use crate::render;
use crate::spinner::{SENDING, Spinner};

pub struct SendCommand;

#[async_trait]
impl Command for SendCommand {
    fn name(&self) -> &str {
        "/send"
    }

    fn description(&self) -> &str {
        "send all summaries to Telegram"
    }

    async fn execute(&self, _args: &str, controller: &mut Controller) -> CommandResult {
        match Spinner::during(SENDING, controller.send_all()).await {
            Ok(()) => println!("  ✓ {}", render::SEND_SUCCESS),
            Err(ControllerError::Notify(e)) => eprintln!("  ✗ {}", render::notify_failure(&e)),
            Err(e) => eprintln!("  ✗ {e}"),
        }
        CommandResult::Handled
    }
}
