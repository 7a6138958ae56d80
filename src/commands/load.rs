use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::consts::pluralize;
use crate::controller::Controller;
use crate::render;

pub struct LoadCommand;

#[async_trait]
impl Command for LoadCommand {
    fn name(&self) -> &str {
        "/load"
    }

    fn aliases(&self) -> &[&str] {
        &["/upload"]
    }

    fn usage(&self) -> &str {
        "<path>"
    }

    fn description(&self) -> &str {
        "load a CSV with 'Article Name' and 'Article Content' columns"
    }

    async fn execute(&self, args: &str, controller: &mut Controller) -> CommandResult {
        let path = unquote(args);
        if path.is_empty() {
            eprintln!("  ✗ usage: /load <path>");
            return CommandResult::Handled;
        }

        match controller.load_path(path) {
            Ok(report) => {
                println!("  ✓ loaded {path} ({})", pluralize(report.rows, "article", "articles"));
                if let Some(dataset) = controller.dataset() {
                    println!("  {}", render::available(dataset));
                }
            }
            Err(e) => eprintln!("  ✗ {e}"),
        }
        CommandResult::Handled
    }
}

/// Paths pasted from a file manager often arrive quoted.
fn unquote(s: &str) -> &str {
    let s = s.trim();
    for q in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(q).and_then(|rest| rest.strip_suffix(q)) {
            return inner;
        }
    }
    s
}
