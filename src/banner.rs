//! Startup banner and session summary display.

use crate::consts::{AUTHOR, pluralize};

/// Session configuration for display in the startup banner.
pub struct BannerInfo<'a> {
    pub model: &'a str,
    pub gemini_status: &'a str,
    pub telegram_status: &'a str,
    pub file: Option<&'a str>,
}

/// Print the startup banner with session info.
pub fn print_banner(info: &BannerInfo) {
    println!(
        r#"
   ╔═══════════════════════════════════════╗
   ║         T R U E V I S I O N           ║
   ║        csv article summarizer         ║
   ╚═══════════════════════════════════════╝

   version   {}
   by        {}
   model     {}
   gemini    {}
   telegram  {}
   csv       {}

   type /help for commands
"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        info.model,
        info.gemini_status,
        info.telegram_status,
        info.file.unwrap_or("none (use /load <path>)"),
    );
}

/// Print the session summary (summary count + farewell).
pub fn print_session_summary(summaries: usize) {
    if summaries > 0 {
        println!("session: {}", pluralize(summaries, "summary", "summaries"));
    }
    println!("goodbye.");
}
