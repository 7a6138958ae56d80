use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use truevision::banner::{BannerInfo, print_banner, print_session_summary};
use truevision::commands::{CommandRegistry, CommandResult};
use truevision::config::Settings;
use truevision::consts::pluralize;
use truevision::controller::{Controller, ControllerError, Generated};
use truevision::render;
use truevision::spinner::{SENDING, SUMMARIZING, Spinner};

#[derive(Parser)]
#[command(
    name = "truevision",
    version,
    about = "Summarize CSV articles with Gemini and forward them to Telegram."
)]
struct Cli {
    /// CSV file to load on startup
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Summarize these article indices in order, print them and exit
    #[arg(short, long, value_delimiter = ',', requires = "file")]
    run: Option<Vec<usize>>,

    /// With --run: send all summaries to Telegram before exiting
    #[arg(long, requires = "run")]
    send: bool,

    #[command(flatten)]
    settings: Settings,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "truevision=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::debug!(settings = ?cli.settings, "starting");

    let summarizer = cli
        .settings
        .summarizer()
        .context("failed to build Gemini client")?;
    let notifier = cli
        .settings
        .notifier()
        .context("failed to build Telegram client")?;
    let mut controller = Controller::new(Arc::new(summarizer), Arc::new(notifier));

    // Single run mode
    if let Some(indices) = &cli.run {
        let path = cli.file.as_deref().context("--run requires --file")?;
        return run_once(&mut controller, path, indices, cli.send).await;
    }

    let file_label = cli.file.as_ref().map(|p| p.display().to_string());
    print_banner(&BannerInfo {
        model: controller.model(),
        gemini_status: &cli.settings.gemini_status(),
        telegram_status: &cli.settings.telegram_status(),
        file: file_label.as_deref(),
    });

    if let Some(path) = &cli.file {
        match controller.load_path(path) {
            Ok(report) => {
                println!(
                    "  ✓ loaded {} ({})",
                    path.display(),
                    pluralize(report.rows, "article", "articles")
                );
                if let Some(dataset) = controller.dataset() {
                    println!("  {}", render::available(dataset));
                }
            }
            Err(e) => eprintln!("  ✗ {e}"),
        }
    }

    let registry = CommandRegistry::new();

    // REPL on async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\ntruevision> ");
        io::stdout().flush()?;

        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {}", e);
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        // Ctrl+C during an action abandons the action, not the REPL
        tokio::select! {
            result = registry.dispatch(input, &mut controller) => {
                match result {
                    CommandResult::Quit => break,
                    CommandResult::NotACommand => {
                        println!("type /help for available commands");
                    }
                    CommandResult::Handled => {}
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!("\n\ninterrupted");
            }
        }
    }

    print_session_summary(controller.summaries().len());
    Ok(())
}

/// Non-interactive mode: summarize `indices` in order, optionally send, exit.
async fn run_once(
    controller: &mut Controller,
    path: &Path,
    indices: &[usize],
    send: bool,
) -> anyhow::Result<()> {
    controller
        .load_path(path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    for &index in indices {
        match Spinner::during(SUMMARIZING, controller.generate_summary_for(index)).await? {
            Generated::Failed { record, reason } => {
                eprintln!("✗ [{index}] {}: {reason}", record.article_name);
            }
            Generated::Summary(_) => {}
        }
    }

    print!("{}", render::summaries(controller.summaries()));

    if send {
        match Spinner::during(SENDING, controller.send_all()).await {
            Ok(()) => println!("✓ {}", render::SEND_SUCCESS),
            Err(ControllerError::Notify(e)) => bail!("{}", render::notify_failure(&e)),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
