//! faqbot - terminal host for the FAQ chat widget

mod config;

use std::io::Write as _;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use clap::Parser;
use faqbot_client::{ClientConfig, FaqClient};
use faqbot_dialogue::{FaqWidget, HttpOptionSource, Speaker, WidgetConfig, WidgetEvent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;
use tracing_subscriber::EnvFilter;

use config::Config;

/// Chat with the course FAQ assistant
#[derive(Parser, Debug)]
#[command(name = "faqbot")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the FAQ backend
    #[arg(short, long)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Initialize config file
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if args.init_config {
        let path = Config::init().context("failed to create config file")?;
        println!("Config file: {}", path.display());
        return Ok(());
    }

    let config = Config::load();
    let base_url = args
        .base_url
        .or(config.base_url)
        .unwrap_or_else(|| ClientConfig::default().base_url);
    let timeout = args
        .timeout_secs
        .or(config.request_timeout_secs)
        .map(Duration::from_secs);

    tracing::debug!(%base_url, ?timeout, "connecting to FAQ backend");
    let client = FaqClient::new(ClientConfig { base_url, timeout })
        .context("failed to create FAQ client")?;
    let source = Arc::new(HttpOptionSource::new(client));

    let widget_config = WidgetConfig {
        max_step: config.max_step.unwrap_or_else(|| WidgetConfig::default().max_step),
    };
    let widget = FaqWidget::new(widget_config, source);
    let mut rx = widget.subscribe();

    println!("FAQ assistant — pick a question by number.");
    println!("Commands: open, close, quit");
    println!();

    widget.open();
    widget.wait_for_options().await;
    print_events(&mut rx);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        render_prompt(&widget);
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "close" => {
                widget.close();
                print_events(&mut rx);
                println!("(widget closed — your conversation is kept)");
            }
            "open" => {
                widget.open();
                widget.wait_for_options().await;
                print_events(&mut rx);
            }
            input => {
                let Ok(index) = input.parse::<usize>() else {
                    println!("Pick a number, or: open, close, quit");
                    continue;
                };
                let options = widget.pending_options();
                let Some(choice) = index.checked_sub(1).and_then(|i| options.get(i)) else {
                    println!("No option {}", input);
                    continue;
                };
                widget.select(choice.clone());
                widget.wait_for_options().await;
                print_events(&mut rx);
            }
        }
    }

    Ok(())
}

/// Echo widget events to the terminal: appended messages as chat lines
/// (the scroll-to-latest analog) and fetch failures as a quiet notice.
fn print_events(rx: &mut broadcast::Receiver<WidgetEvent>) {
    while let Ok(event) = rx.try_recv() {
        match event {
            WidgetEvent::MessageAppended { entry } => match entry.speaker {
                Speaker::User => println!("  you: {}", entry.text),
                Speaker::Agent => println!("  bot: {}", entry.text),
            },
            WidgetEvent::FetchFailed { .. } => {
                println!("  (the assistant is unavailable right now)");
            }
            WidgetEvent::Opened { .. } | WidgetEvent::Closed | WidgetEvent::OptionsLoaded { .. } => {}
        }
    }
}

fn render_prompt(widget: &FaqWidget) {
    let snapshot = widget.snapshot();

    if !snapshot.is_open {
        println!("(widget closed — type 'open' to resume)");
        return;
    }

    if snapshot.pending_options.is_empty() {
        if snapshot.step == widget.max_step() && !snapshot.transcript.is_empty() {
            println!("That's everything I can suggest — thanks for chatting!");
        } else {
            println!("(no questions available right now)");
        }
        return;
    }

    println!();
    for (i, option) in snapshot.pending_options.iter().enumerate() {
        println!("  {}. {}", i + 1, option.question);
    }
}
