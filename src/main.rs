//! Copycat - type your clipboard as keystrokes
//!
//! Run `copycat` to put it in the system tray. Press Ctrl+Alt+T to replay
//! the clipboard text into the focused window as synthesized keystrokes,
//! with Shift+Enter for embedded newlines.

mod app;
mod clipboard;
mod config;
mod error;
mod hotkey;
mod lock;
mod output;
mod tray;
mod typer;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "copycat")]
#[command(author, version, about = "Type your clipboard as keystrokes")]
#[command(long_about = "
Copycat sits in the system tray and waits for Ctrl+Alt+T. When pressed,
it reads the clipboard and types its text into the focused window as
synthesized keystrokes, sending Shift+Enter for embedded newlines so
chat applications insert a line break instead of submitting.

SETUP (Linux/Wayland):
  1. Install wtype, or ydotool plus its daemon:
     systemctl --user enable --now ydotool
  2. Install wl-clipboard (wl-paste) or xclip
  3. Run: copycat

SETUP (macOS):
  Grant Accessibility permission to your terminal in System Settings >
  Privacy & Security > Accessibility.

Only one instance runs at a time; a second launch exits quietly.
")]
struct Cli {
    /// Increase verbosity (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("copycat={},warn", log_level))),
        )
        .with_target(false)
        .init();

    let config = config::Config::default();

    // Single-instance gate. Losing the race is a normal outcome: the
    // running instance keeps serving, this one exits cleanly.
    let lock_path = config::Config::lock_path();
    let mut lock = lock::InstanceLock::at(&lock_path);
    if !lock.acquire() {
        tracing::info!(
            "Another copycat instance is already running ({}), exiting",
            lock_path.display()
        );
        return Ok(());
    }

    tracing::info!("Starting copycat, hotkey: {}", config.hotkey.chord);

    let pipeline = typer::ClipboardTyper::new(&config.typing);
    let _listener = hotkey::spawn(&config.hotkey, move || {
        pipeline.type_clipboard();
    })
    .map_err(error::CopycatError::from)?;

    // Runs the tray event loop on the main thread; never returns.
    tray::run(app::App::new(config, lock))
}
