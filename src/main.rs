//! splitstick - replay recorded pointer traces through the dual-zone tracker
//!
//! Reads a JSON pointer trace (file or stdin), feeds it through a
//! [`SplitJoystick`](splitstick::SplitJoystick), prints every axis change
//! and a summary line.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use splitstick::config::ReplayConfig;
use splitstick::replay::{replay, Trace};

#[derive(Parser, Debug)]
#[command(name = "splitstick")]
#[command(about = "Replay multi-touch pointer traces through the split virtual joystick", long_about = None)]
struct Args {
    /// Pointer trace to replay (JSON); reads stdin when omitted
    trace: Option<PathBuf>,

    /// Config file with surface dimensions (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the surface width
    #[arg(long)]
    width: Option<i32>,

    /// Override the surface height
    #[arg(long)]
    height: Option<i32>,

    /// Enable verbose debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    // Set up panic hook to log panics before crashing
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: {}", panic_info);
        if let Ok(home) = std::env::var("HOME") {
            let crash_log = format!("{}/.local/state/splitstick/crash.log", home);
            if let Ok(mut f) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&crash_log)
            {
                use std::io::Write;
                let _ = writeln!(f, "[{}] PANIC: {}", chrono::Local::now(), panic_info);
            }
        }
    }));

    // Log directory (~/.local/state/splitstick or /tmp/splitstick)
    let log_dir = std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .or_else(|_| std::env::var("HOME").map(|h| PathBuf::from(h).join(".local/state")))
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
        .join("splitstick");

    std::fs::create_dir_all(&log_dir).ok();

    let args = Args::parse();

    // File appender - rotates daily
    let file_appender = rolling::daily(&log_dir, "splitstick.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    // Quiet by default, verbose with --debug
    let default_filter = if args.debug {
        "debug,splitstick=debug"
    } else {
        "warn,splitstick=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    let trace = match &args.trace {
        Some(path) => {
            Trace::load(path).with_context(|| format!("loading trace {}", path.display()))?
        }
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("reading trace from stdin")?;
            Trace::parse(&raw).context("parsing trace from stdin")?
        }
    };

    let config = match &args.config {
        Some(path) => {
            ReplayConfig::load(path).with_context(|| format!("loading config {}", path.display()))?
        }
        None => ReplayConfig::default(),
    };

    // CLI overrides beat the trace header, which beats the config file.
    let mut surface = trace.surface.unwrap_or(config.surface);
    if let Some(width) = args.width {
        surface.width = width;
    }
    if let Some(height) = args.height {
        surface.height = height;
    }

    info!(
        width = surface.width,
        height = surface.height,
        events = trace.events.len(),
        "replaying trace"
    );

    let report = replay(&trace, surface)?;

    for (axis, force) in &report.changes {
        println!("{axis} {force:.3}");
    }
    println!(
        "{} events, {} unhandled, {} changes, final vertical {:.3}, final horizontal {:.3}",
        report.dispatched,
        report.unhandled,
        report.changes.len(),
        report.final_vertical,
        report.final_horizontal
    );

    Ok(())
}
