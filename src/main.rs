//! Endocrine Loop - Entry Point
//!
//! Headless mode (`--ticks N`) runs a fixed number of ticks and prints the
//! result. Otherwise commands are read from stdin and the session ticks on a
//! timer until `quit`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use endocrine_loop::driver::scheduler;
use endocrine_loop::{Command, DisplaySink, EngineConfig, Language, Result, Session, Snapshot, Stimulus};

/// Three-tier endocrine feedback loop simulator
#[derive(Parser, Debug)]
#[command(name = "endocrine-loop")]
#[command(about = "Simulate upstream/intermediate/effector hormone feedback with diagnostics")]
struct Args {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial stimulus: normal, cold or hot
    #[arg(long)]
    stimulus: Option<Stimulus>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between ticks in interactive mode
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Report language: en or zh
    #[arg(long)]
    lang: Option<Language>,

    /// Run this many ticks headless and exit
    #[arg(long)]
    ticks: Option<u64>,

    /// Output format for headless runs
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Prints every snapshot to stdout
struct ConsoleSink {
    language: Language,
    placeholder: &'static str,
}

impl ConsoleSink {
    fn print(&self, snapshot: &Snapshot) {
        println!("{}", snapshot.to_text(self.language));
        if snapshot.report.is_empty() {
            println!("  {}", self.placeholder);
        } else {
            println!("  {}", snapshot.report);
        }
    }
}

impl DisplaySink for ConsoleSink {
    fn on_tick(&mut self, snapshot: &Snapshot) {
        self.print(snapshot);
    }

    fn on_command(&mut self, command: Command, snapshot: &Snapshot) {
        println!("[{:?}] {}", command, if snapshot.running { "running" } else { "paused" });
        if matches!(command, Command::Reset) {
            self.print(snapshot);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;
    tracing::info!(
        "Endocrine loop starting: stimulus {}, language {}, seed {:?}",
        config.stimulus,
        config.language,
        config.seed
    );

    match args.ticks {
        Some(ticks) => run_headless(&config, ticks, args.format),
        None => run_interactive(config).await,
    }
}

fn build_config(args: &Args) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(stimulus) = args.stimulus {
        config.stimulus = stimulus;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(interval) = args.interval_ms {
        config.tick_interval_ms = interval;
    }
    if let Some(language) = args.lang {
        config.language = language;
    }
    config.validate()?;
    Ok(config)
}

fn run_headless(config: &EngineConfig, ticks: u64, format: OutputFormat) -> Result<()> {
    let mut session = Session::new(config);
    session.start();
    let sink = ConsoleSink {
        language: config.language,
        placeholder: session.generator().placeholder(),
    };

    for _ in 0..ticks {
        session.advance();
        if format == OutputFormat::Text {
            sink.print(&session.snapshot());
        }
    }

    let summary = session.summary();
    match format {
        OutputFormat::Json => println!("{}", summary.to_json()?),
        OutputFormat::Text => println!("\n{}", summary.summary()),
    }
    Ok(())
}

async fn run_interactive(config: EngineConfig) -> Result<()> {
    let session = Session::new(&config);
    let mut sink = ConsoleSink {
        language: config.language,
        placeholder: session.generator().placeholder(),
    };

    println!("\n=== ENDOCRINE FEEDBACK LOOP ===");
    println!("Commands:");
    println!("  run / pause / toggle  - Start or stop the timer");
    println!("  step / t              - Advance one tick manually");
    println!("  normal / cold / hot   - Select the stimulus");
    println!("  reset / r             - Back to tick 0 (pauses)");
    println!("  quit / q              - Exit");
    println!();
    sink.print(&session.snapshot());

    let (tx, rx) = mpsc::channel(16);
    let input = tokio::spawn(read_commands(tx));

    let session = scheduler::run(session, rx, &mut sink, config.tick_interval()).await;
    if let Some(failure) = stop_input(input).await {
        tracing::warn!("Command input failed: {}", failure);
    }

    println!("\n{}", session.summary().summary());
    Ok(())
}

/// Stop the stdin reader and surface how it ended, if it failed
///
/// Aborting a task that already finished keeps its result.
async fn stop_input(input: JoinHandle<Result<()>>) -> Option<String> {
    input.abort();
    match input.await {
        Ok(Err(e)) => Some(e.to_string()),
        Err(e) if !e.is_cancelled() => Some(e.to_string()),
        _ => None,
    }
}

async fn read_commands(tx: mpsc::Sender<Command>) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match Command::parse(&line) {
            Ok(command) => {
                let quit = command == Command::Quit;
                if tx.send(command).await.is_err() || quit {
                    break;
                }
            }
            Err(e) => tracing::warn!("{}", e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use endocrine_loop::EngineError;

    #[tokio::test]
    async fn test_stop_input_reports_reader_error() {
        let input = tokio::spawn(async {
            Err::<(), _>(EngineError::UnknownCommand("stdin closed badly".into()))
        });
        while !input.is_finished() {
            tokio::task::yield_now().await;
        }
        let failure = stop_input(input).await.unwrap();
        assert!(failure.contains("stdin closed badly"));
    }

    #[tokio::test]
    async fn test_stop_input_quiet_on_clean_exit_or_cancel() {
        let done = tokio::spawn(async { Ok::<(), EngineError>(()) });
        while !done.is_finished() {
            tokio::task::yield_now().await;
        }
        assert_eq!(stop_input(done).await, None);

        let pending = tokio::spawn(std::future::pending::<Result<()>>());
        assert_eq!(stop_input(pending).await, None);
    }
}
