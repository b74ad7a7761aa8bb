//! Timer-driven tick loop
//!
//! Multiplexes a fixed-period timer with a control channel. Each timer
//! event while running steps the session and pushes a snapshot to the sink.

use std::str::FromStr;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

use crate::core::error::{EngineError, Result};
use crate::driver::output::Snapshot;
use crate::driver::session::Session;
use crate::simulation::Stimulus;

/// Control input from the display layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetStimulus(Stimulus),
    Start,
    Pause,
    Toggle,
    Reset,
    /// Single manual tick, allowed while paused
    Step,
    Quit,
}

impl Command {
    /// Parse a console line; bare stimulus names select that stimulus
    pub fn parse(line: &str) -> Result<Self> {
        let trimmed = line.trim();
        let command = match trimmed.to_ascii_lowercase().as_str() {
            "run" | "start" => Self::Start,
            "pause" | "stop" => Self::Pause,
            "toggle" | "p" => Self::Toggle,
            "reset" | "r" => Self::Reset,
            "step" | "tick" | "t" => Self::Step,
            "quit" | "q" | "exit" => Self::Quit,
            _ => match Stimulus::from_str(trimmed) {
                Ok(stimulus) => Self::SetStimulus(stimulus),
                Err(_) => return Err(EngineError::UnknownCommand(trimmed.to_string())),
            },
        };
        Ok(command)
    }
}

/// Receives everything the display layer needs to redraw
pub trait DisplaySink {
    /// A new tick was produced
    fn on_tick(&mut self, snapshot: &Snapshot);

    /// A command changed session state without producing a tick
    fn on_command(&mut self, _command: Command, _snapshot: &Snapshot) {}
}

/// Drive `session` until `Quit` arrives or every command sender is dropped.
///
/// Starting the run or changing the stimulus while running restarts the
/// period, so the first tick after either lands one full period later.
pub async fn run<S: DisplaySink + ?Sized>(
    mut session: Session,
    mut commands: mpsc::Receiver<Command>,
    sink: &mut S,
    period: Duration,
) -> Session {
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick of a tokio interval completes immediately.
    ticker.tick().await;

    tracing::info!(
        "Tick loop started: period {}ms, {}",
        period.as_millis(),
        if session.is_running() { "running" } else { "paused" }
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if session.on_timer().is_some() {
                    sink.on_tick(&session.snapshot());
                }
            }
            incoming = commands.recv() => match incoming {
                Some(Command::Quit) | None => break,
                Some(Command::Step) => {
                    session.advance();
                    sink.on_tick(&session.snapshot());
                }
                Some(command) => {
                    apply(&mut session, &mut ticker, command);
                    sink.on_command(command, &session.snapshot());
                }
            },
        }
    }

    tracing::info!("Tick loop stopped at tick {}", session.latest().tick);
    session
}

fn apply(session: &mut Session, ticker: &mut time::Interval, command: Command) {
    match command {
        Command::Start => {
            session.start();
            ticker.reset();
        }
        Command::Pause => session.pause(),
        Command::Toggle => {
            if session.toggle_running() {
                ticker.reset();
            }
        }
        Command::Reset => session.reset(),
        Command::SetStimulus(stimulus) => {
            session.set_stimulus(stimulus);
            if session.is_running() {
                ticker.reset();
            }
        }
        Command::Step | Command::Quit => {}
    }
}
