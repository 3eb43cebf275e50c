//! Round worker that owns the authoritative [`RoundController`].
//!
//! Receives commands from [`crate::RuntimeHandle`], drives the clock tick,
//! the monster frame loop and the two delayed steps (mismatch reveal and
//! game-over teardown), and publishes every round event to the EventBus.

use std::future;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use game_core::{
    GameError, GameOverReason, RoundController, RoundEvent, RoundSnapshot, SelectionOutcome,
};

use crate::api::{Result, RuntimeError};
use crate::events::{Event, EventBus};
use crate::workers::ResultRecorder;

/// Commands that can be sent to the round worker
pub enum Command {
    /// Click a tile.
    SelectSlot {
        index: usize,
        reply: oneshot::Sender<Result<SelectionOutcome>>,
    },
    /// Query the current round state (read-only).
    QueryState { reply: oneshot::Sender<RoundSnapshot> },
}

/// Timer periods used by the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTimings {
    pub tick_interval: Duration,
    pub reveal_delay: Duration,
    pub game_over_delay: Duration,
    pub frame_interval: Duration,
}

/// Background task that owns one round.
///
/// # Timers
///
/// All timers are branches of a single `select!`, so they never block each
/// other and a command is never handled while a timer handler runs:
///
/// - clock tick (`tick_interval`)
/// - monster frame (`frame_interval`), feeding measured elapsed time
/// - mismatch deadline, armed when two different tiles are face up
/// - game-over deadline, armed once when the round ends
///
/// Teardown disarms all of them at once; afterwards only commands are
/// served.
pub struct RoundWorker {
    controller: RoundController,
    timings: RoundTimings,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    recorder: ResultRecorder,
    running: bool,
    mismatch_deadline: Option<Instant>,
    game_over_deadline: Option<Instant>,
    pending_game_over: Option<GameOverReason>,
}

impl RoundWorker {
    /// Creates a new round worker.
    pub fn new(
        controller: RoundController,
        timings: RoundTimings,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        recorder: ResultRecorder,
    ) -> Self {
        info!(
            target: "runtime::worker",
            slots = controller.board().len(),
            effective_pairs = controller.board().effective_pairs(),
            monster_health = controller.monster().health().maximum(),
            player = recorder.player(),
            "RoundWorker initialized"
        );

        Self {
            controller,
            timings,
            command_rx,
            event_bus,
            recorder,
            running: true,
            mismatch_deadline: None,
            game_over_deadline: None,
            pending_game_over: None,
        }
    }

    /// Main worker loop. Returns once every command sender is dropped.
    pub async fn run(mut self) {
        self.publish(self.controller.started_event());

        let start = Instant::now();
        let mut tick = time::interval_at(
            start + self.timings.tick_interval,
            self.timings.tick_interval,
        );
        let mut frame = time::interval_at(
            start + self.timings.frame_interval,
            self.timings.frame_interval,
        );
        frame.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last_frame = start;

        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
                _ = tick.tick(), if self.running => {
                    self.handle_tick();
                }
                now = frame.tick(), if self.running => {
                    let elapsed = now.saturating_duration_since(last_frame);
                    last_frame = now;
                    self.handle_frame(elapsed);
                }
                _ = wait_until(self.mismatch_deadline) => {
                    self.mismatch_deadline = None;
                    self.handle_mismatch_elapsed();
                }
                _ = wait_until(self.game_over_deadline) => {
                    self.game_over_deadline = None;
                    self.teardown();
                }
            }
        }

        debug!(target: "runtime::worker", "Command channel closed, RoundWorker exiting");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::SelectSlot { index, reply } => {
                let result = self.handle_selection(index);
                if reply.send(result).is_err() {
                    debug!("SelectSlot reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.controller.snapshot()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn handle_selection(&mut self, index: usize) -> Result<SelectionOutcome> {
        match self.controller.select_slot(index) {
            Ok(report) => {
                debug!(
                    target: "runtime::worker",
                    index,
                    outcome = ?report.outcome,
                    clicks = self.controller.stats().total_clicks,
                    "Selection accepted"
                );
                if report.outcome == SelectionOutcome::MismatchPending {
                    self.mismatch_deadline = Some(Instant::now() + self.timings.reveal_delay);
                }
                self.dispatch(report.events);
                Ok(report.outcome)
            }
            Err(error) => {
                debug!(
                    target: "runtime::worker",
                    index,
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    "Selection rejected"
                );
                Err(RuntimeError::Selection(error))
            }
        }
    }

    fn handle_tick(&mut self) {
        if let Some(event) = self.controller.tick() {
            self.publish(event);
        }
    }

    fn handle_frame(&mut self, elapsed: Duration) {
        let events = self.controller.monster_charge(elapsed);
        self.dispatch(events);
    }

    fn handle_mismatch_elapsed(&mut self) {
        match self.controller.finish_mismatch() {
            Ok(events) => self.dispatch(events),
            Err(error) => {
                error!(
                    target: "runtime::worker",
                    code = error.error_code(),
                    %error,
                    "Failed to cover mismatched tiles"
                );
            }
        }
    }

    /// Publishes events, holding back game over until teardown.
    fn dispatch(&mut self, events: Vec<RoundEvent>) {
        for event in events {
            match event.game_over_reason() {
                Some(reason) => self.arm_game_over(reason),
                None => self.publish(event),
            }
        }
    }

    fn arm_game_over(&mut self, reason: GameOverReason) {
        if self.pending_game_over.is_some() || !self.running {
            return;
        }
        info!(
            target: "runtime::worker",
            %reason,
            delay_ms = self.timings.game_over_delay.as_millis() as u64,
            "Round over, teardown scheduled"
        );
        self.pending_game_over = Some(reason);
        self.game_over_deadline = Some(Instant::now() + self.timings.game_over_delay);
    }

    /// Stops every timer, records the result and announces game over.
    fn teardown(&mut self) {
        self.running = false;
        self.mismatch_deadline = None;
        self.game_over_deadline = None;

        let Some(result) = self.controller.teardown() else {
            return;
        };

        if let Some(reason) = self.pending_game_over {
            self.publish(RoundEvent::GameOver { reason });
        }

        let recorded = self.recorder.record(result);
        self.event_bus.publish(Event::Result(recorded));
    }

    fn publish(&self, event: RoundEvent) {
        debug!(target: "runtime::worker", kind = event.kind(), "Publishing round event");
        self.event_bus.publish(Event::Round(event));
    }
}

/// Sleeps until `deadline`, or forever when there is none.
async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => future::pending().await,
    }
}
