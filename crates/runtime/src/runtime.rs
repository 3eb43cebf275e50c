//! High-level runtime orchestrator.
//!
//! The runtime owns the round worker, wires up command/event channels, and
//! exposes a builder-based API for clients to play a round.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use game_core::{GameResult, RoundController, RoundPhase};

use crate::api::{Result, RuntimeError, RuntimeHandle, SelectionProvider};
use crate::content::RoundContent;
use crate::events::{Event, EventBus, ResultEvent, Topic};
use crate::leaderboard::Leaderboard;
use crate::repository::{FileResultRepository, ResultRepository, default_results_dir};
use crate::workers::{Command, ResultRecorder, RoundTimings, RoundWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Clock tick period (one second of round time per tick).
    pub tick_interval: Duration,
    /// How long two mismatched tiles stay face up.
    pub reveal_delay: Duration,
    /// Pause between the round ending and teardown.
    pub game_over_delay: Duration,
    /// Monster charge frame period.
    pub frame_interval: Duration,
    /// How often [`Runtime::run`] re-polls while it cannot select.
    pub poll_interval: Duration,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Name the result is stored under.
    pub player_name: String,
    /// Result directory; the platform data directory when unset.
    pub results_dir: Option<PathBuf>,
    /// Seed for layout choice and shuffling; entropy when unset.
    pub seed: Option<u64>,
}

impl RuntimeConfig {
    pub const DEFAULT_PLAYER_NAME: &'static str = "Player";
    const MIN_INTERVAL: Duration = Duration::from_millis(1);

    pub fn timings(&self) -> RoundTimings {
        RoundTimings {
            tick_interval: self.tick_interval.max(Self::MIN_INTERVAL),
            reveal_delay: self.reveal_delay,
            game_over_delay: self.game_over_delay,
            frame_interval: self.frame_interval.max(Self::MIN_INTERVAL),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            reveal_delay: Duration::from_millis(250),
            game_over_delay: Duration::from_secs(1),
            frame_interval: Duration::from_millis(16),
            poll_interval: Duration::from_millis(50),
            event_buffer_size: 100,
            command_buffer_size: 32,
            player_name: Self::DEFAULT_PLAYER_NAME.to_string(),
            results_dir: None,
            seed: None,
        }
    }
}

/// Main runtime that orchestrates one round
///
/// Design: Runtime owns the worker and coordinates the selection provider.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    // Shared handle (can be cloned for clients)
    handle: RuntimeHandle,

    // Selection provider (injected by user)
    provider: Option<Arc<dyn SelectionProvider>>,

    repository: Arc<dyn ResultRepository>,
    poll_interval: Duration,

    // Background worker
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to events from a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Repository results are recorded into.
    pub fn repository(&self) -> Arc<dyn ResultRepository> {
        Arc::clone(&self.repository)
    }

    /// Reads the leaderboard from the result repository.
    pub fn leaderboard(&self, limit: usize) -> Result<Leaderboard> {
        Ok(Leaderboard::load(self.repository.as_ref(), limit)?)
    }

    /// Asks the provider for one selection and submits it.
    ///
    /// Returns `Ok(false)` when nothing was submitted (the round is resolving,
    /// over, or the provider passed). A rejected click is logged and counts
    /// as submitted.
    pub async fn step(&self) -> Result<bool> {
        let provider = self.provider.as_ref().ok_or(RuntimeError::ProviderNotSet)?;

        let snapshot = self.handle.query_state().await?;
        if !matches!(
            snapshot.phase,
            RoundPhase::AwaitingFirstSelection | RoundPhase::AwaitingSecondSelection
        ) {
            return Ok(false);
        }

        let Some(index) = provider.next_selection(&snapshot).await? else {
            return Ok(false);
        };

        match self.handle.select_slot(index).await {
            Ok(outcome) => {
                debug!(index, ?outcome, "Provider selection applied");
                Ok(true)
            }
            Err(error) if error.is_rejected_selection() => {
                debug!(index, %error, "Provider selection rejected");
                Ok(true)
            }
            Err(error) => Err(error),
        }
    }

    /// Plays the round with the configured provider until it is torn down.
    ///
    /// Returns the recorded result, also when the round was already torn
    /// down before the call.
    pub async fn run(&self) -> Result<GameResult> {
        let mut results = self.handle.subscribe(Topic::Result);

        let snapshot = loop {
            if !self.step().await? {
                let snapshot = self.handle.query_state().await?;
                if snapshot.torn_down {
                    break snapshot;
                }
                tokio::time::sleep(self.poll_interval).await;
            }
        };

        // Teardown publishes before the worker answers the query above, so a
        // subscription taken in time already holds the event.
        loop {
            match results.try_recv() {
                Ok(Event::Result(event)) => {
                    if let ResultEvent::PersistFailed { error, .. } = &event {
                        warn!(%error, "Round finished but its result was not stored");
                    }
                    return Ok(*event.result());
                }
                Ok(_) => continue,
                Err(TryRecvError::Lagged(skipped)) => {
                    debug!(skipped, "Result subscriber lagged");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }

        debug!("Result published before subscription, reading it from the snapshot");
        snapshot.result.ok_or(RuntimeError::ResultUnavailable)
    }

    /// Set the selection provider
    pub fn set_provider(&mut self, provider: Arc<dyn SelectionProvider>) {
        self.provider = Some(provider);
    }

    /// Shutdown the runtime gracefully
    ///
    /// Waits for the worker to exit, which happens once every handle clone
    /// is dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    content: Option<RoundContent>,
    round: Option<RoundController>,
    provider: Option<Arc<dyn SelectionProvider>>,
    repository: Option<Arc<dyn ResultRepository>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            content: None,
            round: None,
            provider: None,
            repository: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Content to generate the round from (built-in content otherwise)
    pub fn content(mut self, content: RoundContent) -> Self {
        self.content = Some(content);
        self
    }

    /// Provide a ready-made round instead of generating one
    pub fn initial_round(mut self, round: RoundController) -> Self {
        self.round = Some(round);
        self
    }

    /// Set selection provider (optional)
    pub fn provider(mut self, provider: Arc<dyn SelectionProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Store results in `repository` instead of the results directory
    pub fn repository(mut self, repository: Arc<dyn ResultRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Build the runtime and start the round
    pub async fn build(self) -> Result<Runtime> {
        let round = match self.round {
            Some(round) => round,
            None => Self::generate_round(self.content.unwrap_or_default(), self.config.seed),
        };

        let repository: Arc<dyn ResultRepository> = match self.repository {
            Some(repository) => repository,
            None => {
                let dir = self
                    .config
                    .results_dir
                    .clone()
                    .unwrap_or_else(default_results_dir);
                Arc::new(FileResultRepository::new(dir)?)
            }
        };

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let recorder =
            ResultRecorder::new(self.config.player_name.clone(), Arc::clone(&repository));
        let worker = RoundWorker::new(
            round,
            self.config.timings(),
            command_rx,
            event_bus,
            recorder,
        );

        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Runtime {
            handle,
            provider: self.provider,
            repository,
            poll_interval: self.config.poll_interval,
            worker_handle,
        })
    }

    fn generate_round(content: RoundContent, seed: Option<u64>) -> RoundController {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let config = content.config.normalized();
        let layout = content.choose_layout(&mut rng);
        let round = RoundController::generate(&config, layout, content.payloads, &mut rng);

        if let Some(clamp) = round.board().clamp() {
            warn!(
                requested = clamp.requested,
                effective = clamp.effective,
                reason = ?clamp.reason,
                "Pair count clamped for this round"
            );
        }

        info!(
            rows = layout.rows,
            columns = layout.columns,
            pairs = round.board().effective_pairs(),
            monster = round.monster().name(),
            "Round generated"
        );

        round
    }
}
