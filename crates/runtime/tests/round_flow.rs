//! End-to-end round tests on a paused tokio clock.
//!
//! With `start_paused`, tokio jumps straight to the next timer whenever the
//! runtime is idle, so the reveal delay, the monster timer and the game-over
//! delay all elapse instantly and deterministically.

use std::sync::Arc;
use std::time::Duration;

use game_core::{
    Board, EffectTag, GameConfig, GameOverReason, GridLayout, PairingAssignment, PayloadId,
    PayloadPool, RoundController, RoundEvent, RoundPhase, SelectionError, SelectionOutcome,
    SlotPayload, SlotState,
};
use runtime::{
    BotKind, Event, InMemoryResultRepo, ResultEvent, ResultRepository, Runtime, RuntimeConfig,
    RuntimeError, Topic,
};

/// 4x3 board with four damage-1 pairs at (0,1) (2,3) (4,5) (6,7).
fn fixed_round(config: &GameConfig) -> RoundController {
    let pool: PayloadPool = (0..4)
        .map(|i| SlotPayload::new(format!("p{i}"), 1, EffectTag::Hit))
        .collect();
    let mut entries: Vec<Option<PayloadId>> = (0..4u32)
        .flat_map(|id| [Some(PayloadId(id)), Some(PayloadId(id))])
        .collect();
    entries.resize(12, None);

    let board = Board::from_assignment(
        pool,
        PairingAssignment {
            entries,
            effective_pairs: 4,
            clamp: None,
        },
    );
    RoundController::new(config, GridLayout::new(4, 3, 4), board)
}

fn test_config() -> RuntimeConfig {
    RuntimeConfig {
        player_name: "Tester".into(),
        ..RuntimeConfig::default()
    }
}

#[tokio::test(start_paused = true)]
async fn finding_every_pair_records_the_result_after_the_delay() {
    let repo = Arc::new(InMemoryResultRepo::new());
    let runtime = Runtime::builder()
        .config(test_config())
        .initial_round(fixed_round(&GameConfig::default()))
        .repository(repo.clone())
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let mut round_rx = handle.subscribe(Topic::Round);
    let mut combat_rx = handle.subscribe(Topic::Combat);
    let mut result_rx = handle.subscribe(Topic::Result);

    let snapshot = handle.query_state().await.unwrap();
    assert_eq!(snapshot.monster.max_health, 4);
    assert_eq!(snapshot.effective_pairs, 4);

    for pair in 0..4 {
        assert_eq!(
            handle.select_slot(pair * 2).await.unwrap(),
            SelectionOutcome::FirstRevealed
        );
        assert_eq!(
            handle.select_slot(pair * 2 + 1).await.unwrap(),
            SelectionOutcome::Matched
        );
    }

    // Over, but not torn down until the game-over delay elapses.
    let snapshot = handle.query_state().await.unwrap();
    assert_eq!(snapshot.phase, RoundPhase::GameOver);
    assert_eq!(snapshot.stats.pairs_found, 4);
    assert!(!snapshot.torn_down);
    assert!(matches!(
        handle.select_slot(8).await,
        Err(RuntimeError::Selection(SelectionError::RoundOver))
    ));

    let Event::Result(ResultEvent::Recorded { player, result }) = result_rx.recv().await.unwrap()
    else {
        panic!("expected a recorded result");
    };
    assert_eq!(player, "Tester");
    assert_eq!(result.pairs_found, 4);
    assert_eq!(result.total_clicks, 9);
    assert_eq!(repo.load("Tester").unwrap(), Some(result));

    let snapshot = handle.query_state().await.unwrap();
    assert!(snapshot.torn_down);
    assert!(!snapshot.monster.active);

    let mut game_overs = Vec::new();
    while let Ok(event) = round_rx.try_recv() {
        if let Event::Round(RoundEvent::GameOver { reason }) = event {
            game_overs.push(reason);
        }
    }
    assert_eq!(game_overs, vec![GameOverReason::AllPairsFound]);

    let mut hits = 0;
    let mut monster_deaths = 0;
    while let Ok(event) = combat_rx.try_recv() {
        match event {
            Event::Round(RoundEvent::PairHit { payload, .. }) => {
                assert_eq!(payload.effect, EffectTag::Hit);
                hits += 1;
            }
            Event::Round(RoundEvent::MonsterDefeated) => monster_deaths += 1,
            _ => {}
        }
    }
    assert_eq!(hits, 4);
    assert_eq!(monster_deaths, 1);
}

#[tokio::test(start_paused = true)]
async fn mismatch_stays_visible_for_the_reveal_delay() {
    let runtime = Runtime::builder()
        .config(test_config())
        .initial_round(fixed_round(&GameConfig::default()))
        .repository(Arc::new(InMemoryResultRepo::new()))
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let mut round_rx = handle.subscribe(Topic::Round);

    handle.select_slot(0).await.unwrap();
    assert_eq!(
        handle.select_slot(2).await.unwrap(),
        SelectionOutcome::MismatchPending
    );

    // Clicks during the reveal window are counted but change nothing.
    let rejected = handle.select_slot(1).await.unwrap_err();
    assert!(matches!(
        rejected,
        RuntimeError::Selection(SelectionError::ResolutionInProgress)
    ));
    assert!(rejected.is_rejected_selection());

    let snapshot = handle.query_state().await.unwrap();
    assert_eq!(snapshot.phase, RoundPhase::Resolving);
    assert_eq!(snapshot.slots[1].state, SlotState::Covered);
    assert_eq!(snapshot.slots[2].state, SlotState::Revealed);
    assert_eq!(snapshot.stats.total_clicks, 3);

    tokio::time::sleep(Duration::from_millis(300)).await;

    let snapshot = handle.query_state().await.unwrap();
    assert_eq!(snapshot.phase, RoundPhase::AwaitingFirstSelection);
    assert_eq!(snapshot.slots[0].state, SlotState::Covered);
    assert_eq!(snapshot.slots[2].state, SlotState::Covered);

    let mut covered = false;
    while let Ok(event) = round_rx.try_recv() {
        covered |= matches!(
            event,
            Event::Round(RoundEvent::SlotsCovered {
                first: 0,
                second: 2
            })
        );
    }
    assert!(covered);

    // The next attempt resolves on its own.
    handle.select_slot(2).await.unwrap();
    assert_eq!(
        handle.select_slot(3).await.unwrap(),
        SelectionOutcome::Matched
    );
}

#[tokio::test(start_paused = true)]
async fn monster_defeats_player_and_teardown_stops_every_timer() {
    let config = GameConfig::default()
        .with_player_max_health(2)
        .with_monster(2, Duration::from_secs(1));
    let repo = Arc::new(InMemoryResultRepo::new());
    let runtime = Runtime::builder()
        .config(test_config())
        .initial_round(fixed_round(&config))
        .repository(repo.clone())
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();

    tokio::time::sleep(Duration::from_millis(1_100)).await;
    let snapshot = handle.query_state().await.unwrap();
    assert_eq!(snapshot.player_health, 0);
    assert_eq!(snapshot.game_over, Some(GameOverReason::PlayerDefeated));
    assert!(!snapshot.torn_down);

    tokio::time::sleep(Duration::from_secs(1)).await;
    let torn_down = handle.query_state().await.unwrap();
    assert!(torn_down.torn_down);
    assert_eq!(repo.load("Tester").unwrap().map(|r| r.pairs_found), Some(0));

    // Nothing moves after teardown.
    tokio::time::sleep(Duration::from_secs(5)).await;
    let later = handle.query_state().await.unwrap();
    assert_eq!(later.stats.elapsed_secs, torn_down.stats.elapsed_secs);
    assert_eq!(later.monster.charge_progress, 0.0);
    assert!(matches!(
        handle.select_slot(0).await,
        Err(RuntimeError::Selection(SelectionError::RoundOver))
    ));
}

#[tokio::test(start_paused = true)]
async fn run_returns_the_result_of_a_round_already_torn_down() {
    let config = GameConfig::default()
        .with_player_max_health(2)
        .with_monster(2, Duration::from_secs(1));
    let repo = Arc::new(InMemoryResultRepo::new());
    let runtime = Runtime::builder()
        .config(test_config())
        .initial_round(fixed_round(&config))
        .provider(BotKind::Memory.build(None))
        .repository(repo.clone())
        .build()
        .await
        .unwrap();

    // The monster wins before anyone asks for the result.
    tokio::time::sleep(Duration::from_secs(5)).await;
    let snapshot = runtime.handle().query_state().await.unwrap();
    assert!(snapshot.torn_down);
    assert!(snapshot.result.is_some());

    let result = tokio::time::timeout(Duration::from_secs(60), runtime.run())
        .await
        .expect("run returns once the round is torn down")
        .unwrap();

    assert_eq!(Some(result), snapshot.result);
    assert_eq!(result.pairs_found, 0);
    assert_eq!(repo.load("Tester").unwrap(), Some(result));
}

#[tokio::test(start_paused = true)]
async fn clock_ticks_once_per_second() {
    let runtime = Runtime::builder()
        .config(test_config())
        .initial_round(fixed_round(&GameConfig::default()))
        .repository(Arc::new(InMemoryResultRepo::new()))
        .build()
        .await
        .unwrap();
    let mut clock_rx = runtime.subscribe(Topic::Clock);

    handle_two_pairs(&runtime).await;

    let mut ticks = Vec::new();
    while ticks.len() < 3 {
        if let Event::Round(RoundEvent::Tick {
            elapsed_secs,
            clock,
            score,
        }) = clock_rx.recv().await.unwrap()
        {
            ticks.push((elapsed_secs, clock, score));
        }
    }

    // Two pairs in four clicks: 200 - 8 - elapsed.
    assert_eq!(
        ticks,
        vec![
            (1, "00:01".to_string(), 191),
            (2, "00:02".to_string(), 190),
            (3, "00:03".to_string(), 189),
        ]
    );
}

async fn handle_two_pairs(runtime: &Runtime) {
    let handle = runtime.handle();
    for index in 0..4 {
        handle.select_slot(index).await.unwrap();
    }
}

#[tokio::test(start_paused = true)]
async fn memory_bot_plays_a_generated_round_to_the_end() {
    let results_dir = tempfile::tempdir().unwrap();
    let config = RuntimeConfig {
        player_name: "Bot".into(),
        results_dir: Some(results_dir.path().to_path_buf()),
        seed: Some(7),
        ..RuntimeConfig::default()
    };

    let runtime = Runtime::builder()
        .config(config)
        .provider(BotKind::Memory.build(None))
        .build()
        .await
        .unwrap();

    let result = runtime.run().await.unwrap();
    assert_eq!(result.pairs_found, 4);
    assert!(results_dir.path().join("RESULTSBot.json").exists());

    let leaderboard = runtime.leaderboard(6).unwrap();
    assert_eq!(leaderboard.len(), 1);
    assert_eq!(leaderboard.entries()[0].rank, 1);
    assert_eq!(leaderboard.entries()[0].player, "Bot");
    assert_eq!(leaderboard.entries()[0].score, result.score);

    runtime.shutdown().await.unwrap();
}
