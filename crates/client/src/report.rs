//! Plain-text output of the round and the leaderboard.
use game_core::{GameResult, RoundEvent, RoundSnapshot, format_clock};
use runtime::{Event, Leaderboard};
use tokio::sync::broadcast::{self, error::RecvError};

pub fn print_round_header(snapshot: &RoundSnapshot) {
    println!(
        "{}x{} grid, {} pairs. {} has {} HP, you have {} HP.",
        snapshot.layout.rows,
        snapshot.layout.columns,
        snapshot.effective_pairs,
        snapshot.monster.name,
        snapshot.monster.max_health,
        snapshot.player_max_health,
    );
}

/// Prints combat events until the channel closes or the task is aborted.
pub async fn print_combat(mut rx: broadcast::Receiver<Event>) {
    loop {
        let event = match rx.recv().await {
            Ok(Event::Round(event)) => event,
            Ok(Event::Result(_)) => continue,
            Err(RecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "Combat log lagged");
                continue;
            }
            Err(RecvError::Closed) => break,
        };

        match event {
            RoundEvent::PairHit { payload, .. } => {
                println!("  pair: {} ({} damage)", payload.name, payload.damage)
            }
            RoundEvent::MonsterDamaged { remaining, .. } => {
                println!("  monster HP {remaining}")
            }
            RoundEvent::MonsterDefeated => println!("  monster defeated!"),
            RoundEvent::PlayerDamaged { amount, remaining } => {
                println!("  monster hits for {amount}, your HP {remaining}")
            }
            RoundEvent::PlayerDefeated => println!("  you were defeated"),
            _ => {}
        }
    }
}

pub fn print_result(player: &str, result: &GameResult) {
    println!(
        "{player}: {} pairs, {} clicks, {} - score {}",
        result.pairs_found,
        result.total_clicks,
        format_clock(result.elapsed_secs),
        result.score,
    );
}

pub fn print_leaderboard(leaderboard: &Leaderboard) {
    println!();
    println!("{:>4}  {:<16} {:>6}", "rank", "player", "score");
    for entry in leaderboard.entries() {
        println!("{:>4}  {:<16} {:>6}", entry.rank, entry.player, entry.score);
    }
}
