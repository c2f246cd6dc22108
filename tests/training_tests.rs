//! Tests for the training pipeline

use std::sync::{Arc, Mutex};

use hexapawn::{
    DecisionEngine, Error, StrategyTable, Victory,
    hexapawn::MoveRecord,
    pipeline::{
        GreedyOpponent, MetricsObserver, Observer, RandomOpponent, ScriptedOpponent,
        TrainingConfig, TrainingPipeline,
    },
    types::Relocation,
};

/// Records every event so tests can check the order observers see.
#[derive(Default)]
struct EventLog {
    events: Arc<Mutex<Vec<String>>>,
}

impl Observer for EventLog {
    fn on_training_start(&mut self, total_games: usize) -> hexapawn::Result<()> {
        self.events.lock().unwrap().push(format!("start {total_games}"));
        Ok(())
    }

    fn on_game_start(&mut self, game_num: usize) -> hexapawn::Result<()> {
        self.events.lock().unwrap().push(format!("game {game_num}"));
        Ok(())
    }

    fn on_move(&mut self, _game_num: usize, step_num: usize, record: &MoveRecord) -> hexapawn::Result<()> {
        self.events
            .lock()
            .unwrap()
            .push(format!("move {step_num} {}", record.side));
        Ok(())
    }

    fn on_prune(&mut self, game_num: usize, relocation: Relocation) -> hexapawn::Result<()> {
        self.events
            .lock()
            .unwrap()
            .push(format!("prune {game_num} {relocation}"));
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: Victory) -> hexapawn::Result<()> {
        self.events
            .lock()
            .unwrap()
            .push(format!("end {game_num} {}", outcome.winner));
        Ok(())
    }

    fn on_training_end(&mut self) -> hexapawn::Result<()> {
        self.events.lock().unwrap().push("done".to_string());
        Ok(())
    }
}

#[test]
fn test_training_against_random_opponent() {
    let mut engine = DecisionEngine::new(None);
    let mut opponent = RandomOpponent::new("random");
    let result = TrainingPipeline::new(TrainingConfig {
        num_games: 300,
        seed: Some(42),
        window: 50,
    })
    .with_observer(Box::new(MetricsObserver::new()))
    .run(&mut engine, &mut opponent)
    .unwrap();

    assert_eq!(result.total_games, 300);
    assert_eq!(result.wins + result.losses, 300);
    assert!(result.recent_losses <= 50);
    assert!(result.win_rate() >= 0.0 && result.win_rate() <= 1.0);
    assert_eq!(
        engine.table().candidate_count(),
        StrategyTable::standard().candidate_count() - result.pruned
    );
}

#[test]
fn test_losses_against_greedy_opponent_prune_the_table() {
    let mut engine = DecisionEngine::new(None);
    let mut opponent = GreedyOpponent::new("greedy");
    let result = TrainingPipeline::new(TrainingConfig {
        num_games: 200,
        seed: Some(3),
        window: 50,
    })
    .run(&mut engine, &mut opponent)
    .unwrap();

    assert!(result.losses >= result.pruned);
    assert_eq!(
        engine.table().candidate_count(),
        StrategyTable::standard().candidate_count() - result.pruned
    );
    if result.losses > 0 {
        assert!(result.last_loss.is_some());
    }
}

#[test]
fn test_observer_sees_events_until_illegal_move() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let mut engine = DecisionEngine::new(None);
    // The second scripted move is blocked or its pawn is gone, whatever A replies.
    let mut opponent = ScriptedOpponent::new(
        "script",
        vec![Relocation::from_raw(1, 4), Relocation::from_raw(4, 7)],
    );

    let outcome = TrainingPipeline::new(TrainingConfig {
        num_games: 1,
        seed: Some(0),
        window: 1,
    })
    .with_observer(Box::new(EventLog {
        events: Arc::clone(&events),
    }))
    .run(&mut engine, &mut opponent);

    let events = events.lock().unwrap();
    assert_eq!(events.first().map(String::as_str), Some("start 1"));
    assert_eq!(events.get(1).map(String::as_str), Some("game 0"));
    assert_eq!(events.get(2).map(String::as_str), Some("move 0 H"));
    assert_eq!(events.get(3).map(String::as_str), Some("move 1 A"));
    assert_eq!(events.len(), 4);
    assert!(matches!(outcome, Err(Error::IllegalMove { .. })));
}
