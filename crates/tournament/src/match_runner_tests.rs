use super::*;
use classical_engine::ClassicalEngine;
use random_engine::RandomEngine;

#[test]
fn test_self_play() {
    let mut engine1 = ClassicalEngine::new();
    let mut engine2 = ClassicalEngine::new();

    let config = MatchConfig {
        num_games: 2,
        depth: 2,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let results = runner.run_match(&mut engine1, &mut engine2);

    assert_eq!(results.result.total_games(), 2);
    assert_eq!(results.games.len(), 2);
    assert!(results.games[0].engine1_black);
    assert!(!results.games[1].engine1_black);
    // Deterministic engines replay the same game with colors swapped.
    assert_eq!(results.games[0].moves, results.games[1].moves);
    assert_eq!(results.games[0].result, results.games[1].result.flipped());
}

#[test]
fn test_games_run_to_completion() {
    let mut engine1 = RandomEngine::with_seed(1);
    let mut engine2 = RandomEngine::with_seed(2);

    let results = quick_match(&mut engine1, &mut engine2, 4, 1);

    for game in &results.games {
        let pos = replay(&game.moves);
        assert!(pos.is_game_over());
        assert_eq!(pos.disc_count(Player::Black), game.black_discs);
        assert_eq!(pos.disc_count(Player::White), game.white_discs);
    }
}

#[test]
fn test_max_moves_cap_is_a_draw() {
    let mut engine1 = RandomEngine::with_seed(3);
    let mut engine2 = RandomEngine::with_seed(4);
    let config = MatchConfig {
        num_games: 1,
        max_moves: 6,
        ..Default::default()
    };

    let results = MatchRunner::new(config).run_match(&mut engine1, &mut engine2);
    assert_eq!(results.result.draws, 1);
    assert_eq!(results.games[0].moves.len(), 6);
}

#[test]
fn test_config_from_partial_toml() {
    let config = MatchConfig::from_toml("num_games = 3\nmove_time_ms = 250\n").unwrap();
    assert_eq!(config.num_games, 3);
    assert_eq!(config.move_time_ms, Some(250));
    assert_eq!(config.depth, MatchConfig::default().depth);
    assert!(config.alternate_colors);

    assert!(MatchConfig::from_toml("num_games = \"many\"").is_err());
}

#[test]
fn test_results_round_trip_through_json() {
    let mut engine1 = RandomEngine::with_seed(5);
    let mut engine2 = RandomEngine::with_seed(6);
    let results = quick_match(&mut engine1, &mut engine2, 2, 1);

    let path = std::env::temp_dir().join(format!("othello-match-{}.json", std::process::id()));
    results.save(&path).unwrap();
    let loaded = MatchResults::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.result, results.result);
    assert_eq!(loaded.games.len(), 2);
    assert!(loaded.generate_report().contains("Random v1.0"));
}

fn replay(moves: &[String]) -> Position {
    let mut pos = Position::startpos();
    for mv in moves {
        if mv == "pass" {
            pos.pass();
        } else {
            let _ = pos.play(mv.parse().unwrap()).unwrap();
        }
    }
    pos
}
