use std::io::Cursor;

use othello_cli::{Game, GameConfig, GameEnd, HumanSide, Opponent};
use othello_core::{GameOutcome, Move, Player, Position};

fn random_config(human: HumanSide) -> GameConfig {
    GameConfig {
        human,
        opponent: Opponent::Random,
        seed: Some(11),
        ..Default::default()
    }
}

#[test]
fn engine_vs_engine_plays_to_the_end() {
    let mut game = Game::new(random_config(HumanSide::None));
    let mut out = Vec::new();

    let end = game.run(Cursor::new(""), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let GameEnd::Finished { outcome, black, white } = end else {
        panic!("game should finish without input");
    };
    assert!(black + white <= 64);
    assert_eq!(outcome, game.position().outcome());
    assert!(game.position().is_game_over());
    assert!(text.contains("Game over!"));
    assert!(text.contains(&outcome.to_string()));
}

#[test]
fn invalid_input_is_reprompted() {
    let mut game = Game::new(random_config(HumanSide::Black));
    let mut out = Vec::new();
    let input = "9 9\n0 0\nhello\n2 3\n";

    let end = game.run(Cursor::new(input), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(end, GameEnd::Aborted);
    assert_eq!(text.matches("Invalid move. Try again.").count(), 3);
    assert!(text.contains("Moves: (2, 3) (3, 2) (4, 5) (5, 4)"));
    assert!(text.contains("AI played:"));
    assert_eq!(game.position().get(Move::new(2, 3)), Some(Player::Black));
    assert_eq!(game.position().side_to_move, Player::Black);
}

#[test]
fn stuck_side_passes() {
    let pos = Position::from_rows(
        &[
            "X O . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
        ],
        Player::White,
    );
    let mut game = Game::with_position(random_config(HumanSide::None), pos);
    let mut out = Vec::new();

    let end = game.run(Cursor::new(""), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Player 2 (O) has no valid moves."));
    assert!(text.contains("AI played: (0, 2)"));
    assert_eq!(
        end,
        GameEnd::Finished {
            outcome: GameOutcome::Winner(Player::Black),
            black: 3,
            white: 0,
        }
    );
    assert!(text.contains("Player 1 (X) wins!"));
}

#[test]
fn classical_engine_answers_human() {
    let config = GameConfig {
        human: HumanSide::White,
        opponent: Opponent::Classical,
        time_limit_secs: 0.05,
        max_depth: Some(3),
        ..Default::default()
    };
    let mut game = Game::new(config);
    let mut out = Vec::new();

    let end = game.run(Cursor::new(""), &mut out).unwrap();

    assert_eq!(end, GameEnd::Aborted);
    assert_eq!(game.position().disc_total(), 5);
    assert_eq!(game.position().side_to_move, Player::White);
}
