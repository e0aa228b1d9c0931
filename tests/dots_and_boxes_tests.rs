//! Dots and Boxes behavior through the public API.
//!
//! Random edge sequences check box ownership and the extra-turn rule; the
//! scenarios pin down scoring and results.

use proptest::prelude::*;

use terminal_arcade::board::Position;
use terminal_arcade::games::{DotsAndBoxes, EdgeMove, Orientation};
use terminal_arcade::rules::{Game, GameResult, GameStatus, MoveOutcome};
use terminal_arcade::{MoveError, PlayerId, RuleViolation};

fn box_owners(game: &DotsAndBoxes, rows: usize, columns: usize) -> Vec<Option<PlayerId>> {
    (0..rows)
        .flat_map(|r| (0..columns).map(move |c| Position::new(r, c)))
        .map(|pos| game.box_owner(pos))
        .collect()
}

fn edge_strategy() -> impl Strategy<Value = (bool, i64, i64)> {
    (any::<bool>(), 1i64..=5, 1i64..=5)
}

proptest! {
    /// Boxes are claimed once, scores track ownership, and only closing
    /// moves keep the turn.
    #[test]
    fn prop_box_ownership_and_turns(
        rows in 1usize..=4,
        columns in 1usize..=4,
        edges in prop::collection::vec(edge_strategy(), 1..80),
    ) {
        let mut game = DotsAndBoxes::builder()
            .rows(rows as i64)
            .columns(columns as i64)
            .build()
            .unwrap();

        for (horizontal, row, col) in edges {
            let orientation = if horizontal { Orientation::Horizontal } else { Orientation::Vertical };
            let before = box_owners(&game, rows, columns);
            let mover = game.current_player();

            match game.apply_move(EdgeMove::new(orientation, row, col)) {
                Ok(MoveOutcome::ExtraTurn { closed }) => {
                    prop_assert!(closed >= 1 && closed <= 2);
                    prop_assert_eq!(game.current_player(), mover);
                    let after = box_owners(&game, rows, columns);
                    let newly: Vec<_> = before
                        .iter()
                        .zip(&after)
                        .filter(|(b, a)| b != a)
                        .collect();
                    prop_assert_eq!(newly.len(), closed);
                    for (b, a) in newly {
                        prop_assert_eq!(*b, None);
                        prop_assert_eq!(*a, Some(mover));
                    }
                }
                Ok(MoveOutcome::Continue) => {
                    prop_assert_eq!(game.current_player(), mover.other());
                    prop_assert_eq!(box_owners(&game, rows, columns), before);
                }
                Ok(MoveOutcome::Quit) => prop_assert!(false, "quit without the sentinel"),
                Err(_) => {
                    prop_assert_eq!(game.current_player(), mover);
                    prop_assert_eq!(box_owners(&game, rows, columns), before);
                }
            }

            let owned = game.owned_boxes();
            prop_assert!(owned <= rows * columns);
            prop_assert_eq!(
                owned as u32,
                game.score(PlayerId::FIRST) + game.score(PlayerId::SECOND)
            );
            if game.is_won() {
                prop_assert_eq!(owned, rows * columns);
                break;
            }
        }
    }
}

#[test]
fn test_single_box_scenario() {
    let mut game = DotsAndBoxes::builder()
        .rows(1)
        .columns(1)
        .player_names("Ann", "Bo")
        .build()
        .unwrap();

    assert_eq!(game.apply_input("H 1 1"), Ok(MoveOutcome::Continue));
    assert_eq!(game.apply_input("h 2 1"), Ok(MoveOutcome::Continue));
    assert_eq!(game.apply_input("V 1 1"), Ok(MoveOutcome::Continue));
    assert_eq!(game.current_player(), PlayerId::SECOND);
    assert_eq!(game.apply_input("v 1 2"), Ok(MoveOutcome::ExtraTurn { closed: 1 }));

    assert_eq!(game.box_owner(Position::new(0, 0)), Some(PlayerId::SECOND));
    assert_eq!(game.score(PlayerId::SECOND), 1);
    assert_eq!(game.current_player(), PlayerId::SECOND);
    assert!(game.is_won());
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.result(), Some(GameResult::Winner(PlayerId::SECOND)));
    assert_eq!(game.victory_message(), "Congratulations Bo, you win!");

    assert_eq!(
        game.apply_input("H 1 1"),
        Err(MoveError::Rule(RuleViolation::GameOver))
    );
}

#[test]
fn test_rejections_keep_the_turn() {
    let mut game = DotsAndBoxes::builder().rows(2).columns(3).build().unwrap();
    game.apply_input("V 2 4").unwrap();
    assert_eq!(game.current_player(), PlayerId::SECOND);

    for bad in ["V 2 4", "H 4 1", "V 3 1", "X 1 1", "H 1", "H a 1", ""] {
        assert!(game.apply_input(bad).is_err(), "{bad:?} should be rejected");
        assert_eq!(game.current_player(), PlayerId::SECOND);
    }
    assert_eq!(game.edge_owner(Orientation::Vertical, 1, 3), Some(PlayerId::FIRST));
}

#[test]
fn test_quit_mid_game_summary() {
    let mut game = DotsAndBoxes::builder()
        .rows(1)
        .columns(2)
        .player_names("Ann", "Bo")
        .build()
        .unwrap();
    for edge in ["H 1 1", "H 2 1", "V 1 1", "V 1 2"] {
        game.apply_input(edge).unwrap();
    }
    assert_eq!(game.apply_input("q"), Ok(MoveOutcome::Quit));
    assert_eq!(game.status(), GameStatus::Quit);
    assert!(!game.is_won());
    assert_eq!(game.result(), None);
    assert_eq!(game.summary(), "Final score: Ann: 0 | Bo: 1\nBo wins!");
}
