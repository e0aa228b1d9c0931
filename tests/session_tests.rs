//! Scripted terminal sessions.
//!
//! Each test feeds a full transcript of answers and checks what the player
//! would have seen.

use std::io::Cursor;

use terminal_arcade::{ArcadeConfig, GameKind, Session};

fn play(script: &str, config: ArcadeConfig) -> String {
    let mut session = Session::new(Cursor::new(script.to_string()), Vec::new(), config);
    session.run().unwrap();
    String::from_utf8(session.into_output()).unwrap()
}

fn seeded() -> ArcadeConfig {
    ArcadeConfig::default().with_seed(2024)
}

#[test]
fn test_dots_and_boxes_to_victory() {
    let script = "1\nAnn\nBo\n1\n1\nH 1 1\nH 2 1\nV 1 1\nV 1 2\n3\n";
    let out = play(script, seeded());

    assert!(out.contains("What is Player 1's name?: "));
    assert!(out.contains("What is Player 2's name?: "));
    assert!(out.contains("Input format (1-indexed):"));
    assert!(out.contains("Bo closed 1 box and goes again!"));
    assert!(out.contains("Congratulations Bo, you win!"));
    assert!(out.contains("| B |"));
    assert!(out.ends_with("\nThank you for playing!\n"));
}

#[test]
fn test_move_errors_are_reported_and_retried() {
    let script = "1\nAnn\nBo\n1\n1\nH 9 9\nX 1 1\nH 1 1\nH 1 1\nq\n3\n";
    let out = play(script, seeded());

    assert!(out.contains("Error: Horizontal edge"));
    assert!(out.contains("Error: Invalid move type"));
    assert!(out.contains("\nError: "));
    assert!(out.contains("Final score: Ann: 0 | Bo: 0"));
    assert!(!out.contains("you win!"));
}

#[test]
fn test_dimension_prompts_reject_then_accept() {
    // 0 and "abc" fail the input check, 11 fails the board check.
    let script = "0\nme\n0\nabc\n11\n3\n2\n2\nq\n3\n";
    let out = play(script, seeded());

    assert!(out.contains("What is your name?: "));
    assert_eq!(out.matches("Error: invalid input").count(), 2);
    assert!(out.contains("Error: Rows and columns must be at most 10 (got 11x3)."));
    assert!(out.contains("Game ended prematurely.\nThe puzzle was not completed."));
}

#[test]
fn test_one_by_one_sliding_board_is_rejected() {
    let script = "0\nme\n1\n1\n2\n2\nq\n3\n";
    let out = play(script, seeded());
    assert!(out.contains("Error: A sliding puzzle needs at least two cells."));
    assert!(out.contains("Game ended prematurely."));
}

#[test]
fn test_replay_and_switch_games() {
    let script = "2\nA\nB\nq\n1\nC\nD\nq\n2\n1\nE\nF\n1\n1\nq\n3\n";
    let out = play(script, seeded());

    assert_eq!(out.matches("What would you like to do?").count(), 3);
    assert!(out.contains("A at (9, 5)"));
    assert!(out.contains("C at (9, 5)"));
    assert!(out.contains("Final score: E: 0 | F: 0"));
    assert_eq!(out.matches("Thank you for playing!").count(), 1);
}

#[test]
fn test_first_game_skips_menu() {
    let config = seeded().with_first_game(GameKind::Quoridor);
    let out = play("Xena\nYuri\nM U\nq\n3\n", config);

    assert!(!out.contains("Which game would you like to play?"));
    assert!(out.contains("Xena to move (M U/D/L/R | H/V r c | q): "));
    assert!(out.contains("Xena at (8, 5)"));
    assert!(out.contains("Walls Remaining:"));
}

#[test]
fn test_input_ending_mid_game_quits_it() {
    let out = play("2\nA\nB\nM U\n", seeded());
    assert!(out.contains("Game ended prematurely. Final positions:"));
    assert!(out.ends_with("\nThank you for playing!\n"));
}

#[test]
fn test_same_seed_same_session() {
    let script = "0\nme\n3\n3\nq\n3\n";
    assert_eq!(play(script, seeded()), play(script, seeded()));
}
