//! End-to-end tests for the terminal game loop.

use strictly_tictactoe_cli::{
    GameConfig, GameLoop, GameResult, INVALID_POSITION_MESSAGE, Mark, Numbering, Position,
    Terminal,
};

fn play(config: GameConfig, input: &str) -> (GameResult, usize, Vec<String>) {
    let mut terminal = Terminal::new(input.as_bytes(), Vec::new());
    let summary = GameLoop::new(config).run(&mut terminal).expect("game finishes");
    let output = String::from_utf8(terminal.into_output()).expect("utf-8 output");
    (
        summary.result,
        summary.rejected,
        output.lines().map(str::to_string).collect(),
    )
}

#[test]
fn test_x_wins_top_row() {
    let (result, rejected, lines) = play(GameConfig::default(), "0\n3\n1\n4\n2\n");

    assert_eq!(result, GameResult::Victory(Mark::X));
    assert_eq!(rejected, 0);
    assert_eq!(lines.last().map(String::as_str), Some("Player X won!"));
    // initial board + 5 x (prompt + 3 rows) + result
    assert_eq!(lines.len(), 3 + 5 * 4 + 1);
}

#[test]
fn test_draw_game() {
    // O X O / O X X / X O X
    let (result, _, lines) = play(GameConfig::default(), "1\n0\n4\n7\n5\n3\n6\n2\n8\n");

    assert_eq!(result, GameResult::Draw);
    let n = lines.len();
    assert_eq!(lines[n - 4..], ["O | X | O", "O | X | X", "X | O | X", "Draw!"]);
}

#[test]
fn test_invalid_inputs_reprompt() {
    let input = "abc\n-1\n9\n0\n0\n3\n1\n4\n2\n";
    let (result, rejected, lines) = play(GameConfig::default(), input);

    assert_eq!(result, GameResult::Victory(Mark::X));
    assert_eq!(rejected, 4);
    assert_eq!(lines.iter().filter(|l| *l == INVALID_POSITION_MESSAGE).count(), 4);
}

#[test]
fn test_one_based_numbering_and_o_first() {
    let config = GameConfig::default()
        .with_numbering(Numbering::One)
        .with_first_mark(Mark::O)
        .with_initial_board(false);
    let mut terminal = Terminal::new("3\n1\n5\n4\n7\n".as_bytes(), Vec::new());
    let summary = GameLoop::new(config).run(&mut terminal).expect("game finishes");

    assert_eq!(summary.result, GameResult::Victory(Mark::O));
    assert_eq!(summary.moves[0].position, Position::TopRight);
    assert_eq!(summary.moves[0].mark, Mark::O);

    let output = String::from_utf8(terminal.into_output()).unwrap();
    assert!(output.starts_with("Choose your position (1-9 left to right): \n"));
}

#[test]
fn test_end_of_input_is_an_error() {
    let mut terminal = Terminal::new("0\n4\n".as_bytes(), Vec::new());
    assert!(GameLoop::new(GameConfig::default()).run(&mut terminal).is_err());
}

#[test]
fn test_undecodable_line_is_rejected_not_fatal() {
    let mut terminal = Terminal::new(&b"\xff\xfe\n0\n3\n1\n4\n2\n"[..], Vec::new());
    let summary = GameLoop::new(GameConfig::default())
        .run(&mut terminal)
        .expect("garbled input is recoverable");

    assert_eq!(summary.result, GameResult::Victory(Mark::X));
    assert_eq!(summary.winner(), Some(Mark::X));
    assert_eq!(summary.rejected, 1);
}

#[test]
fn test_rejection_writes_only_the_notice() {
    let (_, rejected, lines) = play(GameConfig::default(), "nope\n0\n3\n1\n4\n2\n");

    assert_eq!(rejected, 1);
    // initial board + rejected prompt + notice + 5 x (prompt + 3 rows) + result
    assert_eq!(lines.len(), 3 + 2 + 5 * 4 + 1);
    assert_eq!(lines[3..5], ["Choose your position (0-8 left to right): ", INVALID_POSITION_MESSAGE]);
}
