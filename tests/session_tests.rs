use std::collections::VecDeque;
use std::io::Cursor;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use twenty48::{
    parse_command, run_session, Board, CliShell, Command, Direction, GameEngine, GameState,
    GameStatus, ScriptedTiles, Shell,
};

/// Shell fed from a fixed list of raw input lines.
struct ScriptedShell {
    inputs: VecDeque<&'static str>,
    renders: Vec<GameState>,
    game_over: Option<GameState>,
}

impl ScriptedShell {
    fn new(inputs: &[&'static str]) -> Self {
        Self {
            inputs: inputs.iter().copied().collect(),
            renders: Vec::new(),
            game_over: None,
        }
    }
}

impl Shell for ScriptedShell {
    fn render(&mut self, state: &GameState) {
        self.renders.push(*state);
    }

    fn next_command(&mut self) -> anyhow::Result<Option<Command>> {
        match self.inputs.pop_front() {
            Some(line) => Ok(parse_command(line)),
            None => Ok(Some(Command::Quit)),
        }
    }

    fn game_over(&mut self, state: &GameState) {
        assert!(self.game_over.is_none(), "game over reported twice");
        self.game_over = Some(*state);
    }
}

fn engine_with(rows: [[u32; 4]; 4]) -> GameEngine {
    GameEngine::from_state(GameState {
        board: Board::from_rows(rows).unwrap(),
        status: GameStatus::Active,
        moves: 0,
    })
}

#[test]
fn test_parse_command_keys() {
    assert_eq!(parse_command("w"), Some(Command::Move(Direction::Up)));
    assert_eq!(parse_command("A\n"), Some(Command::Move(Direction::Left)));
    assert_eq!(parse_command("  down "), Some(Command::Move(Direction::Down)));
    assert_eq!(parse_command("RIGHT"), Some(Command::Move(Direction::Right)));
    assert_eq!(parse_command("k"), Some(Command::Move(Direction::Up)));
    assert_eq!(parse_command("q"), Some(Command::Quit));
    assert_eq!(parse_command(""), None);
    assert_eq!(parse_command("x"), None);
    assert_eq!(parse_command("upward"), None);
}

#[test]
fn test_session_starts_fresh_engine() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut engine = GameEngine::new();
    let mut shell = ScriptedShell::new(&[]);
    let state = run_session(&mut shell, &mut engine, &mut rng).unwrap();
    assert_eq!(shell.renders.len(), 1);
    assert_eq!(state.board.count_empty(), 14);
    assert_eq!(state.status, GameStatus::Active);
    assert!(shell.game_over.is_none());
}

#[test]
fn test_unrecognised_and_noop_input_do_not_render() {
    let mut engine = engine_with([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let picks = [(0, 2)];
    let mut src = ScriptedTiles::new(&picks).unwrap();
    // "x" is unknown, "a" cannot move anything, "d" slides right
    let mut shell = ScriptedShell::new(&["x", "a", "d", "q", "d"]);
    let state = run_session(&mut shell, &mut engine, &mut src).unwrap();

    assert_eq!(shell.renders.len(), 2);
    assert_eq!(shell.renders[1].board.rows()[0], [2, 0, 2, 4]);
    assert_eq!(state.moves, 1);
    // quit stops before the trailing "d"
    assert_eq!(shell.inputs, VecDeque::from(vec!["d"]));
}

#[test]
fn test_session_ends_at_terminal_state() {
    let mut engine = engine_with([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [0, 4, 2, 8],
    ]);
    let picks = [(0, 2)];
    let mut src = ScriptedTiles::new(&picks).unwrap();
    let mut shell = ScriptedShell::new(&["left", "up", "down"]);
    let state = run_session(&mut shell, &mut engine, &mut src).unwrap();

    assert_eq!(state.status, GameStatus::Terminal);
    assert_eq!(shell.game_over, Some(state));
    assert_eq!(shell.renders.last(), Some(&state));
    assert_eq!(shell.inputs.len(), 2);
}

#[test]
fn test_cli_shell_renders_moves() {
    let mut engine = engine_with([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let picks = [(0, 2)];
    let mut src = ScriptedTiles::new(&picks).unwrap();
    let input = Cursor::new("d\n??\nq\n");
    let mut shell = CliShell::new(input, Vec::new(), false);
    run_session(&mut shell, &mut engine, &mut src).unwrap();

    let out = String::from_utf8(shell.into_output()).unwrap();
    assert_eq!(out.matches("Moves:").count(), 2);
    assert!(out.contains("Moves: 1"));
    assert!(out.contains("|  2   |      |      |  4   |"));
    assert_eq!(out.matches("Move [w/a/s/d, q to quit]: ").count(), 3);
    assert!(!out.contains("Game Over"));
}

#[test]
fn test_cli_shell_quits_on_eof() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut engine = GameEngine::new();
    let mut shell = CliShell::new(Cursor::new(""), Vec::new(), true);
    let state = run_session(&mut shell, &mut engine, &mut rng).unwrap();
    assert_eq!(state.moves, 0);
    let out = String::from_utf8(shell.into_output()).unwrap();
    assert!(out.contains("\x1b["));
}

#[test]
fn test_cli_shell_reports_game_over() {
    let mut engine = engine_with([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [0, 4, 2, 8],
    ]);
    let picks = [(0, 2)];
    let mut src = ScriptedTiles::new(&picks).unwrap();
    let mut shell = CliShell::new(Cursor::new("a\n"), Vec::new(), false);
    run_session(&mut shell, &mut engine, &mut src).unwrap();
    let out = String::from_utf8(shell.into_output()).unwrap();
    assert!(out.contains("Game Over! Highest tile: 8"));
}

#[test]
fn test_session_seeds_unstarted_snapshot() {
    let mut engine = GameEngine::from_state(GameEngine::new().state());
    let picks = [(0, 2), (0, 2)];
    let mut src = ScriptedTiles::new(&picks).unwrap();
    let mut shell = ScriptedShell::new(&["d"]);
    let state = run_session(&mut shell, &mut engine, &mut src).unwrap();

    assert_eq!(shell.renders[0].board.count_empty(), 14);
    assert_eq!(shell.renders.len(), 2);
    assert_eq!(state.moves, 1);
}
