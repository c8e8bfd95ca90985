//! End-to-end matches driven through scripted consoles.

use tictactoe_duel::{
    Board, Console, GameConfig, GameMode, Identity, Mark, MarkOrder, Orchestrator, Outcome,
    PlayError, Roster, Seat, TerminalConsole, blocking_move,
};

fn quiet_config(seed: u64) -> GameConfig {
    GameConfig::default()
        .with_think_delay_ms(0)
        .with_color(false)
        .with_seed(seed)
}

type ScriptedGame<'a> = Orchestrator<TerminalConsole<&'a [u8], Vec<u8>>>;

fn run_script(script: &str, seed: u64) -> (Result<Vec<Outcome>, PlayError>, ScriptedGame<'_>) {
    let console = TerminalConsole::new(script.as_bytes(), Vec::new(), false);
    let mut orchestrator = Orchestrator::new(console, &quiet_config(seed));
    let result = orchestrator.run();
    (result, orchestrator)
}

fn output_of(orchestrator: ScriptedGame<'_>) -> String {
    String::from_utf8(orchestrator.into_console().into_output()).expect("utf-8 output")
}

#[test]
fn test_two_humans_win_then_draw() {
    let script = "\
7
1
ann
bob
1
1
4
2
5
3
y
1
cara
dan
2
1
2
3
5
4
6
8
7
n
";
    let (result, orchestrator) = run_script(script, 0);
    let outcomes = result.expect("both matches finish");
    assert_eq!(outcomes, vec![Outcome::Win(Mark::X), Outcome::Draw]);

    let board = orchestrator
        .session()
        .board()
        .cloned()
        .expect("last board is kept until replay");
    assert_eq!(board.empty_indices(), vec![8]);

    let out = output_of(orchestrator);
    assert!(out.starts_with("TIC-TAC-TOE"));
    assert!(out.contains("Invalid selection. Please choose 1 or 2."));
    assert!(out.contains("Ann will be X."));
    assert!(out.contains("Bob will be O."));
    assert!(out.contains("Ann(X) wins!"));
    assert!(out.contains("Dan will be X."));
    assert!(out.contains("Well played!, the match ended as a draw."));
    assert!(out.trim_end().ends_with("Thanks for playing!"));
}

#[test]
fn test_reserved_name_is_refused_in_flow() {
    let script = "1\nComputer\nann\nbob\n1\n1\n4\n2\n5\n3\nn\n";
    let (result, orchestrator) = run_script(script, 0);
    assert_eq!(result.unwrap(), vec![Outcome::Win(Mark::X)]);
    let out = output_of(orchestrator);
    assert!(out.contains("The name 'Computer' is reserved."));
}

#[test]
fn test_human_against_computer_finishes() {
    // The human tries cells 1..9 in order, three times over; taken cells
    // are refused and the next line is read. Leftover digits are refused by
    // the replay prompt until the final "n".
    let mut script = String::from("2\nann\n1\n");
    for _ in 0..3 {
        for n in 1..=9 {
            script.push_str(&format!("{}\n", n));
        }
    }
    script.push_str("n\n");

    for seed in 0..8 {
        let (result, orchestrator) = run_script(&script, seed);
        let outcomes = result.expect("match finishes");
        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].is_concluded());

        let out = output_of(orchestrator);
        assert!(out.contains("Computer is thinking..."));
        assert!(out.contains("Computer chose position"));
        assert!(out.contains("Thanks for playing!"));
    }
}

#[test]
fn test_closed_input_mid_match() {
    let (result, _) = run_script("1\nann\nbob\n1\n5\n", 0);
    assert!(matches!(result, Err(PlayError::InputClosed)));
}

/// Console that plays the lowest empty cell for humans and records what the
/// computer sees and does.
#[derive(Default)]
struct ProbeConsole {
    order: Option<MarkOrder>,
    last_board: Board,
    computer_mark: Option<Mark>,
    computer_turns: Vec<(Board, usize)>,
    announced: Vec<Outcome>,
}

impl Console for ProbeConsole {
    fn banner(&mut self) -> Result<(), PlayError> {
        Ok(())
    }

    fn request_mode(&mut self) -> Result<GameMode, PlayError> {
        Ok(GameMode::PlayerVsComputer)
    }

    fn request_identity(&mut self, seat: Seat) -> Result<Identity, PlayError> {
        Ok(Identity::human(&seat.to_string().replace(' ', "")).expect("seat names are valid"))
    }

    fn request_mark_assignment(&mut self) -> Result<MarkOrder, PlayError> {
        Ok(self.order.unwrap_or(MarkOrder::FirstIsX))
    }

    fn announce_marks(&mut self, roster: &Roster) -> Result<(), PlayError> {
        self.computer_mark = roster.computer_mark();
        Ok(())
    }

    fn render(&mut self, board: &Board) -> Result<(), PlayError> {
        self.last_board = board.clone();
        Ok(())
    }

    fn request_move(&mut self, _name: &str, _mark: Mark, board: &Board) -> Result<usize, PlayError> {
        Ok(board.empty_indices()[0])
    }

    fn computer_thinking(&mut self, _name: &str, _mark: Mark) -> Result<(), PlayError> {
        Ok(())
    }

    fn computer_moved(&mut self, index: usize) -> Result<(), PlayError> {
        self.computer_turns.push((self.last_board.clone(), index));
        Ok(())
    }

    fn announce(&mut self, outcome: Outcome, _mover: &Identity) -> Result<(), PlayError> {
        self.announced.push(outcome);
        Ok(())
    }

    fn ask_replay(&mut self) -> Result<bool, PlayError> {
        Ok(false)
    }

    fn farewell(&mut self) -> Result<(), PlayError> {
        Ok(())
    }
}

#[test]
fn test_computer_always_blocks_immediate_threats() {
    for order in [MarkOrder::FirstIsX, MarkOrder::SecondIsX] {
        for seed in 0..64 {
            let console = ProbeConsole {
                order: Some(order),
                ..ProbeConsole::default()
            };
            let mut orchestrator = Orchestrator::new(console, &quiet_config(seed));
            let outcomes = orchestrator.run().expect("match finishes");
            let probe = orchestrator.into_console();

            assert_eq!(probe.announced, outcomes);
            let computer = probe.computer_mark.expect("computer is playing");
            assert!(!probe.computer_turns.is_empty());
            for (board, index) in &probe.computer_turns {
                assert!(board.is_empty(*index), "computer played a taken cell");
                if let Some(block) = blocking_move(board, computer) {
                    assert_eq!(*index, block, "computer missed a block on {:?}", board);
                }
            }
        }
    }
}

#[test]
fn test_computer_blocks_top_row() {
    // Human X plays 0 then 1; the computer must take 2 unless it already did.
    let console = ProbeConsole::default();
    let mut orchestrator = Orchestrator::new(console, &quiet_config(3));
    orchestrator.run().expect("match finishes");
    let probe = orchestrator.into_console();

    let second_turn = &probe.computer_turns[1];
    if second_turn.0.is_empty(2) {
        assert_eq!(second_turn.1, 2);
    }
}
