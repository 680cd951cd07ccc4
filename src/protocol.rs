//! Line protocol spoken with the game controller
//!
//! One session looks like this (`>` engine output, `<` controller input):
//!
//! ```text
//! > Othello AI
//! < 1,4,0,1,1
//! < SCORE 2 2
//! < [[0, 0, 0, 0], [0, 2, 1, 0], [0, 1, 2, 0], [0, 0, 0, 0]]
//! > 0 1
//! < SCORE 1 4
//! < ...
//! < FINAL 9 7
//! ```
//!
//! Only protocol replies are written to the output stream. Diagnostics go
//! through the `log` facade.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::board::{Board, ParseBoardError, Player};
use crate::config::{Algorithm, ConfigError, Handshake};
use crate::engine::Engine;
use crate::eval::Evaluation;
use crate::rules::Rules;

/// Name announced when none is configured
pub const DEFAULT_NAME: &str = "Othello AI";

/// Reply sent when the engine has no legal move
pub const PASS: &str = "pass";

/// Protocol failure.
#[derive(thiserror::Error, Debug)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before the controller sent `FINAL`
    #[error("unexpected end of input while waiting for {0}")]
    UnexpectedEof(&'static str),

    #[error("invalid handshake: {0}")]
    Handshake(#[from] ConfigError),

    #[error("invalid status line: {0:?}")]
    Status(String),

    #[error("invalid board: {0}")]
    Board(#[from] ParseBoardError),
}

/// Per-turn status line sent by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A board follows and a move is expected
    Score { dark: u32, light: u32 },
    /// The game is over
    Final { dark: u32, light: u32 },
}

impl FromStr for Status {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ProtocolError::Status(s.trim().to_string());

        let mut parts = s.split_whitespace();
        let (Some(tag), Some(dark), Some(light), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        let dark = dark.parse().map_err(|_| invalid())?;
        let light = light.parse().map_err(|_| invalid())?;

        match tag {
            "SCORE" => Ok(Status::Score { dark, light }),
            "FINAL" => Ok(Status::Final { dark, light }),
            _ => Err(invalid()),
        }
    }
}

/// Settings the controller does not send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Name written as the first line
    pub name: String,
    /// Scoring at depth cutoffs
    pub evaluation: Evaluation,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            evaluation: Evaluation::default(),
        }
    }
}

/// What happened during a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub color: Player,
    /// Moves sent, passes excluded
    pub moves: u32,
    pub passes: u32,
    /// Final `(dark, light)` score reported by the controller
    pub final_score: (u32, u32),
}

/// Play one game over the given streams.
///
/// Returns once the controller sends `FINAL`. Running out of input earlier
/// is an error.
pub fn run<I: BufRead, W: Write>(
    mut input: I,
    mut output: W,
    options: &SessionOptions,
) -> Result<SessionSummary, ProtocolError> {
    writeln!(output, "{}", options.name)?;
    output.flush()?;

    let handshake: Handshake = read_line(&mut input, "handshake")?.parse()?;
    let config = handshake.config.with_evaluation(options.evaluation);
    let color = handshake.color;

    log::info!("playing {color}");
    log::info!("running {}", config.algorithm);
    log::info!("state caching is {}", on_off(config.caching));
    log::info!("node ordering is {}", on_off(config.ordering));
    log::info!("depth limit is {}", config.depth_limit);
    log::info!("cutoff evaluation is {:?}", config.evaluation);
    if config.algorithm == Algorithm::Minimax && config.ordering {
        log::warn!("node ordering has no effect on the value chosen by minimax");
    }

    let mut engine = Engine::new(config);
    let mut moves = 0;
    let mut passes = 0;

    loop {
        let status: Status = read_line(&mut input, "status line")?.parse()?;
        let (dark, light) = match status {
            Status::Final { dark, light } => {
                log::info!("game over: dark {dark}, light {light}");
                return Ok(SessionSummary {
                    color,
                    moves,
                    passes,
                    final_score: (dark, light),
                });
            }
            Status::Score { dark, light } => (dark, light),
        };

        let board: Board = read_line(&mut input, "board")?.parse()?;
        let counted = engine.rules().score(&board);
        if counted != (dark, light) {
            log::warn!(
                "controller reports score {dark}-{light} but the board holds {}-{}",
                counted.0,
                counted.1
            );
        }

        let result = engine.select_move(&board, color);
        match result.best_move {
            Some(pos) => {
                log::debug!(
                    "move {pos} value {} ({} nodes, {}ms, cache {})",
                    result.value,
                    result.stats.nodes,
                    result.time_ms,
                    engine.cache().len()
                );
                writeln!(output, "{pos}")?;
                moves += 1;
            }
            None => {
                log::warn!("no legal move for {color}, passing");
                writeln!(output, "{PASS}")?;
                passes += 1;
            }
        }
        output.flush()?;
    }
}

fn read_line<I: BufRead>(input: &mut I, expecting: &'static str) -> Result<String, ProtocolError> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(ProtocolError::UnexpectedEof(expecting));
        }
        if !line.trim().is_empty() {
            return Ok(line.trim().to_string());
        }
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "ON"
    } else {
        "OFF"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str) -> (Result<SessionSummary, ProtocolError>, String) {
        let mut output = Vec::new();
        let result = run(input.as_bytes(), &mut output, &SessionOptions::default());
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(
            "SCORE 2 2".parse::<Status>().unwrap(),
            Status::Score { dark: 2, light: 2 }
        );
        assert_eq!(
            " FINAL 33 31 \n".parse::<Status>().unwrap(),
            Status::Final { dark: 33, light: 31 }
        );
    }

    #[test]
    fn test_parse_status_rejects_garbage() {
        for line in ["", "SCORE", "SCORE 2", "SCORE 2 2 2", "MOVE 1 1", "SCORE a 2"] {
            assert!(
                matches!(line.parse::<Status>(), Err(ProtocolError::Status(_))),
                "{line:?}"
            );
        }
    }

    #[test]
    fn test_single_turn_session() {
        let input = "1,1,0,0,0\n\
                     SCORE 2 2\n\
                     [[0, 0, 0, 0], [0, 2, 1, 0], [0, 1, 2, 0], [0, 0, 0, 0]]\n\
                     FINAL 4 1\n";
        let (result, output) = session(input);

        assert_eq!(output, "Othello AI\n0 1\n");
        let summary = result.unwrap();
        assert_eq!(summary.color, Player::Dark);
        assert_eq!(summary.moves, 1);
        assert_eq!(summary.passes, 0);
        assert_eq!(summary.final_score, (4, 1));
    }

    #[test]
    fn test_pass_when_no_move() {
        let input = "2,2,1,0,0\n\
                     SCORE 1 4\n\
                     [[0, 0, 0, 0], [0, 2, 2, 0], [1, 2, 2, 0], [0, 0, 0, 0]]\n\
                     FINAL 1 4\n";
        let (result, output) = session(input);

        assert_eq!(output, "Othello AI\npass\n");
        assert_eq!(result.unwrap().passes, 1);
    }

    #[test]
    fn test_custom_name() {
        let options = SessionOptions {
            name: "Corner Hunter".to_string(),
            evaluation: Evaluation::CornerHeuristic,
        };
        let mut output = Vec::new();
        run("1,2,0,1,1\nFINAL 2 2\n".as_bytes(), &mut output, &options).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "Corner Hunter\n");
    }

    #[test]
    fn test_eof_before_final() {
        let (result, output) = session("1,-1,0,1,1\nSCORE 2 2\n");
        assert!(matches!(
            result,
            Err(ProtocolError::UnexpectedEof("board"))
        ));
        assert_eq!(output, "Othello AI\n");
    }

    #[test]
    fn test_bad_handshake() {
        let (result, _) = session("1,-1,0,1\n");
        assert!(matches!(
            result,
            Err(ProtocolError::Handshake(ConfigError::FieldCount(4)))
        ));
    }

    #[test]
    fn test_bad_board() {
        let (result, _) = session("1,1,0,0,0\nSCORE 2 2\n[[0, 1], [2]]\n");
        assert!(matches!(result, Err(ProtocolError::Board(_))));
    }
}
