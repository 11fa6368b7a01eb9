//! Interactive placement session.
//!
//! One white piece is placed first, then black pieces until the user types
//! `done` or the configured limit is reached. The session then reports
//! which black pieces the white piece can capture.

use std::fmt;
use std::io::{self, BufRead, Write};

use log::{debug, info, warn};

use crate::board::{
    can_capture, generate_moves, placed_message, Bitboard, Board, ColoredPiece, Piece, Square,
};

pub mod command;
pub mod options;
pub mod print;

pub use command::{parse_placement, InputError, PlacementInput};
pub use options::{OptionError, SessionConfig, DEFAULT_MAX_BLACK};
pub use print::render_board;

/// Which color the session is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    White,
    Black,
    Finished,
}

/// Outcome of feeding one input line to a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Piece placed; the message confirms it
    Placed {
        piece: ColoredPiece,
        square: Square,
        message: String,
    },
    /// Line could not be used; the phase is unchanged
    Rejected { message: String },
    /// `done` arrived before enough black pieces were placed
    NeedMoreBlack { message: String },
    /// Placement is over, whether by `done` or by hitting the limit
    Finished,
}

impl SessionEvent {
    /// Text to show the user, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            SessionEvent::Placed { message, .. }
            | SessionEvent::Rejected { message }
            | SessionEvent::NeedMoreBlack { message } => Some(message),
            SessionEvent::Finished => None,
        }
    }
}

/// Which black pieces the white piece threatens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureReport {
    pub mover: ColoredPiece,
    pub from: Square,
    pub reachable: Bitboard,
    /// In placement order
    pub capturable: Vec<(Square, ColoredPiece)>,
}

impl fmt::Display for CaptureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.capturable.is_empty() {
            return write!(f, "The {} cannot capture any black pieces.", self.mover);
        }
        let targets: Vec<String> = self
            .capturable
            .iter()
            .map(|(sq, p)| format!("{p} at {sq}"))
            .collect();
        write!(f, "The {} can capture: {}", self.mover, targets.join(", "))
    }
}

/// Placement workflow state. Owns the board for its whole lifetime.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    board: Board,
    white: Option<(Square, ColoredPiece)>,
    black: Vec<(Square, ColoredPiece)>,
    phase: Phase,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Session {
            config,
            board: Board::new(),
            white: None,
            black: Vec::new(),
            phase: Phase::White,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Prompt for the current phase, or `None` once finished.
    #[must_use]
    pub fn prompt(&self) -> Option<String> {
        let names: Vec<&str> = Piece::ALL.iter().map(|p| p.name()).collect();
        let names = names.join(" or ");
        match self.phase {
            Phase::White => Some(format!(
                "Enter white piece ({names}) and position (e.g., 'rook a1'): "
            )),
            Phase::Black => Some(format!(
                "Enter black piece ({names}) and position (or 'done' to finish): "
            )),
            Phase::Finished => None,
        }
    }

    /// Feed one line of user input.
    pub fn submit(&mut self, line: &str) -> SessionEvent {
        match self.phase {
            Phase::White => self.submit_white(line),
            Phase::Black => self.submit_black(line),
            Phase::Finished => SessionEvent::Finished,
        }
    }

    fn submit_white(&mut self, line: &str) -> SessionEvent {
        match parse_placement(line, true) {
            Ok(PlacementInput::Place { piece, square }) => {
                let event = self.place(ColoredPiece::white(piece), square);
                if let SessionEvent::Placed { piece, square, .. } = &event {
                    self.white = Some((*square, *piece));
                    self.phase = Phase::Black;
                }
                event
            }
            // `done` only ends black placement; here it is a one-word line.
            Ok(PlacementInput::Done) => reject(&InputError::WrongArity { found: 1 }),
            Err(e) => reject(&e),
        }
    }

    fn submit_black(&mut self, line: &str) -> SessionEvent {
        match parse_placement(line, true) {
            Ok(PlacementInput::Done) => {
                if self.black.len() < self.config.min_black_pieces {
                    return SessionEvent::NeedMoreBlack {
                        message: need_more_message(self.config.min_black_pieces),
                    };
                }
                self.finish()
            }
            Ok(PlacementInput::Place { piece, square }) => {
                let event = self.place(ColoredPiece::black(piece), square);
                if let SessionEvent::Placed { piece, square, .. } = &event {
                    self.black.push((*square, *piece));
                    if self.black.len() >= self.config.max_black_pieces {
                        info!("black piece limit {} reached", self.config.max_black_pieces);
                        self.phase = Phase::Finished;
                    }
                }
                event
            }
            Err(e) => reject(&e),
        }
    }

    fn place(&mut self, piece: ColoredPiece, square: Square) -> SessionEvent {
        match self.board.add_piece_at(piece, square) {
            Ok(()) => SessionEvent::Placed {
                piece,
                square,
                message: placed_message(piece, square),
            },
            Err(e) => SessionEvent::Rejected {
                message: e.to_string(),
            },
        }
    }

    fn finish(&mut self) -> SessionEvent {
        debug!("placement finished with {} black pieces", self.black.len());
        self.phase = Phase::Finished;
        SessionEvent::Finished
    }

    /// Capture report for the current placement, or `None` before the
    /// white piece is on the board.
    #[must_use]
    pub fn report(&self) -> Option<CaptureReport> {
        let (from, mover) = self.white?;
        let capturable = self
            .black
            .iter()
            .copied()
            .filter(|&(sq, _)| can_capture(mover.piece, from, sq))
            .collect();
        Some(CaptureReport {
            mover,
            from,
            reachable: generate_moves(mover.piece, from),
            capturable,
        })
    }

    /// Final board drawing, with the white piece's reachable squares marked
    /// when the config asks for it.
    #[must_use]
    pub fn render(&self) -> String {
        let highlights = match (&self.white, self.config.show_reachable) {
            (Some((from, mover)), true) => generate_moves(mover.piece, *from),
            _ => Bitboard::EMPTY,
        };
        render_board(&self.board, highlights)
    }
}

fn reject(e: &InputError) -> SessionEvent {
    debug!("input rejected: {e:?}");
    SessionEvent::Rejected {
        message: format!("Error: {e} Please try again."),
    }
}

fn need_more_message(min: usize) -> String {
    if min == 1 {
        "You must add at least one black piece.".to_string()
    } else {
        format!("You must add at least {min} black pieces.")
    }
}

/// Run a whole session over `input`, writing prompts and results to `output`.
///
/// Returns the report, or `None` if input ran out before placement finished.
pub fn run<R: BufRead, W: Write>(
    config: SessionConfig,
    mut input: R,
    mut output: W,
) -> io::Result<Option<CaptureReport>> {
    let mut session = Session::new(config);

    while let Some(prompt) = session.prompt() {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            warn!("input closed during {:?} phase", session.phase());
            writeln!(output)?;
            return Ok(None);
        }
        if let Some(message) = session.submit(&line).message() {
            writeln!(output, "{message}")?;
        }
    }

    let report = session.report();
    writeln!(output, "\nFinal board state:")?;
    write!(output, "{}", session.render())?;
    if let Some(report) = &report {
        writeln!(output, "\n{report}")?;
    }
    Ok(report)
}
