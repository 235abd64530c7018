//! Plain-text board drawings.
//!
//! Rows are `x` and columns are `y`, both counted from zero at the top left.
//! Cells: `K` king, `#` missing, `*` empty starting square, `.` empty, and a
//! placed piece as its letter followed by its 1-based place in the chain.

use chain_core::{BoardPosition, GamePiece, PieceType, BOARD_SIZE};
use chain_engine::{BoardConfig, BoardMask, ChainScore, Round};
use std::fmt::Write;

const CELL_WIDTH: usize = 3;

/// Draws a round: layout, placed pieces, and chain order.
pub fn render_round(round: &Round) -> String {
    render_grid(|pos| {
        if let Some(piece) = round.occupancy().get(pos) {
            let index = round.chain().index_of(pos).map_or(0, |i| i + 1);
            return format!("{}{}", piece.symbol(), index);
        }
        board_cell(round.board(), pos).to_string()
    })
}

/// Draws an empty layout.
pub fn render_board(board: &BoardConfig) -> String {
    render_grid(|pos| board_cell(board, pos).to_string())
}

/// Draws the squares a piece type reaches from `from`, marked `x`.
pub fn render_moves(kind: PieceType, from: BoardPosition, moves: BoardMask) -> String {
    render_grid(|pos| {
        if pos == from {
            kind.symbol().to_string()
        } else if moves.contains(pos) {
            "x".to_string()
        } else {
            ".".to_string()
        }
    })
}

/// One line per piece: id, type, color, points, and multiplier.
pub fn render_pieces<'a>(pieces: impl IntoIterator<Item = &'a GamePiece>) -> String {
    let mut out = String::new();
    for piece in pieces {
        let _ = writeln!(
            out,
            "{:<14} {:<7} {:<7} {:>3} pts  x{}",
            piece.id,
            piece.kind.name(),
            piece.color.name(),
            piece.points,
            piece.multiplier
        );
    }
    out
}

/// Per-step score breakdown followed by the total.
pub fn render_score(score: &ChainScore) -> String {
    let mut out = String::new();
    for step in &score.steps {
        let _ = writeln!(
            out,
            "  {:<14} at {}  {:>3} x {:<6} = {:.1}",
            step.piece_id,
            step.position,
            step.points,
            format_multiplier(step.applied_multiplier),
            step.contribution
        );
    }
    let _ = writeln!(out, "  total {} pts ({})", score.points, score.multiplier_trace);
    out
}

fn format_multiplier(value: f64) -> String {
    // Products such as 1.2 * 1.5 carry float noise.
    let rounded = (value * 1000.0).round() / 1000.0;
    rounded.to_string()
}

fn board_cell(board: &BoardConfig, pos: BoardPosition) -> char {
    if pos == board.king_position {
        'K'
    } else if board.is_missing(pos) {
        '#'
    } else if pos == board.starting_square {
        '*'
    } else {
        '.'
    }
}

fn render_grid(cell: impl Fn(BoardPosition) -> String) -> String {
    let mut lines = Vec::with_capacity(BOARD_SIZE as usize + 1);

    let mut header = String::from("  ");
    for y in 0..BOARD_SIZE {
        let _ = write!(header, " {:<width$}", y, width = CELL_WIDTH - 1);
    }
    lines.push(header);

    for x in 0..BOARD_SIZE {
        let mut line = format!("{} ", x);
        for pos in (0..BOARD_SIZE).filter_map(|y| BoardPosition::new(x, y)) {
            let _ = write!(line, " {:<width$}", cell(pos), width = CELL_WIDTH - 1);
        }
        lines.push(line);
    }

    let mut out = String::new();
    for line in lines {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
