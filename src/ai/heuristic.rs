use crate::game::{Board, Player};

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i64;
}

/// Score per own piece in the center column.
pub const CENTER_WEIGHT: i64 = 3;

/// Default heuristic that scans every `win_length` window and scores
/// completed lines, open threats and opponent threats.
///
/// The patterns are relative to the run length; on a standard board they are
/// 4 own (+100), 3 own + 1 empty (+5), 2 own + 2 empty (+2) and
/// 3 opponent + 1 empty (-4).
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl WindowHeuristic {
    fn score_window(own: usize, opp: usize, empty: usize, len: usize) -> i64 {
        let mut score = 0;

        if own == len {
            score += 100;
        } else if own > 0 && own + 1 == len && empty == 1 {
            score += 5;
        } else if own > 0 && own + 2 == len && empty == 2 {
            score += 2;
        }

        if opp > 0 && opp + 1 == len && empty == 1 {
            score -= 4;
        }

        score
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i64 {
        let own_cell = player.to_cell();
        let mut score = 0;

        // Center column bonus
        let center = board.width() / 2;
        let center_count = (0..board.height())
            .filter(|&row| board.get(row, center) == own_cell)
            .count();
        score += center_count as i64 * CENTER_WEIGHT;

        for window in board.windows() {
            let mut own = 0;
            let mut opp = 0;
            let mut empty = 0;
            for cell in window {
                match cell.player() {
                    Some(owner) if owner == player => own += 1,
                    Some(_) => opp += 1,
                    None => empty += 1,
                }
            }
            score += Self::score_window(own, opp, empty, board.win_length());
        }

        score
    }
}
