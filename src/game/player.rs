use super::board::Cell;

/// One of the two seats. Red moves first and is represented by `+1`,
/// Yellow by `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }

    /// Numeric sign of this player: `+1` for Red, `-1` for Yellow.
    pub fn sign(self) -> i8 {
        match self {
            Player::Red => 1,
            Player::Yellow => -1,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Red.other(), Player::Yellow);
        assert_eq!(Player::Yellow.other(), Player::Red);
    }

    #[test]
    fn test_player_sign() {
        assert_eq!(Player::Red.sign(), 1);
        assert_eq!(Player::Yellow.sign(), -1);
        assert_eq!(Player::Red.sign(), -Player::Red.other().sign());
    }

    #[test]
    fn test_player_cell() {
        assert_eq!(Player::Red.to_cell().value(), 1);
        assert_eq!(Player::Yellow.to_cell().value(), -1);
    }
}
