use std::fmt;

/// Maximum number of columns a board may have; one bit per column.
pub const MAX_COLS: usize = 64;

/// Set of playable columns, stored as one bit per column.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidMoves {
    bits: u64,
    width: usize,
}

impl ValidMoves {
    /// An empty set over a board of `width` columns.
    pub fn empty(width: usize) -> Self {
        debug_assert!(width <= MAX_COLS);
        ValidMoves { bits: 0, width }
    }

    pub fn insert(&mut self, column: usize) {
        debug_assert!(column < self.width);
        self.bits |= 1 << column;
    }

    /// Whether `column` is a legal move. Out-of-range columns never are.
    pub fn contains(&self, column: usize) -> bool {
        column < self.width && self.bits & (1 << column) != 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Number of columns on the board this set was computed for.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Legal columns in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.width).filter(move |&col| self.contains(col))
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// One flag per column, as the policy-vector mask external trainers use.
    pub fn to_mask(&self) -> Vec<bool> {
        (0..self.width).map(|col| self.contains(col)).collect()
    }
}

impl fmt::Debug for ValidMoves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut moves = ValidMoves::empty(7);
        moves.insert(0);
        moves.insert(6);
        assert!(moves.contains(0));
        assert!(moves.contains(6));
        assert!(!moves.contains(3));
        assert!(!moves.contains(7));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn test_iter_is_ascending() {
        let mut moves = ValidMoves::empty(7);
        for col in [5, 1, 3] {
            moves.insert(col);
        }
        assert_eq!(moves.to_vec(), vec![1, 3, 5]);
    }

    #[test]
    fn test_empty_set() {
        let moves = ValidMoves::empty(7);
        assert!(moves.is_empty());
        assert_eq!(moves.to_mask(), vec![false; 7]);
    }

    #[test]
    fn test_widest_board() {
        let mut moves = ValidMoves::empty(MAX_COLS);
        moves.insert(MAX_COLS - 1);
        assert!(moves.contains(MAX_COLS - 1));
        assert_eq!(format!("{moves:?}"), "{63}");
    }
}
