use crate::game::Player;

/// Results of games counted by seat, regardless of which agent sat where.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeatTally {
    pub first_seat_wins: usize,
    pub second_seat_wins: usize,
    pub draws: usize,
}

impl SeatTally {
    /// Count one finished game; `None` is a draw.
    pub fn record(&mut self, winner: Option<Player>) {
        match winner {
            Some(Player::Red) => self.first_seat_wins += 1,
            Some(Player::Yellow) => self.second_seat_wins += 1,
            None => self.draws += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.first_seat_wins + self.second_seat_wins + self.draws
    }
}

/// Results of a tournament from the point of view of the two agents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchTally {
    pub agent_a_wins: usize,
    pub agent_b_wins: usize,
    pub draws: usize,
}

impl MatchTally {
    /// Count one finished game: `Some(true)` if agent A won, `Some(false)` if
    /// agent B won, `None` for a draw.
    pub fn record(&mut self, a_won: Option<bool>) {
        match a_won {
            Some(true) => self.agent_a_wins += 1,
            Some(false) => self.agent_b_wins += 1,
            None => self.draws += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.agent_a_wins + self.agent_b_wins + self.draws
    }

    /// Fraction of games won by agent A.
    pub fn a_win_rate(&self) -> f32 {
        Self::rate(self.agent_a_wins, self.total())
    }

    /// Fraction of games won by agent B.
    pub fn b_win_rate(&self) -> f32 {
        Self::rate(self.agent_b_wins, self.total())
    }

    pub fn draw_rate(&self) -> f32 {
        Self::rate(self.draws, self.total())
    }

    fn rate(count: usize, total: usize) -> f32 {
        if total == 0 {
            return 0.0;
        }
        count as f32 / total as f32
    }
}

/// Full outcome of a seat-balanced tournament.
///
/// `halves[0]` covers the games where agent A moved first, `halves[1]` those
/// where agent B did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TournamentReport {
    pub tally: MatchTally,
    pub halves: [SeatTally; 2],
}

impl TournamentReport {
    /// Record a game of the given half. `winner` is the seat that won.
    pub(crate) fn record(&mut self, half: usize, winner: Option<Player>) {
        self.halves[half].record(winner);
        // Agent A holds the first seat in half 0 and the second in half 1.
        let a_seat = if half == 0 { Player::Red } else { Player::Yellow };
        self.tally.record(winner.map(|seat| seat == a_seat));
    }
}
