//! End-to-end tournaments through the public API.

use connect_arena::ai::{MinimaxAgent, OneStepLookaheadAgent, RandomAgent, ScriptedAgent};
use connect_arena::arena::{Arena, MatchTally, TextRenderer};
use connect_arena::error::GameError;
use connect_arena::game::{BoardConfig, ConnectFour, Outcome, Player};

fn standard_arena() -> Arena<ConnectFour> {
    Arena::new(ConnectFour::new(BoardConfig::default()).unwrap())
}

#[test]
fn tally_accounts_for_every_game() {
    let mut arena = standard_arena();
    for games in [2, 4, 10] {
        let mut a = RandomAgent::from_seed(1);
        let mut b = OneStepLookaheadAgent::from_seed(2);
        let report = arena.play_tournament(&mut a, &mut b, games).unwrap();
        assert_eq!(report.tally.total(), games);
        assert_eq!(report.halves[0].total(), games / 2);
        assert_eq!(report.halves[1].total(), games / 2);
    }
}

#[test]
fn identical_deterministic_agents_split_evenly() {
    let mut arena = standard_arena();
    let mut a = MinimaxAgent::new(2);
    let mut b = MinimaxAgent::new(2);
    let report = arena.play_tournament(&mut a, &mut b, 4).unwrap();

    // Every game is the same game, so each half sees the same seat results
    // and the agents' records mirror each other.
    assert_eq!(report.halves[0], report.halves[1]);
    assert_eq!(report.tally.agent_a_wins, report.tally.agent_b_wins);
}

#[test]
fn stacking_agents_first_seat_always_wins() {
    let mut arena = standard_arena();
    let mut left = ScriptedAgent::constant(0);
    let mut right = ScriptedAgent::constant(1);

    let outcome = arena.play_one_match(&mut left, &mut right).unwrap();
    assert_eq!(outcome, Outcome::Win(Player::Red));

    let report = arena.play_tournament(&mut left, &mut right, 2).unwrap();
    assert_eq!(
        report.tally,
        MatchTally {
            agent_a_wins: 1,
            agent_b_wins: 1,
            draws: 0,
        }
    );
}

#[test]
fn verbose_match_prints_each_position() {
    let mut arena = standard_arena()
        .with_renderer(Box::new(TextRenderer::new(std::io::sink())));
    let mut left = ScriptedAgent::constant(0);
    let mut right = ScriptedAgent::constant(1);
    assert_eq!(
        arena.play_one_match(&mut left, &mut right).unwrap(),
        Outcome::Win(Player::Red)
    );
}

#[test]
fn minimax_beats_random() {
    let mut arena = standard_arena();
    let mut minimax = MinimaxAgent::new(3);
    let mut random = RandomAgent::from_seed(2024);
    let report = arena.play_tournament(&mut minimax, &mut random, 10).unwrap();
    assert!(
        report.tally.agent_a_wins >= 8,
        "minimax only won {} of 10",
        report.tally.agent_a_wins
    );
}

#[test]
fn uneven_tournament_is_rejected() {
    let mut arena = standard_arena();
    let mut a = RandomAgent::from_seed(1);
    let mut b = RandomAgent::from_seed(2);
    assert_eq!(
        arena.play_tournament(&mut a, &mut b, 7),
        Err(GameError::UnevenTournament { games: 7 })
    );
}

#[test]
fn small_board_variant_plays_to_completion() {
    let config = BoardConfig {
        height: 4,
        width: 5,
        win_length: 3,
    };
    let mut arena = Arena::new(ConnectFour::new(config).unwrap());
    let mut a = MinimaxAgent::new(3);
    let mut b = OneStepLookaheadAgent::from_seed(3);
    let report = arena.play_tournament(&mut a, &mut b, 4).unwrap();
    assert_eq!(report.tally.total(), 4);
}
