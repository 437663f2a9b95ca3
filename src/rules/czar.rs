//! Czar selection policies.
//!
//! A game loop calls `select_czar` once per round to pick who judges it.
//! Policies are independent of the card pool.

use crate::core::{GameRng, PlayerId};

/// Policy for picking the judge of a round.
///
/// ## Implementation Notes
///
/// - Called exactly once per round, before white cards are played
/// - `players` is the current table in seating order; it may change
///   between calls as players join or leave
/// - Return `None` only when `players` is empty
pub trait CzarPolicy {
    /// Pick the czar for the next round.
    fn select_czar(&mut self, players: &[PlayerId]) -> Option<PlayerId>;
}

/// Round-robin through the table in seating order.
///
/// Remembers the last czar, so a player leaving mid-game does not reset
/// the rotation. If the last czar has left the table, the next czar is the
/// first remaining player with a higher `PlayerId` (wrapping to the first
/// seat), which follows seating order only when seats are numbered in order.
///
/// ```
/// use cardczar::core::PlayerId;
/// use cardczar::rules::{CzarPolicy, RotatingCzar};
///
/// let players: Vec<_> = PlayerId::all(3).collect();
/// let mut policy = RotatingCzar::new();
///
/// assert_eq!(policy.select_czar(&players), Some(PlayerId::new(0)));
/// assert_eq!(policy.select_czar(&players), Some(PlayerId::new(1)));
/// assert_eq!(policy.select_czar(&players), Some(PlayerId::new(2)));
/// assert_eq!(policy.select_czar(&players), Some(PlayerId::new(0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RotatingCzar {
    last: Option<PlayerId>,
}

impl RotatingCzar {
    /// Create a rotation starting at the first seat.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently selected czar.
    #[must_use]
    pub fn last(&self) -> Option<PlayerId> {
        self.last
    }
}

impl CzarPolicy for RotatingCzar {
    fn select_czar(&mut self, players: &[PlayerId]) -> Option<PlayerId> {
        let next = match self.last {
            None => *players.first()?,
            Some(last) => match players.iter().position(|&p| p == last) {
                Some(i) => players[(i + 1) % players.len()],
                // Last czar left: next higher id, else the first seat
                None => players
                    .iter()
                    .copied()
                    .find(|&p| p > last)
                    .or_else(|| players.first().copied())?,
            },
        };

        self.last = Some(next);
        Some(next)
    }
}

/// Uniformly random czar each round, from a seeded RNG.
#[derive(Clone, Debug)]
pub struct RandomCzar {
    rng: GameRng,
}

impl RandomCzar {
    /// Create a policy with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed).for_context("czar"),
        }
    }
}

impl CzarPolicy for RandomCzar {
    fn select_czar(&mut self, players: &[PlayerId]) -> Option<PlayerId> {
        self.rng.choose(players).copied()
    }
}

/// The winner of the previous round judges the next one.
///
/// Falls back to rotation for the first round, or when the recorded
/// winner is no longer at the table.
#[derive(Clone, Debug, Default)]
pub struct WinnerCzar {
    winner: Option<PlayerId>,
    fallback: RotatingCzar,
}

impl WinnerCzar {
    /// Create a policy with no recorded winner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the winner of the round just judged.
    pub fn record_winner(&mut self, player: PlayerId) {
        self.winner = Some(player);
    }
}

impl CzarPolicy for WinnerCzar {
    fn select_czar(&mut self, players: &[PlayerId]) -> Option<PlayerId> {
        match self.winner.take() {
            Some(winner) if players.contains(&winner) => {
                self.fallback.last = Some(winner);
                Some(winner)
            }
            _ => self.fallback.select_czar(players),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(n: usize) -> Vec<PlayerId> {
        PlayerId::all(n).collect()
    }

    #[test]
    fn test_rotating_wraps() {
        let players = table(2);
        let mut policy = RotatingCzar::new();

        let picks: Vec<_> = (0..5).filter_map(|_| policy.select_czar(&players)).collect();
        assert_eq!(
            picks,
            vec![PlayerId(0), PlayerId(1), PlayerId(0), PlayerId(1), PlayerId(0)]
        );
        assert_eq!(policy.last(), Some(PlayerId(0)));
    }

    #[test]
    fn test_rotating_after_czar_leaves() {
        let mut policy = RotatingCzar::new();
        let players = table(4);

        policy.select_czar(&players);
        assert_eq!(policy.select_czar(&players), Some(PlayerId(1)));

        // Player 1 leaves
        let remaining = vec![PlayerId(0), PlayerId(2), PlayerId(3)];
        assert_eq!(policy.select_czar(&remaining), Some(PlayerId(2)));

        // Player 3 leaves while czar
        policy.select_czar(&remaining);
        let remaining = vec![PlayerId(0), PlayerId(2)];
        assert_eq!(policy.select_czar(&remaining), Some(PlayerId(0)));
    }

    #[test]
    fn test_rotating_after_czar_leaves_uses_id_order() {
        let mut policy = RotatingCzar::new();
        let seating = vec![PlayerId(3), PlayerId(0), PlayerId(5)];

        assert_eq!(policy.select_czar(&seating), Some(PlayerId(3)));
        assert_eq!(policy.select_czar(&seating), Some(PlayerId(0)));

        // Player 0 leaves: the next czar is the lowest id above 0, not the
        // next seat (player 5)
        let remaining = vec![PlayerId(3), PlayerId(5)];
        assert_eq!(policy.select_czar(&remaining), Some(PlayerId(3)));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(RotatingCzar::new().select_czar(&[]), None);
        assert_eq!(RandomCzar::new(1).select_czar(&[]), None);
        assert_eq!(WinnerCzar::new().select_czar(&[]), None);
    }

    #[test]
    fn test_random_is_seeded_and_in_table() {
        let players = table(5);
        let mut a = RandomCzar::new(8);
        let mut b = RandomCzar::new(8);

        for _ in 0..20 {
            let pick = a.select_czar(&players);
            assert_eq!(pick, b.select_czar(&players));
            assert!(pick.is_some_and(|p| players.contains(&p)));
        }
    }

    #[test]
    fn test_winner_czar() {
        let players = table(3);
        let mut policy = WinnerCzar::new();

        // No winner yet: rotation
        assert_eq!(policy.select_czar(&players), Some(PlayerId(0)));

        policy.record_winner(PlayerId(2));
        assert_eq!(policy.select_czar(&players), Some(PlayerId(2)));

        // No new winner recorded: rotation continues after the last czar
        assert_eq!(policy.select_czar(&players), Some(PlayerId(0)));

        // Winner left the table
        policy.record_winner(PlayerId(2));
        assert_eq!(policy.select_czar(&table(2)), Some(PlayerId(1)));
    }

    #[test]
    fn test_policies_as_trait_objects() {
        let players = table(3);
        let mut policies: Vec<Box<dyn CzarPolicy>> = vec![
            Box::new(RotatingCzar::new()),
            Box::new(RandomCzar::new(0)),
            Box::new(WinnerCzar::new()),
        ];

        for policy in &mut policies {
            let czar = policy.select_czar(&players);
            assert!(czar.is_some_and(|p| players.contains(&p)));
        }
    }
}
