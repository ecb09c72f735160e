use std::collections::HashMap;

use smallvec::SmallVec;

use super::{GameError, GameResult, PlayerId, Symbol};

/// Immutable two-way mapping between players and their symbols.
///
/// Players are numbered from 1 in the order their symbols were supplied.
#[derive(Clone, Debug)]
pub struct PlayerPool<S> {
    symbols: SmallVec<[S; 8]>,
    players: HashMap<S, PlayerId>,
}

impl<S: Symbol> PlayerPool<S> {
    pub fn new(player_symbols: Vec<S>, player_count: usize) -> GameResult<Self> {
        if player_count <= 1 {
            return Err(GameError::not_enough_players(player_count));
        }

        let mut players = HashMap::with_capacity(player_symbols.len());
        for (id, symbol) in (1..).zip(player_symbols.iter()) {
            players.insert(symbol.clone(), id);
        }
        if players.len() != player_symbols.len() {
            let symbols = format!("{:?}", player_symbols);
            return Err(GameError::duplicate_symbols(symbols));
        }

        if player_symbols.len() != player_count {
            return Err(GameError::symbol_count_mismatch(
                player_count,
                player_symbols.len(),
            ));
        }

        Ok(Self {
            symbols: SmallVec::from_vec(player_symbols),
            players,
        })
    }

    pub fn as_slice(&self) -> &[S] {
        self.symbols.as_slice()
    }

    pub fn player_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn contains(&self, player: PlayerId) -> bool {
        player >= 1 && (player as usize) <= self.player_count()
    }

    pub fn symbol(&self, player: PlayerId) -> Option<&S> {
        if !self.contains(player) {
            return None;
        }
        self.symbols.get(player as usize - 1)
    }

    pub fn player(&self, symbol: &S) -> Option<PlayerId> {
        self.players.get(symbol).copied()
    }

    /// Returns the player whose turn comes after `player`, wrapping around to the first one.
    pub fn next_after(&self, player: PlayerId) -> PlayerId {
        if player as usize >= self.player_count() {
            1
        } else {
            player + 1
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new_validates_config() {
        assert_eq!(
            PlayerPool::new(vec!['X', 'O'], 0).unwrap_err(),
            GameError::not_enough_players(0)
        );
        assert_eq!(
            PlayerPool::new(vec!['O'], 1).unwrap_err(),
            GameError::not_enough_players(1)
        );
        assert_eq!(
            PlayerPool::new(vec!['X', 'O', 'X'], 2).unwrap_err(),
            GameError::duplicate_symbols("['X', 'O', 'X']".to_string())
        );
        assert_eq!(
            PlayerPool::new(vec!['X', 'O', '*'], 2).unwrap_err(),
            GameError::symbol_count_mismatch(2, 3)
        );
        assert_eq!(
            PlayerPool::new(vec!['X', 'O', '*'], 4).unwrap_err(),
            GameError::symbol_count_mismatch(4, 3)
        );
    }

    #[test]
    fn test_lookup_both_ways() {
        let pool = PlayerPool::new(vec!['O', 'X', '*'], 3).unwrap();

        assert_eq!(pool.symbol(1), Some(&'O'));
        assert_eq!(pool.symbol(3), Some(&'*'));
        assert_eq!(pool.symbol(0), None);
        assert_eq!(pool.symbol(4), None);

        assert_eq!(pool.player(&'X'), Some(2));
        assert_eq!(pool.player(&'?'), None);

        itertools::assert_equal(pool.as_slice(), &['O', 'X', '*']);
    }

    #[test]
    fn test_large_pool() {
        let symbols: Vec<u32> = (100..112).collect();
        let pool = PlayerPool::new(symbols, 12).unwrap();

        assert_eq!(pool.player_count(), 12);
        assert_eq!(pool.player(&100), Some(1));
        assert_eq!(pool.player(&111), Some(12));
        assert_eq!(pool.symbol(12), Some(&111));
        assert_eq!(pool.next_after(12), 1);
    }

    #[test]
    fn test_cyclic_iteration() {
        let pool = PlayerPool::new(vec![10u8, 20, 30], 3).unwrap();
        let mut current = 1;
        // check that players cycle endlessly
        itertools::assert_equal(
            std::iter::from_fn(|| {
                current = pool.next_after(current);
                Some(current)
            })
            .take(7),
            [2, 3, 1, 2, 3, 1, 2],
        );
    }
}
