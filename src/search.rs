//! Subset search over the board.
//!
//! A capture takes either one board card of the played rank or a set of
//! board cards whose ranks add up to it. When any single card matches,
//! combinations are not legal for that rank, so the search stops at singles.

use alloc::vec::Vec;

use crate::card::{Card, Suit};

/// Sums the ranks of `cards` without overflow.
pub(crate) fn rank_sum<'a>(cards: impl IntoIterator<Item = &'a Card>) -> u32 {
    cards.into_iter().map(|c| u32::from(c.rank)).sum()
}

/// Returns whether the board holds a card of exactly `rank`.
#[must_use]
pub fn has_direct_match(rank: u8, board: &[Card]) -> bool {
    board.iter().any(|c| c.rank == rank)
}

/// Lists every legal capture for a played card of `rank`.
///
/// Each entry is a list of ascending board indices. If any board card has
/// the same rank, only the single-card captures are returned. Otherwise
/// every multi-card subset whose ranks sum to `rank` is returned, in
/// lexicographic index order.
///
/// # Example
///
/// ```
/// use shkuba::{Card, Suit};
/// use shkuba::search::capture_subsets;
///
/// let board = [
///     Card::new(Suit::Hearts, 4),
///     Card::new(Suit::Clubs, 5),
///     Card::new(Suit::Spades, 9),
/// ];
/// assert_eq!(capture_subsets(9, &board), vec![vec![2]]);
/// ```
#[must_use]
pub fn capture_subsets(rank: u8, board: &[Card]) -> Vec<Vec<usize>> {
    let singles: Vec<Vec<usize>> = board
        .iter()
        .enumerate()
        .filter(|(_, c)| c.rank == rank)
        .map(|(i, _)| alloc::vec![i])
        .collect();
    if !singles.is_empty() {
        return singles;
    }

    let mut found = Vec::new();
    let mut current = Vec::new();
    collect_sums(board, 0, u32::from(rank), &mut current, &mut found);
    found
}

// Ranks are at least 1, so a branch can stop as soon as its sum overshoots.
fn collect_sums(
    board: &[Card],
    start: usize,
    remaining: u32,
    current: &mut Vec<usize>,
    found: &mut Vec<Vec<usize>>,
) {
    for index in start..board.len() {
        let rank = u32::from(board[index].rank);
        if rank == 0 || rank > remaining {
            continue;
        }
        current.push(index);
        if rank == remaining {
            if current.len() > 1 {
                found.push(current.clone());
            }
        } else {
            collect_sums(board, index + 1, remaining - rank, current, found);
        }
        current.pop();
    }
}

/// Preference key for choosing among captures of the same played card.
///
/// Compared lexicographically: a subset holding a seven, then one holding
/// a six or seven of Diamonds, then the larger subset.
pub(crate) fn preference(subset: &[usize], board: &[Card]) -> (bool, bool, usize) {
    let cards = || subset.iter().map(|&i| board[i]);
    let has_seven = cards().any(|c| c.rank == 7);
    let has_diamond_bonus = cards().any(|c| c.suit == Suit::Diamonds && matches!(c.rank, 6 | 7));
    (has_seven, has_diamond_bonus, subset.len())
}

/// Picks the most valuable legal capture for a played card of `rank`.
///
/// Returns `None` if nothing on the board can be captured. Ties keep the
/// first subset in search order.
#[must_use]
pub fn best_capture(rank: u8, board: &[Card]) -> Option<Vec<usize>> {
    let mut best: Option<(Vec<usize>, (bool, bool, usize))> = None;
    for subset in capture_subsets(rank, board) {
        let key = preference(&subset, board);
        if best.as_ref().is_none_or(|(_, best_key)| key > *best_key) {
            best = Some((subset, key));
        }
    }
    best.map(|(subset, _)| subset)
}
