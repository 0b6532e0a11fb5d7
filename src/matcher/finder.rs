//! Longest-match search over the trailing window.
//!
//! Picks the longest prefix of the lookahead that starts somewhere in the
//! window; among equally long candidates the oldest start wins. Candidate
//! starts are found by scanning the window for the lookahead's first byte,
//! and the search stops at the first candidate that matches the whole
//! lookahead.

use memchr::memchr_iter;

use super::window::Window;
use crate::format::{MAX_MATCH, MIN_MATCH};

/// A back-reference candidate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    /// Bytes back from the cursor to the start of the run (1-4096)
    pub distance: usize,
    /// Run length (3-16)
    pub length: usize,
}

/// Match finder with a fixed minimum length
#[derive(Clone, Copy, Debug)]
pub struct MatchFinder {
    min_match: usize,
}

impl MatchFinder {
    pub fn new() -> Self {
        Self { min_match: MIN_MATCH }
    }

    /// Find the longest reusable run for the window's lookahead.
    ///
    /// Returns `None` when the lookahead is empty or no run of at least
    /// three bytes exists.
    pub fn find(&self, window: &Window<'_>) -> Option<Match> {
        let lookahead = window.lookahead();
        let first = *lookahead.first()?;
        let base = window.start();

        let mut best: Option<Match> = None;
        for offset in memchr_iter(first, window.history()).map(|i| base + i) {
            let length = common_prefix(window.run_from(offset), lookahead);
            if best.map_or(true, |b| length > b.length) {
                best = Some(Match { distance: window.distance_to(offset), length });
                if length == lookahead.len() {
                    break;
                }
            }
        }

        best.filter(|m| m.length >= self.min_match)
    }
}

impl Default for MatchFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Length of the shared prefix, capped at one reference's worth
#[inline]
fn common_prefix(run: &[u8], lookahead: &[u8]) -> usize {
    run.iter().zip(lookahead).take(MAX_MATCH).take_while(|(a, b)| a == b).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::WINDOW_SIZE;

    fn find_at(input: &[u8], pos: usize) -> Option<Match> {
        MatchFinder::new().find(&Window::at(input, pos))
    }

    /// Literal reading of the search order: try every length from the full
    /// lookahead down, and for each length scan the window oldest first.
    fn find_naive(input: &[u8], pos: usize) -> Option<Match> {
        let window = Window::at(input, pos);
        let lookahead = window.lookahead();
        for length in (1..=lookahead.len()).rev() {
            for offset in window.start()..pos {
                let run = window.run_from(offset);
                if run.len() >= length && run[..length] == lookahead[..length] {
                    if length < MIN_MATCH {
                        return None;
                    }
                    return Some(Match { distance: pos - offset, length });
                }
            }
        }
        None
    }

    fn xorshift(size: usize, seed: u64, alphabet: u8) -> Vec<u8> {
        let mut state = seed;
        (0..size)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                (state % alphabet as u64) as u8
            })
            .collect()
    }

    #[test]
    fn test_no_history() {
        assert_eq!(find_at(b"abcabc", 0), None);
    }

    #[test]
    fn test_simple_match() {
        assert_eq!(find_at(b"abcdabcd", 4), Some(Match { distance: 4, length: 4 }));
    }

    #[test]
    fn test_short_matches_rejected() {
        // "ab" repeats but is only two bytes long
        assert_eq!(find_at(b"abxab", 3), None);
        // exactly three is accepted
        assert_eq!(find_at(b"abcxabc", 4), Some(Match { distance: 4, length: 3 }));
    }

    #[test]
    fn test_overlapping_run() {
        // two bytes of history, the run continues into the lookahead
        assert_eq!(find_at(b"ababababab", 2), Some(Match { distance: 2, length: 8 }));
        assert_eq!(find_at(&[0u8; 40], 1), Some(Match { distance: 1, length: 16 }));
    }

    #[test]
    fn test_oldest_wins_ties() {
        // "abc" occurs at 0 and 4; the oldest start is preferred
        assert_eq!(find_at(b"abc-abc-abc", 8), Some(Match { distance: 8, length: 3 }));
    }

    #[test]
    fn test_longer_beats_older() {
        assert_eq!(find_at(b"abcX-abcdY-abcd", 11), Some(Match { distance: 6, length: 4 }));
    }

    #[test]
    fn test_length_capped_by_lookahead() {
        let input = b"hello world, hello";
        assert_eq!(find_at(input, 13), Some(Match { distance: 13, length: 5 }));
    }

    fn pattern_then_repeat(gap: usize) -> (Vec<u8>, usize) {
        let pattern = b"UNIQUEPATTERN!";
        let mut input = pattern.to_vec();
        input.extend(std::iter::repeat(b'.').take(gap));
        let pos = input.len();
        input.extend_from_slice(pattern);
        (input, pos)
    }

    #[test]
    fn test_window_bound() {
        // earlier copy starts exactly 4096 bytes back
        let (input, pos) = pattern_then_repeat(WINDOW_SIZE - 14);
        assert_eq!(find_at(&input, pos), Some(Match { distance: WINDOW_SIZE, length: 14 }));

        // one byte further and it is out of reach
        let (input, pos) = pattern_then_repeat(WINDOW_SIZE - 13);
        assert_eq!(find_at(&input, pos), None);
        assert_eq!(find_naive(&input, pos), None);
    }

    #[test]
    fn test_matches_naive_search() {
        for (seed, alphabet) in [(1, 2), (7, 3), (42, 4), (99, 16), (1234, 255)] {
            let input = xorshift(3000, seed, alphabet);
            for pos in (0..input.len()).step_by(7) {
                assert_eq!(
                    find_at(&input, pos),
                    find_naive(&input, pos),
                    "seed {seed} alphabet {alphabet} pos {pos}"
                );
            }
        }
    }

    #[test]
    fn test_never_below_minimum() {
        let input = xorshift(5000, 5, 6);
        for pos in 0..input.len() {
            if let Some(m) = find_at(&input, pos) {
                assert!(m.length >= MIN_MATCH && m.length <= MAX_MATCH);
                assert!(m.distance >= 1 && m.distance <= WINDOW_SIZE);
            }
        }
    }
}
