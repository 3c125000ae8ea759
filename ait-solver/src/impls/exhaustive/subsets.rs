use std::iter::FusedIterator;

/// A lazy enumeration of every non-empty subset of `0..n`.
///
/// Subsets are produced by increasing size, and within a size in
/// lexicographic order of their (ascending) positions:
/// `[0], [1], [2], [0, 1], [0, 2], [1, 2], [0, 1, 2]` for `n = 3`.
/// Each subset is visited exactly once and only the current subset is held in
/// memory, so the state is O(n) regardless of the 2^n - 1 subsets visited.
#[derive(Clone, Debug)]
pub struct Subsets {
    n: usize,
    positions: Vec<usize>,
    state: State,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    Fresh,
    Running,
    Done,
}

impl Subsets {
    /// Enumerate the non-empty subsets of `0..n`
    pub fn new(n: usize) -> Self {
        Self {
            n,
            positions: Vec::with_capacity(n),
            state: State::Fresh,
        }
    }

    /// Rewind to the first subset
    pub fn reset(&mut self) {
        self.positions.clear();
        self.state = State::Fresh;
    }

    /// The total number of subsets this enumeration visits, saturating at `u128::MAX`
    pub fn total(&self) -> u128 {
        u32::try_from(self.n)
            .ok()
            .and_then(|n| 1u128.checked_shl(n))
            .map_or(u128::MAX, |count| count - 1)
    }

    /// Step to the next subset and borrow it, without allocating.
    pub fn advance(&mut self) -> Option<&[usize]> {
        match self.state {
            State::Done => return None,
            State::Fresh => {
                if self.n == 0 {
                    self.state = State::Done;
                    return None;
                }
                self.positions.push(0);
                self.state = State::Running;
            }
            State::Running => {
                if !self.next_of_same_size() && !self.first_of_next_size() {
                    self.state = State::Done;
                    return None;
                }
            }
        }
        Some(&self.positions)
    }

    // The rightmost position that can still move right is bumped, and every
    // position after it is packed immediately behind it.
    fn next_of_same_size(&mut self) -> bool {
        let k = self.positions.len();
        let Some(i) = (0..k).rev().find(|&i| self.positions[i] < self.n - k + i) else {
            return false;
        };

        self.positions[i] += 1;
        for j in i + 1..k {
            self.positions[j] = self.positions[j - 1] + 1;
        }
        true
    }

    fn first_of_next_size(&mut self) -> bool {
        let k = self.positions.len() + 1;
        if k > self.n {
            return false;
        }
        self.positions.clear();
        self.positions.extend(0..k);
        true
    }
}

impl Iterator for Subsets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(<[usize]>::to_vec)
    }
}

impl FusedIterator for Subsets {}
