// Minimal-change enumeration of m-subsets of {0, .., n - 1}.
//
// The working array `idx` is always strictly increasing. It starts at the
// largest combination [n - m, .., n - 1] and walks down to [0, .., m - 1].
// A cursor `k` marks the active position, and every position below the cursor
// sits at its "home" value (`idx[i] == i`).
//
// Each step first moves the active position down by one while it is not home,
// which only changes a single coordinate. Once it is home we look upward for
// the next position that is not home, move it down by one, and if it is still
// not home pull every position below it up to the densest run that ends just
// below it, restarting from the first position. When the last position is
// home the array is [0, .., m - 1] and the walk is over.

use std::iter::FusedIterator;

use crate::error::{GraphError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// the initial combination has not been handed out yet
    Fresh,
    Running,
    Done,
}

/// An iterator over every m-subset of `{0, .., n - 1}`, visited in decreasing
/// minimal-change order.
///
/// Each subset is a strictly increasing index array. The first one is
/// `[n - m, .., n - 1]`, the last one is `[0, .., m - 1]`, and exactly
/// `C(n, m)` are produced. Use [`Combinations::next_ref`] to borrow the
/// working array instead of allocating one `Vec` per step.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    idx: Vec<usize>,
    cursor: usize,
    state: State,
    /// `None` once `C(n, m)` overflows `usize`
    remaining: Option<usize>,
}

impl Combinations {
    /// Fails with [`GraphError::InvalidCombinationSize`] unless `n > m >= 1`.
    pub fn new(n: usize, m: usize) -> Result<Self> {
        if m < 1 || n <= m {
            return Err(GraphError::InvalidCombinationSize { n, m });
        }

        Ok(Self::with_size(n, m))
    }

    /// the caller guarantees `n > m >= 1`
    pub(crate) fn with_size(n: usize, m: usize) -> Self {
        debug_assert!(m >= 1 && n > m, "cannot choose {m} of {n} items");

        Self {
            n,
            idx: (n - m..n).collect(),
            cursor: 0,
            state: State::Fresh,
            remaining: binomial(n, m),
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn m(&self) -> usize {
        self.idx.len()
    }

    /// advance to the next combination and borrow it
    pub fn next_ref(&mut self) -> Option<&[usize]> {
        if self.advance() {
            if let Some(remaining) = self.remaining.as_mut() {
                *remaining -= 1;
            }
            Some(&self.idx)
        } else {
            None
        }
    }

    fn finish(&mut self) -> bool {
        self.state = State::Done;
        false
    }

    /// move `idx` to the next combination, return false when there is none
    fn advance(&mut self) -> bool {
        match self.state {
            State::Fresh => {
                self.state = State::Running;
                return true;
            }
            State::Done => return false,
            State::Running => {}
        }

        let m = self.idx.len();
        let mut k = self.cursor;

        if self.idx[k] > k {
            self.idx[k] -= 1;
            return true;
        }
        if m == 1 {
            return self.finish();
        }

        // find the next position that is not home
        k += 1;
        while k < m && self.idx[k] == k {
            k += 1;
        }
        if k == m {
            return self.finish();
        }

        self.idx[k] -= 1;
        if self.idx[k] != k {
            let top = self.idx[k];
            for i in 0..k {
                self.idx[i] = top - (k - i);
            }
            k = 0;
        }
        self.cursor = k;

        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_ref().map(<[usize]>::to_vec)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Combinations {}

/// `C(n, k)`, or `None` if it does not fit in a `usize`
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let limit = usize::MAX as u128;
    let mut result = 1u128;
    for i in 0..k {
        // C(n, i) * (n - i) is C(n, i + 1) * (i + 1), so the division is exact.
        // result stays within usize and n - i is a usize, so the product fits in u128
        result = result * (n - i) as u128 / (i as u128 + 1);
        if result > limit {
            return None;
        }
    }
    usize::try_from(result).ok()
}
