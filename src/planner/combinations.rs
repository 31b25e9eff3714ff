//! Lexicographic index combinations.
//!
//! Enumerates every strictly increasing `k`-tuple of indices drawn from
//! `0..n`, in lexicographic order: `[0,1,2]`, `[0,1,3]`, ..., `[n-k,..,n-1]`.
//! The batch planner depends on this exact order for its tie-breaks.

/// Streaming enumerator over `k`-combinations of `0..n`.
///
/// Yields borrowed index slices without allocating per combination.
/// `k == 0` and `k > n` yield nothing.
///
/// # Example
/// ```
/// use u_batch::planner::Combinations;
///
/// let mut combos = Combinations::new(4, 2);
/// let mut seen = Vec::new();
/// while let Some(indices) = combos.next_indices() {
///     seen.push(indices.to_vec());
/// }
/// assert_eq!(seen[0], vec![0, 1]);
/// assert_eq!(seen[5], vec![2, 3]);
/// assert_eq!(seen.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl Combinations {
    /// Creates an enumerator over `k`-combinations of `0..n`.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            indices: (0..k).collect(),
            started: false,
            exhausted: k == 0 || k > n,
        }
    }

    /// Advances to the next combination.
    pub fn next_indices(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.indices);
        }

        // Rightmost position that has not reached its maximum value.
        let offset = self.n - self.k;
        let mut pos = self.k;
        loop {
            if pos == 0 {
                self.exhausted = true;
                return None;
            }
            pos -= 1;
            if self.indices[pos] != pos + offset {
                break;
            }
        }

        self.indices[pos] += 1;
        for j in pos + 1..self.k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(&self.indices)
    }
}
