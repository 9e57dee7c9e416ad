//! Bottom-up Fibonacci sequence computation.
//!
//! Convention: `F(0) = 0`, `F(1) = 1`, `F(i) = F(i-1) + F(i-2)`.
//! Terms are `u64`, which holds every term up to `F(93)`.

use crate::error::{FibsvcError, Result};

/// Largest index whose term fits in `u64`.
pub const MAX_INDEX: i64 = 93;

/// Return `[F(0), F(1), ..., F(n)]`.
///
/// Runs in O(n) time and space. Negative `n` is rejected with
/// `InvalidInput`; `n > MAX_INDEX` is rejected with `Overflow`.
pub fn sequence(n: i64) -> Result<Vec<u64>> {
    if n < 0 {
        return Err(FibsvcError::InvalidInput(format!(
            "fibonacci index must be non-negative, got {n}"
        )));
    }
    if n > MAX_INDEX {
        return Err(FibsvcError::Overflow(n));
    }

    let len = n as usize + 1;
    let mut seq: Vec<u64> = Vec::with_capacity(len);
    seq.push(0);
    if len > 1 {
        seq.push(1);
    }

    let (mut prev, mut cur) = (0u64, 1u64);
    while seq.len() < len {
        let next = prev.checked_add(cur).ok_or(FibsvcError::Overflow(n))?;
        seq.push(next);
        prev = cur;
        cur = next;
    }

    Ok(seq)
}
