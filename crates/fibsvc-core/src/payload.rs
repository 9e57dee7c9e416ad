//! `/payload` result: a random index and its Fibonacci sequence.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{FibsvcError, Result};
use crate::fib;

/// Created fresh per request, serialized, then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadResult {
    #[serde(rename = "RandNum")]
    pub random_number: i64,
    #[serde(rename = "FibSeq")]
    pub fibonacci_sequence: Vec<u64>,
}

impl PayloadResult {
    /// Draw `n` uniformly from `[0, max_random_number)` and compute `F(0..=n)`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, max_random_number: i64) -> Result<Self> {
        if max_random_number <= 0 {
            return Err(FibsvcError::InvalidInput(format!(
                "max_random_number must be positive, got {max_random_number}"
            )));
        }
        let n = rng.gen_range(0..max_random_number);
        Self::for_index(n)
    }

    pub fn for_index(n: i64) -> Result<Self> {
        Ok(Self {
            random_number: n,
            fibonacci_sequence: fib::sequence(n)?,
        })
    }
}
