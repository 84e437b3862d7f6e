use rand::{rngs::OsRng, RngCore};

use crate::error::{Error, Result};

/// A source of uniformly distributed integers in a caller supplied range.
///
/// Production code uses [`OsEntropy`]; tests inject scripted implementations so that
/// generation becomes reproducible.
pub trait SecureRandom {
    /// Returns a value drawn uniformly from `[0, bound)`. `bound` must be greater than
    /// zero.
    fn next_bounded(&mut self, bound: u32) -> Result<u32>;
}

/// [`SecureRandom`] backed by the operating system's CSPRNG.
///
/// There is no fallback: if the entropy source cannot be read the draw fails with
/// [`Error::Entropy`] instead of degrading to a weaker generator.
#[derive(Debug, Default)]
pub struct OsEntropy;

impl SecureRandom for OsEntropy {
    fn next_bounded(&mut self, bound: u32) -> Result<u32> {
        if bound == 0 {
            return Err(Error::InvalidBound);
        }

        // Rejection sampling: only draws below the largest multiple of `bound` in the
        // u32 range are accepted, so the modulo does not skew towards low values.
        let zone = (1u64 << 32) / u64::from(bound) * u64::from(bound);
        loop {
            let mut buf = [0u8; 4];
            OsRng.try_fill_bytes(&mut buf)?;
            let draw = u64::from(u32::from_le_bytes(buf));
            if draw < zone {
                return Ok((draw % u64::from(bound)) as u32);
            }
        }
    }
}

/// Permutes `items` in place with a Fisher-Yates shuffle driven by `rng`.
pub fn shuffle<T>(rng: &mut dyn SecureRandom, items: &mut [T]) -> Result<()> {
    for i in (1..items.len()).rev() {
        let j = rng.next_bounded(i as u32 + 1)? as usize;
        items.swap(i, j);
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/random.rs"]
mod random;
