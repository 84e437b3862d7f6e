use crate::{
    error::{Error, Result},
    random::SecureRandom,
};

/// SecureRandom double that replays a scripted list of draws. Every draw is reduced
/// modulo the requested bound so scripts stay in range; the script wraps around when it
/// runs out.
pub struct SequenceRandom {
    draws: Vec<u32>,
    next: usize,
}

impl SequenceRandom {
    pub fn new(draws: &[u32]) -> Self {
        Self {
            draws: draws.to_vec(),
            next: 0,
        }
    }
}

impl SecureRandom for SequenceRandom {
    fn next_bounded(&mut self, bound: u32) -> Result<u32> {
        if bound == 0 {
            return Err(Error::InvalidBound);
        }
        let draw = self.draws[self.next % self.draws.len()] % bound;
        self.next += 1;
        Ok(draw)
    }
}

/// SecureRandom double that returns the call counter: 0, 1, 2, ... reduced modulo the
/// requested bound.
pub struct CountingRandom {
    next: u32,
}

impl CountingRandom {
    pub fn new() -> Self {
        Self { next: 0 }
    }
}

impl SecureRandom for CountingRandom {
    fn next_bounded(&mut self, bound: u32) -> Result<u32> {
        if bound == 0 {
            return Err(Error::InvalidBound);
        }
        let draw = self.next % bound;
        self.next += 1;
        Ok(draw)
    }
}

/// SecureRandom double whose entropy source is permanently broken.
pub struct FailingRandom;

impl SecureRandom for FailingRandom {
    fn next_bounded(&mut self, _bound: u32) -> Result<u32> {
        Err(Error::Entropy(rand::Error::new(std::io::Error::new(
            std::io::ErrorKind::Other,
            "entropy source unavailable",
        ))))
    }
}
