//! Generator clone for the insertion workload.
//!
//! The extension owns its randomness; these constants and the
//! generate-before-use draw order must stay identical to the host's
//! generator or the backends stop solving the same problem.

const SEED: u64 = 123_456_789;
const MULTIPLIER: u64 = 1_103_515_245;
const INCREMENT: u64 = 12_345;
const MASK: u64 = 0x7FFF_FFFF;

pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new() -> Self {
        Self { state: SEED }
    }

    pub fn next_value(&mut self) -> u64 {
        self.state = (self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT))
            & MASK;
        self.state
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new()
    }
}
