//! Deterministic random source for level generation
//!
//! A 32-bit linear congruential generator. Every level layout is a pure
//! function of the seed and the order in which values are drawn, so callers
//! must consume values in exactly the same order to reproduce a level.

use serde::{Deserialize, Serialize};

/// LCG multiplier
const RND_MULT: u32 = 0x015A_4E35;
/// LCG increment
const RND_INC: u32 = 1;

/// An RNG call trace entry for debugging divergences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngTraceEntry {
    /// Sequence number (0-indexed)
    pub seq: u64,
    /// Function name ("advance", "gen_rnd")
    pub func: &'static str,
    /// Argument (upper bound for gen_rnd, 0 otherwise)
    pub arg: i32,
    /// Result value
    pub result: i32,
    /// Raw state after stepping
    pub raw: u32,
}

/// Seedable LCG random source
#[derive(Clone, Serialize, Deserialize)]
pub struct DiabloRng {
    /// Current generator state
    state: u32,
    /// Seed the generator was created with
    seed: u32,
    /// Total number of state steps taken
    call_count: u64,
    /// If true, record all calls into trace log
    #[serde(skip)]
    tracing: bool,
    /// Trace log (only populated when tracing is true)
    #[serde(skip)]
    trace: Vec<RngTraceEntry>,
}

impl core::fmt::Debug for DiabloRng {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DiabloRng")
            .field("state", &self.state)
            .field("seed", &self.seed)
            .field("call_count", &self.call_count)
            .finish()
    }
}

impl DiabloRng {
    /// Create a generator positioned at the start of `seed`'s stream.
    pub fn new(seed: u32) -> Self {
        Self {
            state: seed,
            seed,
            call_count: 0,
            tracing: false,
            trace: Vec::new(),
        }
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Current raw state
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Step the generator once without tracing.
    #[inline]
    fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(RND_MULT).wrapping_add(RND_INC);
        self.call_count += 1;
        self.state
    }

    /// Absolute value of the state as a signed integer.
    ///
    /// `i32::MIN` has no positive counterpart and is returned unchanged.
    #[inline]
    fn abs_state(raw: u32) -> i32 {
        (raw as i32).wrapping_abs()
    }

    /// Advance the stream by one value and return it.
    ///
    /// Used where a value must be consumed to keep the stream aligned even
    /// though it is not needed.
    pub fn advance(&mut self) -> i32 {
        let raw = self.step();
        let res = Self::abs_state(raw);
        if self.tracing {
            self.trace.push(RngTraceEntry {
                seq: self.call_count - 1,
                func: "advance",
                arg: 0,
                result: res,
                raw,
            });
        }
        res
    }

    /// Returns a random value in `[0, v)`; 0 when `v <= 0`.
    pub fn gen_rnd(&mut self, v: i32) -> i32 {
        if v <= 0 {
            return 0;
        }
        let raw = self.step();
        let value = Self::abs_state(raw);
        let res = if v <= 0x7FFF {
            (value >> 16).rem_euclid(v)
        } else {
            value.rem_euclid(v)
        };
        if self.tracing {
            self.trace.push(RngTraceEntry {
                seq: self.call_count - 1,
                func: "gen_rnd",
                arg: v,
                result: res,
                raw,
            });
        }
        res
    }

    /// Returns true with probability `1/frequency`.
    pub fn flip_coin(&mut self, frequency: i32) -> bool {
        self.gen_rnd(frequency) == 0
    }

    /// Enable RNG tracing
    pub fn enable_tracing(&mut self) {
        self.tracing = true;
        self.trace.clear();
    }

    /// Disable RNG tracing
    pub fn disable_tracing(&mut self) {
        self.tracing = false;
    }

    /// Get current RNG trace
    pub fn trace(&self) -> &[RngTraceEntry] {
        &self.trace
    }

    /// Total number of state steps
    pub fn call_count(&self) -> u64 {
        self.call_count
    }
}

impl Default for DiabloRng {
    fn default() -> Self {
        Self::new(0)
    }
}
