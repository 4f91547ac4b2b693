//! RNG oracle for deterministic random number generation.
//!
//! All random mechanics (enemy targeting, recruitment rolls, economy
//! transitions, encounter generation) draw through this trait so a whole
//! session can be replayed from its seed.
//!
//! # Determinism
//!
//! Implementations must be deterministic: given the same seed they must
//! produce the same value. Statefulness lives in the caller (a nonce that
//! increments per roll), never in the oracle.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must produce the same value for the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Probability check against a rate expressed per 10 000.
    ///
    /// `chance(seed, 1_500)` succeeds 15% of the time.
    fn chance(&self, seed: u64, rate_per_myriad: u32) -> bool {
        self.next_u32(seed) % 10_000 < rate_per_myriad
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = max - min + 1;
        min + (self.next_u32(seed) % span)
    }

    /// Pick an index into a slice of `len` elements. Returns 0 when empty.
    fn pick(&self, seed: u64, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u32(seed) as usize) % len
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output permuted from 64-bit LCG state. Small, fast,
/// passes statistical test suites, and trivially deterministic.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the PCG state by one LCG step.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Compute a deterministic seed from session state components.
///
/// Combines independent entropy sources so each random event in a session
/// gets a unique, replayable seed.
///
/// # Arguments
///
/// * `game_seed` - Base seed fixed at session start
/// * `nonce` - Roll sequence number (increments each draw)
/// * `actor` - Index of the actor the roll concerns (0 when not applicable)
/// * `context` - Distinguishes multiple rolls within one event
pub fn compute_seed(game_seed: u64, nonce: u64, actor: u32, context: u32) -> u64 {
    // Mix inputs with SplitMix64/FxHash multipliers, then avalanche.
    let mut hash = game_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
