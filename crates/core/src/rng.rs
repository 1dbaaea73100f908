//! RNG module - seedable random symbol source
//!
//! A simple LCG (Linear Congruential Generator) using constants from
//! Numerical Recipes. The generator is passed explicitly into `create_game`
//! and `refill` instead of living in process-wide state, so the same seed
//! always produces the same game - deterministic tests and benches rely on
//! this. It must not be reseeded mid-cascade.

use tui_match3_types::Symbol;

/// Simple LCG (Linear Congruential Generator) RNG
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Draw one symbol uniformly from the alphabet.
    ///
    /// The alphabet must be non-empty; the engine always passes at least one
    /// symbol.
    pub fn choose(&mut self, alphabet: &[Symbol]) -> Symbol {
        alphabet[self.next_range(alphabet.len() as u32) as usize]
    }

    /// Get the current RNG state (for restarting a game with same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        // Different seeds should eventually diverge
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_choose_stays_inside_alphabet() {
        let mut rng = SimpleRng::new(7);
        let alphabet = [Symbol::A, Symbol::B];

        for _ in 0..200 {
            let sym = rng.choose(&alphabet);
            assert!(alphabet.contains(&sym));
        }
    }

    #[test]
    fn test_choose_covers_full_alphabet() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; Symbol::ALL.len()];

        for _ in 0..1000 {
            let sym = rng.choose(&Symbol::ALL);
            let idx = Symbol::ALL.iter().position(|s| *s == sym).unwrap();
            seen[idx] = true;
        }

        assert!(seen.iter().all(|s| *s), "every symbol should appear");
    }
}
