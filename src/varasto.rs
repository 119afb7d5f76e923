// 📦 Varasto - Capacity-bounded stock accumulator
//
// Every operation clamps instead of failing:
// - capacity is never negative
// - level always stays within 0..=capacity
// - excess stock on add is discarded, removals return what was actually taken

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// VARASTO
// ============================================================================

/// A storage unit with a fixed capacity and a current stock level.
///
/// Invariant: `0 <= level <= capacity`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Varasto {
    capacity: f64,
    level: f64,
}

/// NaN and infinities count as zero; everything below zero becomes zero.
fn non_negative(value: f64) -> f64 {
    if !value.is_finite() || value < 0.0 {
        0.0
    } else {
        value
    }
}

impl Varasto {
    /// Create a unit, clamping both inputs.
    ///
    /// Negative capacity becomes 0, negative level becomes 0, and a level
    /// above capacity is cut down to capacity.
    pub fn new(capacity: f64, level: f64) -> Self {
        let capacity = non_negative(capacity);
        let level = non_negative(level).min(capacity);

        Varasto { capacity, level }
    }

    /// Create an empty unit.
    pub fn with_capacity(capacity: f64) -> Self {
        Varasto::new(capacity, 0.0)
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    /// How much more fits before the unit is full
    pub fn remaining_capacity(&self) -> f64 {
        self.capacity - self.level
    }

    /// Add stock. Non-positive amounts are ignored; overflow is discarded,
    /// so even an infinite amount only fills the unit.
    pub fn add(&mut self, amount: f64) {
        if amount.is_nan() || amount <= 0.0 {
            return;
        }

        self.level = (self.level + amount).min(self.capacity);
    }

    /// Take stock out and return how much was actually taken.
    ///
    /// Non-positive amounts take nothing. Asking for more than the current
    /// level empties the unit and returns the old level.
    pub fn remove(&mut self, amount: f64) -> f64 {
        if amount.is_nan() || amount <= 0.0 {
            return 0.0;
        }

        let taken = amount.min(self.level);
        self.level -= taken;
        taken
    }

    /// Same stock, new capacity. The level is clamped to the new capacity.
    pub fn resized(&self, capacity: f64) -> Varasto {
        Varasto::new(capacity, self.level)
    }

    /// Fill ratio in `0.0..=1.0` (0 for a zero-capacity unit)
    pub fn fill_ratio(&self) -> f64 {
        if self.capacity > 0.0 {
            self.level / self.capacity
        } else {
            0.0
        }
    }

    pub fn is_full(&self) -> bool {
        self.remaining_capacity() <= 0.0
    }

    pub fn is_empty(&self) -> bool {
        self.level <= 0.0
    }

    /// Human-readable summary: `saldo = 3, vielä tilaa 5`
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Varasto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "saldo = {}, vielä tilaa {}",
            self.level,
            self.remaining_capacity()
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ten() -> Varasto {
        Varasto::with_capacity(10.0)
    }

    #[test]
    fn test_new_unit_is_empty() {
        let varasto = ten();

        assert_eq!(varasto.level(), 0.0);
        assert_eq!(varasto.capacity(), 10.0);
        assert!(varasto.is_empty());
    }

    #[test]
    fn test_add_increases_level() {
        let mut varasto = ten();
        varasto.add(8.0);

        assert_eq!(varasto.level(), 8.0);
        assert_eq!(varasto.remaining_capacity(), 2.0);
    }

    #[test]
    fn test_remove_returns_amount_and_frees_space() {
        let mut varasto = ten();
        varasto.add(8.0);

        let taken = varasto.remove(2.0);

        assert_eq!(taken, 2.0);
        // 10 - 8 + 2
        assert_eq!(varasto.remaining_capacity(), 4.0);
    }

    #[test]
    fn test_negative_capacity_is_zeroed() {
        let varasto = Varasto::new(-1.0, 5.0);

        assert_eq!(varasto.capacity(), 0.0);
        // level > capacity (now 0) -> level is capacity
        assert_eq!(varasto.level(), 0.0);
    }

    #[test]
    fn test_negative_initial_level_is_zeroed() {
        let varasto = Varasto::new(10.0, -5.0);

        assert_eq!(varasto.capacity(), 10.0);
        assert_eq!(varasto.level(), 0.0);
    }

    #[test]
    fn test_initial_level_above_capacity_fills_unit() {
        let varasto = Varasto::new(5.0, 10.0);

        assert_eq!(varasto.capacity(), 5.0);
        assert_eq!(varasto.level(), 5.0);
        assert!(varasto.is_full());
    }

    #[test]
    fn test_initial_level_equal_to_capacity() {
        let varasto = Varasto::new(4.0, 4.0);

        assert_eq!(varasto.level(), 4.0);
        assert_eq!(varasto.remaining_capacity(), 0.0);
    }

    #[test]
    fn test_nan_inputs_clamp_to_zero() {
        let varasto = Varasto::new(f64::NAN, f64::NAN);
        assert_eq!(varasto.capacity(), 0.0);
        assert_eq!(varasto.level(), 0.0);

        let mut varasto = ten();
        varasto.add(f64::NAN);
        assert_eq!(varasto.remove(f64::NAN), 0.0);
        assert_eq!(varasto.level(), 0.0);
    }

    #[test]
    fn test_infinite_inputs_keep_invariant() {
        let varasto = Varasto::new(f64::INFINITY, f64::INFINITY);
        assert_eq!(varasto.capacity(), 0.0);
        assert_eq!(varasto.level(), 0.0);
        assert_eq!(varasto.describe(), "saldo = 0, vielä tilaa 0");

        let mut varasto = Varasto::new(f64::INFINITY, 0.0);
        varasto.add(f64::INFINITY);
        assert_eq!(varasto.level(), 0.0);
        assert_eq!(varasto.remaining_capacity(), 0.0);

        let mut varasto = Varasto::new(10.0, f64::NEG_INFINITY);
        assert_eq!(varasto.level(), 0.0);

        varasto.add(f64::INFINITY);
        assert_eq!(varasto.level(), 10.0);
        assert_eq!(varasto.remaining_capacity(), 0.0);

        assert_eq!(varasto.remove(f64::INFINITY), 10.0);
        assert_eq!(varasto.level(), 0.0);
        assert_eq!(varasto.remaining_capacity(), 10.0);

        assert_eq!(varasto.resized(f64::INFINITY).capacity(), 0.0);
    }

    #[test]
    fn test_add_negative_is_noop() {
        let mut varasto = Varasto::new(10.0, 3.0);
        varasto.add(-4.0);
        varasto.add(0.0);

        assert_eq!(varasto.level(), 3.0);
    }

    #[test]
    fn test_add_too_much_fills_unit() {
        let mut varasto = Varasto::new(10.0, 7.0);
        varasto.add(10.0);

        assert_eq!(varasto.level(), 10.0);
        assert_eq!(varasto.remaining_capacity(), 0.0);

        varasto.add(f64::MAX);
        assert_eq!(varasto.level(), 10.0);
    }

    #[test]
    fn test_remove_negative_returns_zero() {
        let mut varasto = Varasto::new(10.0, 4.0);
        let taken = varasto.remove(-3.0);

        assert_eq!(taken, 0.0);
        assert_eq!(varasto.level(), 4.0);
    }

    #[test]
    fn test_remove_too_much_returns_everything() {
        let mut varasto = Varasto::new(10.0, 6.0);
        let taken = varasto.remove(20.0);

        assert_eq!(taken, 6.0);
        assert_eq!(varasto.level(), 0.0);
    }

    #[test]
    fn test_add_then_remove_restores_level() {
        let mut varasto = Varasto::new(100.0, 25.0);
        varasto.add(40.0);
        let taken = varasto.remove(40.0);

        assert_eq!(taken, 40.0);
        assert_eq!(varasto.level(), 25.0);
    }

    #[test]
    fn test_level_always_within_bounds() {
        let inputs = [-100.0, -1.0, 0.0, 0.5, 1.0, 7.0, 50.0, 1e9];

        for &capacity in &inputs {
            for &level in &inputs {
                let varasto = Varasto::new(capacity, level);
                assert!(varasto.level() >= 0.0);
                assert!(varasto.level() <= capacity.max(0.0));
                assert!(varasto.remaining_capacity() >= 0.0);
            }
        }
    }

    #[test]
    fn test_display_format() {
        let varasto = Varasto::new(8.0, 3.0);

        assert_eq!(varasto.to_string(), "saldo = 3, vielä tilaa 5");
        assert_eq!(varasto.describe(), varasto.to_string());
        assert_eq!(
            Varasto::new(10.0, 2.5).describe(),
            "saldo = 2.5, vielä tilaa 7.5"
        );
    }

    #[test]
    fn test_resized_keeps_level_when_it_fits() {
        let varasto = Varasto::new(100.0, 50.0).resized(200.0);

        assert_eq!(varasto.capacity(), 200.0);
        assert_eq!(varasto.level(), 50.0);
    }

    #[test]
    fn test_resized_clamps_level_when_shrinking() {
        let varasto = Varasto::new(100.0, 80.0).resized(30.0);

        assert_eq!(varasto.capacity(), 30.0);
        assert_eq!(varasto.level(), 30.0);
    }

    #[test]
    fn test_fill_ratio() {
        assert_eq!(Varasto::new(10.0, 5.0).fill_ratio(), 0.5);
        assert_eq!(Varasto::new(0.0, 0.0).fill_ratio(), 0.0);
        assert_eq!(Varasto::new(4.0, 4.0).fill_ratio(), 1.0);
    }
}
