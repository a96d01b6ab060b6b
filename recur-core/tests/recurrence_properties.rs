//! Property-based tests for the recurrence laws.

use proptest::prelude::*;
use recur_core::{closed_form_power_of_two, evaluate, growth_ratio};

proptest! {
    /// Property: every n >= 2 satisfies T(n) = 4·T(n/2) + n.
    #[test]
    fn satisfies_recurrence(n in 2i32..=i32::MAX) {
        let expected = 4 * evaluate(n / 2).unwrap() + i64::from(n);
        prop_assert_eq!(evaluate(n).unwrap(), expected);
    }

    /// Property: T is strictly increasing from n = 1 on.
    #[test]
    fn strictly_increasing(n in 1i32..i32::MAX) {
        prop_assert!(evaluate(n).unwrap() < evaluate(n + 1).unwrap());
    }

    /// Property: powers of two match 2·4^k - 2^k.
    #[test]
    fn closed_form_matches_on_powers_of_two(k in 0u32..=30) {
        let n = 1i32 << k;
        prop_assert_eq!(Some(evaluate(n).unwrap()), closed_form_power_of_two(k));
    }

    /// Property: n²/2 < T(n) < 2n² for n >= 1, the Θ(n²) bound.
    #[test]
    fn bounded_by_n_squared(n in 1i32..=i32::MAX) {
        let ratio = growth_ratio(n).unwrap();
        prop_assert!(ratio > 0.5 && ratio < 2.0, "ratio {} for n={}", ratio, n);
    }

    /// Property: negative inputs are always rejected.
    #[test]
    fn negative_inputs_rejected(n in i32::MIN..0) {
        prop_assert!(evaluate(n).is_err());
    }
}
