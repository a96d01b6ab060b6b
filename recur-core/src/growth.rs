//! Master Theorem view of divide-and-conquer recurrences.
//!
//! A recurrence `T(n) = a·T(n/b) + Θ(n^d)` falls into one of three cases
//! depending on how `d` compares to the critical exponent `log_b(a)`.

use std::fmt;

use log::debug;

use crate::error::RecurrenceError;
use crate::recurrence::evaluate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MasterCase {
    /// `d < log_b(a)`: the leaves dominate, `Θ(n^log_b(a))`.
    Leaf,
    /// `d = log_b(a)`: every level contributes equally, `Θ(n^d · log n)`.
    Balanced,
    /// `d > log_b(a)`: the root dominates, `Θ(n^d)`.
    Root,
}

impl fmt::Display for MasterCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MasterCase::Leaf => write!(f, "case 1 (leaves dominate)"),
            MasterCase::Balanced => write!(f, "case 2 (balanced)"),
            MasterCase::Root => write!(f, "case 3 (root dominates)"),
        }
    }
}

/// Parameters of `T(n) = a·T(n/b) + Θ(n^d)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recurrence {
    pub a: u32,
    pub b: u32,
    pub d: u32,
}

impl Recurrence {
    /// `T(n) = 4·T(n/2) + n`, the recurrence [`evaluate`] computes.
    pub const COURSEWORK: Recurrence = Recurrence { a: 4, b: 2, d: 1 };

    pub fn new(a: u32, b: u32, d: u32) -> Result<Self, RecurrenceError> {
        if a < 1 || b < 2 {
            return Err(RecurrenceError::InvalidParameters { a, b });
        }
        Ok(Self { a, b, d })
    }

    pub fn critical_exponent(&self) -> f64 {
        f64::from(self.a).ln() / f64::from(self.b).ln()
    }

    /// Compares `b^d` against `a`, which orders `d` against `log_b(a)`
    /// without floating point.
    pub fn classify(&self) -> MasterCase {
        let case = match self.b.checked_pow(self.d) {
            Some(bd) if bd < self.a => MasterCase::Leaf,
            Some(bd) if bd == self.a => MasterCase::Balanced,
            _ => MasterCase::Root,
        };
        debug!("classify a={} b={} d={} -> {case:?}", self.a, self.b, self.d);
        case
    }

    /// The asymptotic bound as text, e.g. `Θ(n^2)`.
    pub fn bound(&self) -> String {
        match self.classify() {
            MasterCase::Leaf => format!("Θ(n^{})", self.exact_critical_exponent()),
            MasterCase::Balanced => format!("Θ(n^{} log n)", self.d),
            MasterCase::Root => format!("Θ(n^{})", self.d),
        }
    }

    fn exact_critical_exponent(&self) -> String {
        let mut power: u64 = 1;
        let mut exponent = 0;
        while power < u64::from(self.a) {
            power *= u64::from(self.b);
            exponent += 1;
        }
        if power == u64::from(self.a) {
            return exponent.to_string();
        }
        let rounded = format!("{:.3}", self.critical_exponent());
        // Rounding can land on a whole number the power check just ruled out.
        if rounded.ends_with(".000") {
            format!("log_{}({})", self.b, self.a)
        } else {
            rounded
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let work = match self.d {
            0 => "1".to_string(),
            1 => "n".to_string(),
            d => format!("n^{d}"),
        };
        write!(f, "T(n) = {}·T(n/{}) + {work}", self.a, self.b)
    }
}

/// `T(2^k) = 2·4^k - 2^k`, or `None` when that exceeds `i64`.
pub fn closed_form_power_of_two(k: u32) -> Option<i64> {
    // Factored as 2^k·(2^(k+1) - 1) so k = 31 still fits.
    let power = 2i64.checked_pow(k)?;
    power.checked_mul(power.checked_mul(2)?.checked_sub(1)?)
}

/// `T(n) / n²`. Tends to 2 along powers of two.
pub fn growth_ratio(n: i32) -> Result<f64, RecurrenceError> {
    if n < 1 {
        return Err(RecurrenceError::RatioUndefined { n });
    }
    let value = evaluate(n)?;
    let n = f64::from(n);
    Ok(value as f64 / (n * n))
}
