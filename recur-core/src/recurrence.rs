//! Evaluation of `T(n) = 4·T(n/2) + n` with `T(n) = 1` for `n < 2`.

use std::fmt;
use std::io::{self, Write};

use log::debug;

use crate::error::RecurrenceError;

/// One reported `(n, T(n))` pair.
///
/// Renders as `" {n} {value}"`: a leading space, then both numbers separated
/// by a single space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub n: i32,
    pub value: i64,
}

impl Sample {
    pub fn of(n: i32) -> Result<Self, RecurrenceError> {
        Ok(Self {
            n,
            value: evaluate(n)?,
        })
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " {} {}", self.n, self.value)
    }
}

/// Computes `T(n)`.
///
/// Negative `n` is rejected with [`RecurrenceError::InvalidArgument`]. Every
/// non-negative `i32` fits: the largest value, `T(i32::MAX)`, is about
/// `3.07e18`.
pub fn evaluate(n: i32) -> Result<i64, RecurrenceError> {
    if n < 0 {
        return Err(RecurrenceError::InvalidArgument { n });
    }
    let value = halve(n);
    debug!("evaluate n={n} value={value}");
    Ok(value)
}

fn halve(n: i32) -> i64 {
    if n < 2 {
        1
    } else {
        4 * halve(n / 2) + i64::from(n)
    }
}

/// Writes the `" {n} {T(n)}"` line for `n` to `writer`.
///
/// Nothing is written when `n` is out of range.
pub fn report_to<W: Write>(writer: &mut W, n: i32) -> Result<Sample, RecurrenceError> {
    let sample = Sample::of(n)?;
    writeln!(writer, "{sample}")?;
    Ok(sample)
}

/// Prints the `" {n} {T(n)}"` line for `n` on standard output.
pub fn report(n: i32) -> Result<(), RecurrenceError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    report_to(&mut handle, n)?;
    handle.flush()?;
    Ok(())
}
