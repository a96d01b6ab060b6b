use std::io::Write;
use std::num::NonZeroU32;
use std::ops::RangeInclusive;

use log::trace;

use crate::error::RecurrenceError;
use crate::recurrence::{report_to, Sample};

/// Largest `k` for which `2^k` is still an `i32`.
pub const MAX_POWER_EXPONENT: u32 = 30;

/// Iterator over the samples of an inclusive range of `n`.
#[derive(Debug, Clone)]
pub struct SweepIter {
    next: Option<i32>,
    end: i32,
    step: i32,
}

pub fn sweep(range: RangeInclusive<i32>, step: NonZeroU32) -> SweepIter {
    let (start, end) = range.into_inner();
    SweepIter {
        next: (start <= end).then_some(start),
        end,
        // Steps beyond i32::MAX always leave the range after one sample.
        step: i32::try_from(step.get()).unwrap_or(i32::MAX),
    }
}

impl Iterator for SweepIter {
    type Item = Result<Sample, RecurrenceError>;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.next?;
        self.next = n.checked_add(self.step).filter(|next| *next <= self.end);
        trace!("sweep n={n}");
        Some(Sample::of(n))
    }
}

/// `1, 2, 4, ..., 2^max_exponent`, with the exponent capped at
/// [`MAX_POWER_EXPONENT`].
pub fn powers_of_two(max_exponent: u32) -> Vec<i32> {
    (0..=max_exponent.min(MAX_POWER_EXPONENT))
        .map(|k| 1i32 << k)
        .collect()
}

/// Reports every `n` in order and returns how many lines were written.
/// Stops at the first failure.
pub fn report_all<W, I>(writer: &mut W, ns: I) -> Result<usize, RecurrenceError>
where
    W: Write,
    I: IntoIterator<Item = i32>,
{
    let mut written = 0;
    for n in ns {
        report_to(writer, n)?;
        written += 1;
    }
    Ok(written)
}
