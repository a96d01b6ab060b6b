mod error;
mod growth;
mod recurrence;
mod sweep;

pub use crate::error::RecurrenceError;
pub use crate::growth::{closed_form_power_of_two, growth_ratio, MasterCase, Recurrence};
pub use crate::recurrence::{evaluate, report, report_to, Sample};
pub use crate::sweep::{powers_of_two, report_all, sweep, SweepIter, MAX_POWER_EXPONENT};
