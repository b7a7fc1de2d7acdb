//! Application layer: the payroll batch run.
//!
//! `PayrollRun` walks the loaded records one at a time, validating,
//! rendering and dispatching each before moving to the next. Every record
//! ends up as one entry in the `RunReport`.

pub mod dispatcher;
pub mod payroll;
pub mod report;
