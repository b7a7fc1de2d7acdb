//! Payroll domain: employee records, salary arithmetic, payslip layout and
//! the ports through which payslips leave the process.

pub mod email;
pub mod employee;
pub mod money;
pub mod payslip;
pub mod ports;
