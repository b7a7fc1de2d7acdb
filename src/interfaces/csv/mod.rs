pub mod employee_reader;
pub mod report_writer;
