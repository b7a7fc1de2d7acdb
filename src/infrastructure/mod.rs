pub mod in_memory;
pub mod pdf;
pub mod smtp;
