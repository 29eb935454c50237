pub mod logic;
pub mod schedule;
pub mod source;
