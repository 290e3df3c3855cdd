pub mod benchmark;
pub mod catalog;
