pub mod check;
pub mod dump;
pub mod grep;
pub mod matches;
pub mod run_common;
pub mod trace;

#[cfg(test)]
mod matches_tests;
