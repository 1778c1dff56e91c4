//! Step definitions for the calculator features

pub mod display;
pub mod input;
