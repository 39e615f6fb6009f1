//! Helpers shared by the demos and benchmarks. Not part of the library.

pub mod signal;
pub mod wav;
