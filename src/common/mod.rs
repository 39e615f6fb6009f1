//! Common data structures and utilities.

mod delay_line;
mod f32_array_ext;

pub use delay_line::DelayLine;
pub use f32_array_ext::F32ArrayExt;
