pub mod midi;
pub mod monitor;
