// src/config/mod.rs
pub mod stream;

pub use stream::{load_default, load_from, StreamConfig};
