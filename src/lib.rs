pub mod alphabet;
pub mod config;
pub mod error;
pub mod fusion;
pub mod scorer;
pub mod view;
// cmd and reports belong to the binary crate (see main.rs).

pub use error::{FusionError, FvResult};
