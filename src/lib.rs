#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
pub mod cli;
pub mod engine;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;

#[cfg(feature = "std")]
pub use cli::*;
pub use engine::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use player::*;
