#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
mod placement;
pub mod prelude;
#[cfg(feature = "std")]
pub mod render;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_log_level};
pub use placement::*;
pub use ship::*;
