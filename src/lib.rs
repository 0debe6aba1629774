#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
pub mod input;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;
pub mod ui;

pub use crate::core::*;
pub use input::{parse_target, InputError};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use ui::render;
