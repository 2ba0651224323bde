pub mod curation;
pub mod delegation;
pub mod distribution;
pub mod event;
pub mod platform;
pub mod profiles;
pub mod tipping;

#[cfg(test)]
mod tests;

pub use curation::*;
pub use delegation::*;
pub use distribution::*;
pub use event::*;
pub use platform::*;
pub use profiles::*;
pub use tipping::*;
