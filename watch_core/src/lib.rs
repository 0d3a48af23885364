//! Multi-city analog watch.
//!
//! A [`Watch`] samples a [`Clock`] once per frame and turns the current time
//! of its city into three hand rotations for an external renderer.

pub mod angles;
pub mod cities;
pub mod clock;
pub mod dial;
pub mod error;
pub mod label;
pub mod watch;

pub use angles::*;
pub use cities::*;
pub use clock::*;
pub use dial::*;
pub use error::*;
pub use label::*;
pub use watch::*;
