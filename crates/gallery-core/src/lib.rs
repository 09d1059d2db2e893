//! Platform-free model of the parallax gallery.
//!
//! Nothing in this crate touches browser APIs. The web front-end feeds raw
//! event values (client coordinates, orientation angles, scroll offset) into
//! [`GalleryModel`], advances it once per animation frame and reads back
//! [`TileFrame`]s to apply as inline styles.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod css;
pub mod easing;
pub mod error;
pub mod gallery;
pub mod presence;
pub mod signal;
pub mod spring;
pub mod state;
pub mod transform;

pub use catalog::*;
pub use config::*;
pub use easing::*;
pub use error::*;
pub use gallery::*;
pub use presence::*;
pub use signal::*;
pub use spring::*;
pub use state::*;
pub use transform::*;
