//! Hexlaunch Launcher
//!
//! Headless half of a hex-grid app launcher: it follows a changing item
//! collection, keeps every item on the grid and produces the data a renderer
//! needs. Drawing and animation timing stay with the renderer.
//!
//! # Architecture
//!
//! - **Launcher**: translates collection changes into grid allocations
//! - **Placement / SnapTarget**: pixel geometry for views and scrolling
//! - **LayoutEvent**: timeline of what moved, for renderers to replay
//! - **LayoutSnapshot**: the full layout as JSON
//!
//! # Usage
//!
//! ```ignore
//! let mut launcher = Launcher::with_items(LauncherConfig::from_env()?, apps)?;
//! launcher.apply(CollectionChange::Added(vec![new_app]))?;
//! launcher.pan_to(-30.0, 12.0);
//! let target = launcher.snap();
//! ```

mod config;
mod error;
mod events;
mod item;
mod launcher;

pub use config::{LauncherConfig, DEFAULT_HEX_SIZE, DEFAULT_VIEWPORT};
pub use error::{Error, Result};
pub use events::{LayoutEvent, LayoutSnapshot, PlacedItem, Placement, SnapTarget};
pub use item::{CollectionChange, LauncherItem};
pub use launcher::Launcher;

pub use hexlaunch_topology as topology;
