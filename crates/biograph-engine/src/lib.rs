#![forbid(unsafe_code)]
//! biograph-engine library.
//!
//! Layout strategies, the force-directed simulation, and the interaction
//! state machine for the biograph visualization engine. The graph model
//! and traversal algorithms live in `biograph-core`.
//!
//! # Conventions
//!
//! - **Errors**: typed `thiserror` enums for commands and validation;
//!   warnings are drained, never thrown.
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `error!`, `debug!`,
//!   `trace!`). The library installs no subscriber.
//! - **Driving**: the host loop calls [`GraphEngine::tick`] per frame
//!   and [`GraphEngine::animation_tick`] per timer tick; nothing here
//!   blocks or sleeps.

pub mod config;
pub mod engine;
pub mod interact;
pub mod layout;
pub mod state;

pub use config::LayoutConfig;
pub use engine::{GraphEngine, TraversalOrders};
pub use interact::{CommandError, Phase, TraversalKind};
pub use layout::LayoutKind;
pub use state::{LayoutState, LayoutWarning, Position};
