#![forbid(unsafe_code)]
//! biograph-core library.
//!
//! Graph model, validation, and traversal for the biograph visualization
//! engine. Layout and interaction live in `biograph-engine`; this crate
//! owns everything that is pure graph theory.
//!
//! # Conventions
//!
//! - **Errors**: typed `thiserror` enums ([`ValidationError`],
//!   [`UnknownNode`]) returned synchronously; `anyhow::Result` in tests.
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `error!`, `debug!`,
//!   `trace!`).

pub mod error;
pub mod graph;
pub mod input;
pub mod metrics;
pub mod traverse;

pub use error::{UnknownNode, ValidationError};
pub use graph::{Edge, Graph, Node, NodeIdx};
pub use input::{EdgeRecord, GraphData, NodeRecord};
pub use traverse::{bfs_order, dfs_order, shortest_path};
