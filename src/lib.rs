//! simplecharts: SVG chart generation for small in-memory tables.
//!
//! The crate keeps a strict split between pure geometry (`core`), markup
//! serialization (`render`) and the public renderer surface (`api`).

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use crate::api::{ChartKind, ChartRenderer, ChartRendererConfig};
pub use crate::core::{ChartData, Row, round_max};
pub use crate::error::{ChartError, ChartResult};
