//! Interactive well spacing diagram built on egui/eframe.
//!
//! Plots wells and geological formations in a 2D cross-section and derives
//! nearest-neighbor distance edges (straight-line, horizontal, vertical)
//! between wells. Ships the interaction layer of the original panel:
//! rectangle marking, host-driven zoom with half-tick padding, hover
//! tooltips, and a two-mode measuring stick.
//!
//! Module map:
//! - `data`: point/group model, distance engine, domain calculation, zoom
//! - `geometry`: linear scales, ticks, screen transforms
//! - `selection`: rectangle hit testing against the last draw's scales
//! - `measure`: measuring stick state machine
//! - `diagram` / `plot`: the panel itself (state + rendering)
//! - `host`: row handles and callbacks towards the embedding application
//! - `config` / `persistence`: host-persisted settings as property strings
//! - `app`: standalone eframe runner for demos

mod plot;

pub mod app;
pub mod config;
pub mod data;
pub mod diagram;
pub mod geometry;
pub mod host;
pub mod look;
pub mod measure;
pub mod persistence;
pub mod selection;

// Public re-exports for a compact external API
pub use app::{run_diagram, DiagramApp};
pub use config::{DiagramConfig, DistanceMode};
pub use data::distance::{DistanceEdge, DistanceSet, NeighborLimits};
pub use data::points::{DataPoint, GroupItem, LayerType};
pub use data::zoom::{AxisZoom, ZoomRange};
pub use diagram::WellSpacingDiagram;
pub use host::{HostActions, MarkMode, RowHandle, RowRef};
pub use measure::{MeasureEnd, MeasureMode};
pub use selection::{FormationHitRule, MarkingPermissions, SelectionRect};
