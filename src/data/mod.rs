//! Data model and pure computation: points, distances, domains, zoom.

pub mod distance;
pub mod domain;
pub mod points;
pub mod zoom;
