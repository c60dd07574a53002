//! Property-string persistence for host-stored state.
//!
//! The host keeps diagram configuration and the zoom range in its own
//! property store as JSON strings. Parsing is forgiving: a missing or
//! malformed string yields the defaults instead of an error, so a stale
//! property never blocks rendering.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::DiagramConfig;
use crate::data::zoom::ZoomRange;

/// Serialize a host-persisted value to its property string.
pub fn to_property_string<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

fn from_property_string<T: DeserializeOwned + Default>(raw: &str) -> T {
    serde_json::from_str(raw).unwrap_or_default()
}

impl DiagramConfig {
    /// Parse a stored configuration property; unknown fields are ignored
    /// and missing fields keep their defaults.
    pub fn from_property_string(raw: &str) -> Self {
        from_property_string(raw)
    }

    pub fn to_property_string(&self) -> String {
        to_property_string(self)
    }
}

impl ZoomRange {
    /// Parse a stored zoom property; malformed input means "not zoomed".
    /// Bounds are clamped and re-ordered on the way in.
    pub fn from_property_string(raw: &str) -> Self {
        let parsed: ZoomRange = from_property_string(raw);
        ZoomRange {
            x: parsed.x.clamped(),
            y: parsed.y.clamped(),
        }
    }

    pub fn to_property_string(&self) -> String {
        to_property_string(self)
    }
}
