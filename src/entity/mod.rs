//! Database entity models for inventory-location-store.
//!
//! This module contains the Sea-ORM entity definitions backing the location
//! code engine. Together they form one scheme per location default:
//!
//! - [`location_default`]: a named, owned scheme carrying the segment separator
//! - [`location_format`]: the ordered character definitions of a scheme
//! - [`location_code`]: the concrete, self-referencing tree of segments
//!
//! The `path`, `level` and `segment_length` columns are derived. They are
//! written by [`LocationStore`](crate::LocationStore) and are never taken from
//! callers.

/// Location default entity: a named series of formats owned by a user.
pub mod location_default;

/// Location format entity: one segment position rule within a default.
pub mod location_format;

/// Location code entity: one node of the location tree.
pub mod location_code;
