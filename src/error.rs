use sea_orm::DbErr;
use thiserror::Error;

use crate::format::GrammarError;

/// Everything a location store operation can fail with.
///
/// Validation variants are raised before anything is written; a failed save
/// leaves previously persisted rows untouched.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error("character definition formats are required")]
    EmptySegmentLength,

    #[error("a segment cannot be empty")]
    EmptySegment,

    #[error("segment '{segment}' is {length} characters long, the maximum is {max}")]
    SegmentTooLong {
        segment: String,
        length: usize,
        max: usize,
    },

    #[error("path '{path}' is {length} characters long, the maximum is {max}")]
    PathTooLong {
        path: String,
        length: usize,
        max: usize,
    },

    #[error("a segment cannot contain the segment delimiter '{separator}', found '{segment}'")]
    SeparatorInSegment { segment: String, separator: String },

    #[error("you cannot have a segment as a child to itself, '{segment}' is already an ancestor")]
    SelfAncestry { segment: String },

    #[error(
        "all segments must be derived from the same default, ancestor {ancestor_id} uses \
         default {found} but this segment uses default {expected}"
    )]
    CrossDefault {
        ancestor_id: i32,
        expected: i32,
        found: i32,
    },

    #[error("there are more segments than defined formats, found: {found}, allowed: {allowed}")]
    DepthExceeded { found: u64, allowed: u64 },

    #[error("segment is '{segment}', this is an unalterable root location")]
    ImmutableRoot { segment: String },

    #[error("segment '{segment}' does not match the character definition '{char_definition}'")]
    SegmentMismatch {
        segment: String,
        char_definition: String,
    },

    #[error("the separator must be 1 to 3 characters long, found '{separator}'")]
    InvalidSeparator { separator: String },

    #[error("owner {owner_id} already has a location default named '{name}'")]
    DuplicateDefault { owner_id: i32, name: String },

    #[error("the parent chain of location code {id} loops back on itself or exceeds {limit} levels")]
    CycleDetected { id: i32, limit: usize },

    #[error("location code {id} still has children")]
    HasChildren { id: i32 },

    #[error("{entity} {id} does not exist")]
    NotFound { entity: &'static str, id: i32 },

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl LocationError {
    pub(crate) fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    /// True for errors caused by the submitted values rather than the backend.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Database(_) | Self::NotFound { .. })
    }
}

pub type Result<T, E = LocationError> = std::result::Result<T, E>;
