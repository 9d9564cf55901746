//! Caller-supplied values for creating and updating location records.
//!
//! Derived columns (`path`, `level`, `segment_length`) and timestamps have no
//! field here: the store computes them.

use serde::{Deserialize, Deserializer};

use crate::entity::location_default::DEFAULT_SEPARATOR;

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

// Keeps an explicit `null` apart from a missing field.
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewLocationDefault {
    pub owner_id: i32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub shared: bool,
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl NewLocationDefault {
    pub fn new(owner_id: i32, name: impl Into<String>) -> Self {
        Self {
            owner_id,
            name: name.into(),
            description: None,
            shared: false,
            separator: default_separator(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationDefaultChanges {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub shared: Option<bool>,
    pub separator: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewLocationFormat {
    pub location_default_id: i32,
    pub char_definition: String,
    #[serde(default)]
    pub segment_order: i32,
    #[serde(default)]
    pub description: String,
}

impl NewLocationFormat {
    pub fn new(
        location_default_id: i32,
        char_definition: impl Into<String>,
        segment_order: i32,
    ) -> Self {
        Self {
            location_default_id,
            char_definition: char_definition.into(),
            segment_order,
            description: String::new(),
        }
    }
}

/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationFormatChanges {
    pub location_default_id: Option<i32>,
    pub char_definition: Option<String>,
    pub segment_order: Option<i32>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewLocationCode {
    pub location_format_id: i32,
    pub segment: String,
    #[serde(default)]
    pub parent_id: Option<i32>,
}

impl NewLocationCode {
    pub fn root(location_format_id: i32, segment: impl Into<String>) -> Self {
        Self {
            location_format_id,
            segment: segment.into(),
            parent_id: None,
        }
    }

    pub fn child(location_format_id: i32, segment: impl Into<String>, parent_id: i32) -> Self {
        Self {
            location_format_id,
            segment: segment.into(),
            parent_id: Some(parent_id),
        }
    }
}

/// Fields left as `None` keep their stored value; `parent_id: Some(None)`
/// turns the node into a root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationCodeChanges {
    pub location_format_id: Option<i32>,
    pub segment: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub parent_id: Option<Option<i32>>,
}
