//! Query location
//!
//! A 2D point attached to the query, used by distance features against a
//! position attribute. An unset location is invalid and carries no attribute.

use serde::{Deserialize, Serialize};

/// Geographic position attached to a query
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    attribute: String,
    x: i32,
    y: i32,
    x_aspect: u32,
    valid: bool,
}

impl Location {
    /// Create a valid location against `attribute`
    pub fn new(attribute: impl Into<String>, x: i32, y: i32) -> Self {
        Location {
            attribute: attribute.into(),
            x,
            y,
            x_aspect: 0,
            valid: true,
        }
    }

    /// Builder: set the x aspect correction factor
    pub fn with_x_aspect(mut self, x_aspect: u32) -> Self {
        self.x_aspect = x_aspect;
        self
    }

    /// Name of the position attribute
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// X coordinate
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Y coordinate
    pub fn y(&self) -> i32 {
        self.y
    }

    /// X aspect correction (0 = none)
    pub fn x_aspect(&self) -> u32 {
        self.x_aspect
    }

    /// Whether the query actually carried a location
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}
