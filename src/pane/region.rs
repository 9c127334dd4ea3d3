//! Screen regions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two screen areas that can host a visible content view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Left,
    Right,
}

impl Region {
    pub fn all() -> [Region; 2] {
        [Region::Left, Region::Right]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Left => f.write_str("left"),
            Region::Right => f.write_str("right"),
        }
    }
}
