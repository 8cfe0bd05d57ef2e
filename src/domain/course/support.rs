//! Course delivery medium.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Equipment a course is taught on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Support {
    Ski,
    Snowboard,
}

impl fmt::Display for Support {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Support::Ski => "SKI",
            Support::Snowboard => "SNOWBOARD",
        };
        write!(f, "{}", s)
    }
}
