use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{AsRefStr, Display, EnumString};

/// Location types a generated city may take.
///
/// The routing layer distinguishes only [`CityKind::Port`], which permits
/// land/water transitions through its region; the remaining kinds exist for
/// the generator and are opaque to routing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum CityKind {
    Capital,
    Port,
    Mine,
    Agro,
    Trade,
    Lighthouse,
    Fort,
}

/// Point of interest attached to a region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub kind: CityKind,
}

impl City {
    pub fn new(name: impl Into<String>, kind: CityKind) -> City {
        City {
            name: name.into(),
            kind,
        }
    }

    #[inline]
    pub fn is_port(&self) -> bool {
        self.kind == CityKind::Port
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}
