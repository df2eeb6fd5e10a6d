use serde::{Deserialize, Serialize};

/// Biome classification of a region, as assigned by the generator's
/// humidity/temperature pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Biome {
    pub name: String,
    /// Display color, RGB.
    pub color: [u8; 3],
}

impl Biome {
    /// Biome name of lake cells, which no route may enter.
    pub const LAKE: &'static str = "Lake";

    pub fn new(name: impl Into<String>, color: [u8; 3]) -> Biome {
        Biome {
            name: name.into(),
            color,
        }
    }

    #[inline]
    pub fn is_lake(&self) -> bool {
        self.name == Self::LAKE
    }
}
