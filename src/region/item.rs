use crate::region::biome::Biome;
use crate::region::city::City;
use crate::region::common::{ClusterId, MegaClusterId, RegionId, StateId};

use geo::Point;

/// A terrain cell of the generated world.
///
/// Regions are immutable once the generation pass completes. Adjacency is
/// held by the graph rather than the region itself, so a `Region` stays a
/// plain value with handle references into the world's side tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: RegionId,
    /// Site point of the cell, in world units.
    pub site: Point,
    /// Normalized elevation at the site.
    pub height: f64,
    pub biome: Biome,
    pub has_river: bool,
    pub has_road: bool,
    /// Whether the cell touches the map border.
    pub border: bool,
    pub cluster: ClusterId,
    pub mega_cluster: MegaClusterId,
    pub state: Option<StateId>,
    pub city: Option<City>,
}

impl Region {
    pub fn new(
        id: RegionId,
        site: Point,
        height: f64,
        biome: Biome,
        cluster: ClusterId,
        mega_cluster: MegaClusterId,
    ) -> Region {
        Region {
            id,
            site,
            height,
            biome,
            has_river: false,
            has_road: false,
            border: false,
            cluster,
            mega_cluster,
            state: None,
            city: None,
        }
    }

    pub fn with_river(mut self) -> Region {
        self.has_river = true;
        self
    }

    pub fn with_road(mut self) -> Region {
        self.has_road = true;
        self
    }

    pub fn with_border(mut self) -> Region {
        self.border = true;
        self
    }

    pub fn with_state(mut self, state: StateId) -> Region {
        self.state = Some(state);
        self
    }

    pub fn with_city(mut self, city: City) -> Region {
        self.city = Some(city);
        self
    }
}
