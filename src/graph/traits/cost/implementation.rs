use crate::graph::RegionGraph;
use crate::graph::traits::cost::definition::{Cost, Costing, Expansion};
use crate::region::common::RegionId;
use crate::region::{City, Region};

use geo::{Distance, Euclidean};
use log::trace;

/// Additive penalty per unit of elevation gained between two sites; at any
/// meaningful elevation gap it dominates the base distance.
const CLIMB_PENALTY: Cost = 1000.0;
/// Relief subtracted when a settled destination mitigates a steep ascent,
/// applied only once the running cost reaches the relief itself.
const CITY_RELIEF: Cost = 500.0;
const RIVER_FACTOR: Cost = 0.6;
const BORDER_FACTOR: Cost = 1.2;
const ROAD_FACTOR: Cost = 0.2;
const SEA_FACTOR: Cost = 0.8;

/// A land origin may exit onto water only through its own port.
fn land_departs_via_port(origin: &Region) -> bool {
    origin.city.as_ref().is_some_and(City::is_port)
}

/// A water origin may land only where the destination hosts a port.
fn water_lands_via_port(destination: &Region) -> bool {
    destination.city.as_ref().is_some_and(City::is_port)
}

impl RegionGraph {
    /// Directional cost of traversing `from` into `to`.
    ///
    /// Land origins pay the Euclidean site distance shaped by terrain and
    /// infrastructure: an additive climb penalty (relieved by a settled
    /// destination), then river, border and road factors in that order.
    /// Water origins pay flat distance at the sea factor.
    ///
    /// The two directions of one adjacency generally differ: descending is
    /// free of the climb term, and the river/road/state attributes consulted
    /// are the destination's.
    pub fn region_cost(&self, from: &Region, to: &Region) -> Cost {
        let mut cost = Euclidean.distance(from.site, to.site);

        if !self.is_land(from) {
            // Open water: distance only, slightly under the land baseline.
            return cost * SEA_FACTOR;
        }

        let ascent = to.height - from.height;
        if ascent > 0.0 {
            cost += CLIMB_PENALTY * ascent;
            // Mountain passes with a settlement are cheaper to route through.
            if to.city.is_some() && cost >= CITY_RELIEF {
                cost -= CITY_RELIEF;
            }
        }
        if to.has_river {
            cost *= RIVER_FACTOR;
        }
        if to.state != from.state {
            cost *= BORDER_FACTOR;
        }
        if to.has_road {
            cost *= ROAD_FACTOR;
        }

        cost
    }
}

impl Costing for RegionGraph {
    fn estimate(&self, start: RegionId, goal: RegionId) -> Cost {
        self.region_cost(self.resolve(&start), self.resolve(&goal))
    }

    fn expand(&self, region: RegionId) -> Expansion {
        let from = self.resolve(&region);
        let from_land = self.is_land(from);

        self.graph
            .neighbors(region)
            .filter_map(|id| {
                let to = self.resolve(&id);

                if to.biome.is_lake() {
                    return None;
                }

                let to_land = self.is_land(to);
                if from_land && !to_land && !land_departs_via_port(from) {
                    return None;
                }
                if !from_land && to_land && !water_lands_via_port(to) {
                    return None;
                }

                Some((id, self.region_cost(from, to)))
            })
            .collect()
    }

    fn on_visit(&self, region: RegionId) {
        trace!("Visiting {region:?}");
    }
}
