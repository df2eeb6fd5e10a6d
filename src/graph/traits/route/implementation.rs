use crate::graph::item::Weight;
use crate::graph::traits::cost::{Cost, Costing};
use crate::graph::traits::proximity::definition::Scan;
use crate::graph::traits::route::definition::Route;
use crate::graph::RegionGraph;
use crate::region::common::RegionId;

use geo::Point;
use log::debug;
use pathfinding::prelude::astar;

/// The engine orders costs totally, which `f64` cannot offer; weights are
/// whole hundredths of a world unit instead.
const COST_SCALE: Cost = 100.0;

#[inline]
fn quantize(cost: Cost) -> Weight {
    (cost * COST_SCALE).round() as Weight
}

impl Route for RegionGraph {
    fn route_regions(&self, start: RegionId, goal: RegionId) -> Option<(Weight, Vec<RegionId>)> {
        debug!("Routing {start:?} -> {goal:?}");

        let (path, weight) = astar(
            &start,
            |region| {
                self.on_visit(*region);
                self.expand(*region)
                    .into_iter()
                    .map(|(neighbor, cost)| (neighbor, quantize(cost)))
            },
            |region| quantize(self.estimate(*region, goal)),
            |region| *region == goal,
        )?;

        Some((weight, path))
    }

    fn route_points(&self, start: Point, goal: Point) -> Option<(Weight, Vec<RegionId>)> {
        let start = self.scan_region(start)?.id;
        let goal = self.scan_region(goal)?.id;

        self.route_regions(start, goal)
    }
}
