use crate::graph::item::Weight;
use crate::region::common::RegionId;

use geo::Point;

/// Least-cost routing over a region graph.
///
/// Routes are built by a generic search engine fed from the
/// [`Costing`](crate::graph::Costing) provider; costs are directional, so a
/// route and its reverse generally carry different weights.
pub trait Route {
    /// Finds the least-cost route between two regions.
    ///
    /// Returns the summed engine weight and the region sequence, start and
    /// goal inclusive; `None` when no admissible path exists.
    fn route_regions(&self, start: RegionId, goal: RegionId) -> Option<(Weight, Vec<RegionId>)>;

    /// Routes between the regions whose sites lie nearest to two world
    /// points.
    fn route_points(&self, start: Point, goal: Point) -> Option<(Weight, Vec<RegionId>)>;
}
