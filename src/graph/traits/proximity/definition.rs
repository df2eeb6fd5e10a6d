use crate::region::Region;

use geo::Point;

/// Spatial lookups against the region site index.
pub trait Scan {
    /// The region whose site lies nearest to `point`.
    fn scan_region(&self, point: Point) -> Option<&Region>;

    /// An unsorted iterator of regions whose sites fall within the square of
    /// half-width `distance` around `point`.
    ///
    /// ### Note
    /// This function implements a square-scan: it bounds the search to a
    /// square envelope rather than a circle, so it may include sites past
    /// the straight-line distance near the corners. This resolution method
    /// is significantly cheaper than a circular scan.
    fn scan_regions<'a>(
        &'a self,
        point: &Point,
        distance: f64,
    ) -> impl Iterator<Item = &'a Region>;
}
