use crate::graph::site::Site;
use crate::graph::traits::proximity::definition::Scan;
use crate::graph::RegionGraph;
use crate::region::Region;

use geo::Point;
use rstar::AABB;

impl Scan for RegionGraph {
    #[inline]
    fn scan_region(&self, point: Point) -> Option<&Region> {
        let probe = Site::probe(point);
        self.index
            .nearest_neighbor(&probe)
            .and_then(|site| self.region(&site.id))
    }

    #[inline]
    fn scan_regions<'a>(
        &'a self,
        point: &Point,
        distance: f64,
    ) -> impl Iterator<Item = &'a Region> {
        let bottom_left = Site::probe(Point::new(point.x() - distance, point.y() - distance));
        let top_right = Site::probe(Point::new(point.x() + distance, point.y() + distance));

        let bbox = AABB::from_corners(bottom_left, top_right);
        self.index
            .locate_in_envelope(&bbox)
            .filter_map(|site| self.region(&site.id))
    }
}
