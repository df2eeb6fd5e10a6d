use crate::region::common::RegionId;

use geo::Point;

/// Spatial index entry tying a region to its site point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Site {
    pub id: RegionId,
    pub position: Point,
}

impl Site {
    pub(crate) fn new(id: RegionId, position: Point) -> Site {
        Site { id, position }
    }

    /// Anonymous site used as the query probe for spatial lookups.
    pub(crate) fn probe(position: Point) -> Site {
        Site {
            id: RegionId::null(),
            position,
        }
    }
}

impl rstar::Point for Site {
    type Scalar = f64;
    const DIMENSIONS: usize = 2;

    fn generate(mut generator: impl FnMut(usize) -> Self::Scalar) -> Self {
        Site::probe(Point::new(generator(0), generator(1)))
    }

    fn nth(&self, index: usize) -> Self::Scalar {
        match index {
            0 => self.position.x(),
            1 => self.position.y(),
            _ => unreachable!(),
        }
    }

    fn nth_mut(&mut self, index: usize) -> &mut Self::Scalar {
        match index {
            0 => &mut self.position.0.x,
            1 => &mut self.position.0.y,
            _ => unreachable!(),
        }
    }
}
