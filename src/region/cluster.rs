use crate::region::common::RegionId;

use serde::{Deserialize, Serialize};

/// Contiguous grouping of regions sharing a geographic classification,
/// e.g. a single island or one lake.
///
/// Member sets are non-owning handle lists into the region arena.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    pub name: String,
    pub regions: Vec<RegionId>,
}

impl Cluster {
    pub fn new(name: impl Into<String>, regions: Vec<RegionId>) -> Cluster {
        Cluster {
            name: name.into(),
            regions,
        }
    }
}

/// Coarse land-mass/water-body grouping of clusters.
///
/// `is_land` selects the cost model applied when leaving a region: elevation
/// shaped costs on land, flat distance costs on water.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MegaCluster {
    pub is_land: bool,
    pub regions: Vec<RegionId>,
}

impl MegaCluster {
    pub fn new(is_land: bool, regions: Vec<RegionId>) -> MegaCluster {
        MegaCluster { is_land, regions }
    }
}
