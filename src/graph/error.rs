use crate::region::common::{ClusterId, MegaClusterId, RegionId, StateId};

use std::fmt::{Display, Formatter};

/// Referential-integrity violations rejected when freezing a world.
///
/// The generation pipeline guarantees these never occur; hitting one means
/// the upstream data is malformed, so construction fails fast instead of
/// defaulting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    DuplicateRegion(RegionId),
    UnknownRegion(RegionId),
    UnknownCluster(RegionId, ClusterId),
    UnknownMegaCluster(RegionId, MegaClusterId),
    UnknownState(RegionId, StateId),
    SelfAdjacency(RegionId),
}

impl Display for GraphError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::DuplicateRegion(region) => {
                write!(f, "duplicate region {region:?}")
            }
            GraphError::UnknownRegion(region) => {
                write!(f, "adjacency references unknown region {region:?}")
            }
            GraphError::UnknownCluster(region, cluster) => {
                write!(f, "region {region:?} references unknown cluster {cluster:?}")
            }
            GraphError::UnknownMegaCluster(region, mega) => {
                write!(
                    f,
                    "region {region:?} references unknown mega-cluster {mega:?}"
                )
            }
            GraphError::UnknownState(region, state) => {
                write!(f, "region {region:?} references unknown state {state:?}")
            }
            GraphError::SelfAdjacency(region) => {
                write!(f, "region {region:?} lists itself as a neighbor")
            }
        }
    }
}

impl std::error::Error for GraphError {}
