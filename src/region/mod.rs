//! Region-graph entities produced by the generation pipeline.
//!
//! Everything in this module is written once by the generator and read-only
//! for the lifetime of a routing query. Entities reference one another by
//! the stable handles in [`common`], never by owning pointers.

pub mod biome;
pub mod city;
pub mod cluster;
pub mod item;
pub mod state;

pub use biome::*;
pub use city::*;
pub use cluster::*;
pub use item::*;
pub use state::*;

pub mod common {
    //! Stable handles addressing entities of a generated world.

    use serde::{Deserialize, Serialize};

    /// Stable handle of a [`Region`](super::Region) within its world.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    pub struct RegionId(u32);

    impl RegionId {
        pub const fn new(identifier: u32) -> RegionId {
            RegionId(identifier)
        }

        /// Anonymous identity used as the probe in spatial queries.
        pub(crate) const fn null() -> RegionId {
            RegionId(u32::MAX)
        }

        pub const fn identifier(&self) -> u32 {
            self.0
        }
    }

    /// Handle of a [`Cluster`](super::Cluster).
    #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    pub struct ClusterId(u32);

    impl ClusterId {
        pub const fn new(identifier: u32) -> ClusterId {
            ClusterId(identifier)
        }
    }

    /// Handle of a [`MegaCluster`](super::MegaCluster).
    #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    pub struct MegaClusterId(u32);

    impl MegaClusterId {
        pub const fn new(identifier: u32) -> MegaClusterId {
            MegaClusterId(identifier)
        }
    }

    /// Handle of a [`State`](super::State).
    #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    pub struct StateId(u32);

    impl StateId {
        pub const fn new(identifier: u32) -> StateId {
            StateId(identifier)
        }
    }
}
