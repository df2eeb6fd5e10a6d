#![doc = include_str!("../readme.md")]

pub mod graph;
pub mod region;

#[doc(inline)]
pub use graph::{Costing, GraphError, RegionGraph, Route, Scan, WorldData};
#[doc(inline)]
pub use region::Region;
