//! The region graph and its routing surface.
//!
//! [`RegionGraph`] freezes a generated world into an immutable structure:
//! symmetric adjacency, the region arena, and a spatial index over region
//! sites. All queries run on `&self` and are safe to issue concurrently;
//! regenerating a world replaces the whole graph value.

#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod item;
#[doc(hidden)]
pub mod site;
pub mod traits;

#[doc(inline)]
pub use error::GraphError;
#[doc(inline)]
pub use item::{GraphStructure, RegionGraph, Weight, WorldData};
#[doc(inline)]
pub use site::Site;
#[doc(inline)]
pub use traits::{Cost, Costing, Expansion, Route, Scan};
