use crate::region::common::RegionId;

use smallvec::SmallVec;

/// Scalar traversal cost, in world units.
pub type Cost = f64;

/// Admissible `(neighbor, cost)` expansions of a single region.
///
/// Voronoi-style cells rarely exceed eight neighbors, so expansions stay
/// inline in the common case.
pub type Expansion = SmallVec<[(RegionId, Cost); 8]>;

/// Cost/adjacency provider driven by a least-cost-path engine.
///
/// All three operations are pure over the frozen world: repeated calls with
/// the same inputs return the same values, and none of them mutate a region.
pub trait Costing {
    /// Estimated travel cost from `start` towards `goal`, ignoring the graph
    /// structure in between.
    ///
    /// Reuses the directional edge-cost formula on a pair that is usually
    /// not graph-adjacent. Because that formula carries multiplicative
    /// penalties, the estimate is *not* a guaranteed lower bound on the true
    /// remaining path cost; the search deliberately trades strict optimality
    /// for speed.
    fn estimate(&self, start: RegionId, goal: RegionId) -> Cost;

    /// Traversable neighbors of `region` with their directional edge costs.
    ///
    /// An empty expansion is a valid terminal state, not an error;
    /// unreachability is the engine's concern to surface.
    fn expand(&self, region: RegionId) -> Expansion;

    /// Diagnostic hook invoked once per engine visit.
    ///
    /// Implementations may log here but must have no observable effect on
    /// the search.
    fn on_visit(&self, _region: RegionId) {}
}
