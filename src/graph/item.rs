use crate::graph::error::GraphError;
use crate::graph::site::Site;
use crate::region::common::{ClusterId, MegaClusterId, RegionId, StateId};
use crate::region::{Cluster, MegaCluster, Region, State};

use geo::Point;
use log::{debug, info};
use petgraph::prelude::UnGraphMap;
use rstar::RTree;
use rustc_hash::{FxHashMap, FxHasher};
use std::fmt::{Debug, Formatter};
use std::hash::BuildHasherDefault;

/// Integer weight consumed by the search engine.
pub type Weight = u32;

pub type GraphStructure = UnGraphMap<RegionId, (), BuildHasherDefault<FxHasher>>;

/// Frozen output of the generation pipeline, handed over to build a
/// [`RegionGraph`].
///
/// Adjacency pairs are undirected; listing a pair once is sufficient.
#[derive(Debug, Default)]
pub struct WorldData {
    pub regions: Vec<Region>,
    pub adjacency: Vec<(RegionId, RegionId)>,
    pub clusters: FxHashMap<ClusterId, Cluster>,
    pub mega_clusters: FxHashMap<MegaClusterId, MegaCluster>,
    pub states: FxHashMap<StateId, State>,
}

/// Region graph of a generated world, actioned upon through the
/// [`Costing`](crate::graph::Costing), [`Route`](crate::graph::Route) and
/// [`Scan`](crate::graph::Scan) traits.
///
/// Adjacency is symmetric at the graph level; traversal costs are not, and
/// are computed per direction on demand rather than stored on edges.
pub struct RegionGraph {
    pub(crate) graph: GraphStructure,
    pub(crate) hash: FxHashMap<RegionId, Region>,
    pub(crate) index: RTree<Site>,
    pub(crate) clusters: FxHashMap<ClusterId, Cluster>,
    pub(crate) mega_clusters: FxHashMap<MegaClusterId, MegaCluster>,
    pub(crate) states: FxHashMap<StateId, State>,
}

impl Debug for RegionGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RegionGraph with {} regions", self.hash.len())
    }
}

impl RegionGraph {
    /// Freezes a generated world into an immutable routing graph.
    ///
    /// Validates referential integrity up front: every cluster, mega-cluster
    /// and state handle must resolve, and every adjacency endpoint must name
    /// a known, distinct region.
    pub fn new(data: WorldData) -> Result<RegionGraph, GraphError> {
        let WorldData {
            regions,
            adjacency,
            clusters,
            mega_clusters,
            states,
        } = data;

        let mut hash: FxHashMap<RegionId, Region> =
            FxHashMap::with_capacity_and_hasher(regions.len(), Default::default());
        let mut sites = Vec::with_capacity(regions.len());

        for region in regions {
            if !clusters.contains_key(&region.cluster) {
                return Err(GraphError::UnknownCluster(region.id, region.cluster));
            }
            if !mega_clusters.contains_key(&region.mega_cluster) {
                return Err(GraphError::UnknownMegaCluster(
                    region.id,
                    region.mega_cluster,
                ));
            }
            if let Some(state) = region.state {
                if !states.contains_key(&state) {
                    return Err(GraphError::UnknownState(region.id, state));
                }
            }

            sites.push(Site::new(region.id, region.site));

            let id = region.id;
            if hash.insert(id, region).is_some() {
                return Err(GraphError::DuplicateRegion(id));
            }
        }

        let mut graph = GraphStructure::with_capacity(hash.len(), adjacency.len());

        // Isolated regions are valid terminals, so every region becomes a
        // node regardless of adjacency.
        for id in hash.keys() {
            graph.add_node(*id);
        }

        for (a, b) in adjacency {
            if a == b {
                return Err(GraphError::SelfAdjacency(a));
            }
            if !hash.contains_key(&a) {
                return Err(GraphError::UnknownRegion(a));
            }
            if !hash.contains_key(&b) {
                return Err(GraphError::UnknownRegion(b));
            }
            graph.add_edge(a, b, ());
        }

        debug!("Indexing {} region sites", sites.len());
        let index = RTree::bulk_load(sites);

        info!(
            "Region graph ready: {} regions, {} adjacencies, {} states",
            hash.len(),
            graph.edge_count(),
            states.len()
        );

        Ok(RegionGraph {
            graph,
            hash,
            index,
            clusters,
            mega_clusters,
            states,
        })
    }

    pub fn index(&self) -> &RTree<Site> {
        &self.index
    }

    pub fn size(&self) -> usize {
        self.hash.len()
    }

    pub fn region(&self, id: &RegionId) -> Option<&Region> {
        self.hash.get(id)
    }

    #[inline]
    pub fn get_position(&self, id: &RegionId) -> Option<Point> {
        self.region(id).map(|region| region.site)
    }

    /// Iterates the graph-adjacent neighbors of a region. Adjacency is
    /// symmetric; traversability and cost are not (see
    /// [`Costing`](crate::graph::Costing)).
    pub fn neighbors(&self, id: RegionId) -> impl Iterator<Item = RegionId> + '_ {
        self.graph.neighbors(id)
    }

    pub fn cluster(&self, id: &ClusterId) -> Option<&Cluster> {
        self.clusters.get(id)
    }

    pub fn mega_cluster(&self, id: &MegaClusterId) -> Option<&MegaCluster> {
        self.mega_clusters.get(id)
    }

    pub fn state(&self, id: &StateId) -> Option<&State> {
        self.states.get(id)
    }

    /// Whether the region sits on a landmass rather than open water.
    #[inline]
    pub fn is_land(&self, region: &Region) -> bool {
        self.mega_clusters
            .get(&region.mega_cluster)
            .expect("mega-cluster handles are validated at construction")
            .is_land
    }

    /// Resolves a handle whose validity the caller asserts. Handles that do
    /// not belong to this graph violate the query precondition and panic.
    pub(crate) fn resolve(&self, id: &RegionId) -> &Region {
        self.hash
            .get(id)
            .unwrap_or_else(|| panic!("region {id:?} is not part of this graph"))
    }
}
