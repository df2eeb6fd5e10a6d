use crate::graph::traits::cost::Costing;
use crate::graph::traits::util::{graph, lake, land, port, sea, ELDAN, VETRA};
use crate::region::common::RegionId;
use crate::region::{City, CityKind};

use approx::assert_relative_eq;

#[test]
fn steep_ascent_charges_climb_penalty() {
    let g = graph(
        vec![land(0, 0.0, 0.0, 0.0), land(1, 100.0, 0.0, 0.5)],
        &[(0, 1)],
    );
    let low = g.region(&RegionId::new(0)).unwrap();
    let high = g.region(&RegionId::new(1)).unwrap();

    // Ascending: 100 base + 1000 * 0.5 climb.
    assert_relative_eq!(g.region_cost(low, high), 600.0, epsilon = 1e-9);
    // Descending carries no climb term at all.
    assert_relative_eq!(g.region_cost(high, low), 100.0, epsilon = 1e-9);
}

#[test]
fn settlements_relieve_steep_climbs() {
    let g = graph(
        vec![
            land(0, 0.0, 0.0, 0.0),
            land(1, 100.0, 0.0, 0.5).with_city(City::new("Passwatch", CityKind::Fort)),
        ],
        &[(0, 1)],
    );
    let from = g.region(&RegionId::new(0)).unwrap();
    let to = g.region(&RegionId::new(1)).unwrap();
    assert_relative_eq!(g.region_cost(from, to), 100.0, epsilon = 1e-9);

    // Below the relief threshold the settlement changes nothing: 100 + 300.
    let g = graph(
        vec![
            land(0, 0.0, 0.0, 0.0),
            land(1, 100.0, 0.0, 0.3).with_city(City::new("Passwatch", CityKind::Fort)),
        ],
        &[(0, 1)],
    );
    let from = g.region(&RegionId::new(0)).unwrap();
    let to = g.region(&RegionId::new(1)).unwrap();
    assert_relative_eq!(g.region_cost(from, to), 400.0, epsilon = 1e-9);
}

#[test]
fn rivers_borders_and_roads_compose_in_order() {
    let g = graph(
        vec![
            land(0, 0.0, 0.0, 0.0).with_state(ELDAN),
            land(1, 100.0, 0.0, 0.0)
                .with_state(VETRA)
                .with_river()
                .with_road(),
        ],
        &[(0, 1)],
    );
    let from = g.region(&RegionId::new(0)).unwrap();
    let to = g.region(&RegionId::new(1)).unwrap();

    // 100 * 0.6 (river) * 1.2 (border) * 0.2 (road).
    assert_relative_eq!(g.region_cost(from, to), 14.4, epsilon = 1e-9);
}

#[test]
fn roads_scale_cost_by_exactly_one_fifth() {
    let plain = graph(
        vec![land(0, 0.0, 0.0, 0.0), land(1, 80.0, 60.0, 0.2)],
        &[(0, 1)],
    );
    let paved = graph(
        vec![land(0, 0.0, 0.0, 0.0), land(1, 80.0, 60.0, 0.2).with_road()],
        &[(0, 1)],
    );

    let unpaved_cost = plain.region_cost(
        plain.region(&RegionId::new(0)).unwrap(),
        plain.region(&RegionId::new(1)).unwrap(),
    );
    let paved_cost = paved.region_cost(
        paved.region(&RegionId::new(0)).unwrap(),
        paved.region(&RegionId::new(1)).unwrap(),
    );

    assert!(paved_cost < unpaved_cost);
    assert_relative_eq!(paved_cost, unpaved_cost * 0.2, epsilon = 1e-9);
}

#[test]
fn unset_state_differs_from_any_state() {
    let g = graph(
        vec![land(0, 0.0, 0.0, 0.0), land(1, 100.0, 0.0, 0.0).with_state(VETRA)],
        &[(0, 1)],
    );
    let stateless = g.region(&RegionId::new(0)).unwrap();
    let governed = g.region(&RegionId::new(1)).unwrap();

    // None vs Some is a border crossing in both directions.
    assert_relative_eq!(g.region_cost(stateless, governed), 120.0, epsilon = 1e-9);
    assert_relative_eq!(g.region_cost(governed, stateless), 120.0, epsilon = 1e-9);

    // Two stateless regions are compatriots.
    let g = graph(
        vec![land(0, 0.0, 0.0, 0.0), land(1, 100.0, 0.0, 0.0)],
        &[(0, 1)],
    );
    let a = g.region(&RegionId::new(0)).unwrap();
    let b = g.region(&RegionId::new(1)).unwrap();
    assert_relative_eq!(g.region_cost(a, b), 100.0, epsilon = 1e-9);
}

#[test]
fn water_origin_ignores_destination_features() {
    let g = graph(
        vec![
            sea(0, 0.0, 0.0),
            land(1, 100.0, 0.0, 0.9)
                .with_state(VETRA)
                .with_river()
                .with_road()
                .with_city(port("Saltmere")),
        ],
        &[(0, 1)],
    );
    let from = g.region(&RegionId::new(0)).unwrap();
    let to = g.region(&RegionId::new(1)).unwrap();

    // 0.8 * Euclidean, no climb, no river/border/road terms.
    assert_relative_eq!(g.region_cost(from, to), 80.0, epsilon = 1e-9);
}

#[test]
fn estimate_reuses_the_edge_formula_between_distant_regions() {
    let g = graph(
        vec![
            land(0, 0.0, 0.0, 0.0),
            land(1, 100.0, 0.0, 0.1),
            land(2, 200.0, 0.0, 0.4).with_river(),
        ],
        &[(0, 1), (1, 2)],
    );
    let start = g.region(&RegionId::new(0)).unwrap();
    let goal = g.region(&RegionId::new(2)).unwrap();

    // The heuristic is the edge formula applied to a non-adjacent pair.
    assert_relative_eq!(
        g.estimate(RegionId::new(0), RegionId::new(2)),
        g.region_cost(start, goal),
        epsilon = 1e-9
    );
}

#[test]
fn lakes_are_never_expanded() {
    let g = graph(
        vec![
            land(0, 0.0, 0.0, 0.0),
            lake(1, 100.0, 0.0),
            land(2, 200.0, 0.0, 0.0),
        ],
        &[(0, 1), (1, 2), (0, 2)],
    );

    let expansion = g.expand(RegionId::new(0));
    assert!(expansion.iter().all(|(id, _)| *id != RegionId::new(1)));
    assert!(expansion.iter().any(|(id, _)| *id == RegionId::new(2)));
}

#[test]
fn land_reaches_water_only_through_its_own_port() {
    // A coast without a port is landlocked towards the sea.
    let g = graph(
        vec![land(0, 0.0, 0.0, 0.0), sea(1, 100.0, 0.0)],
        &[(0, 1)],
    );
    assert!(g.expand(RegionId::new(0)).is_empty());

    // The same coast with a port expands onto the water, priced by the
    // land-origin branch.
    let g = graph(
        vec![
            land(0, 0.0, 0.0, 0.0).with_city(port("Saltmere")),
            sea(1, 100.0, 0.0),
        ],
        &[(0, 1)],
    );
    let expansion = g.expand(RegionId::new(0));
    assert_eq!(expansion.len(), 1);

    let (id, cost) = expansion[0];
    assert_eq!(id, RegionId::new(1));
    assert_relative_eq!(cost, 100.0, epsilon = 1e-9);
}

#[test]
fn water_reaches_land_only_through_destination_ports() {
    let g = graph(
        vec![
            sea(0, 0.0, 0.0),
            land(1, 100.0, 0.0, 0.0).with_city(port("Corvane")),
            land(2, 0.0, 100.0, 0.0).with_city(City::new("Hillfort", CityKind::Fort)),
            land(3, 0.0, -100.0, 0.0),
        ],
        &[(0, 1), (0, 2), (0, 3)],
    );

    let expansion = g.expand(RegionId::new(0));
    assert_eq!(expansion.len(), 1);

    let (id, cost) = expansion[0];
    assert_eq!(id, RegionId::new(1));
    assert_relative_eq!(cost, 80.0, epsilon = 1e-9);
}

#[test]
fn open_sea_expands_freely() {
    let g = graph(
        vec![sea(0, 0.0, 0.0), sea(1, 60.0, 80.0)],
        &[(0, 1)],
    );

    let expansion = g.expand(RegionId::new(0));
    assert_eq!(expansion.len(), 1);
    assert_relative_eq!(expansion[0].1, 80.0, epsilon = 1e-9);
}
