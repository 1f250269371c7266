use delivery_router_lib::{
    calculate_route, default_network, shortest_path, CostModel, Location, PathOutcome, RouteGraph,
};

fn triangle() -> RouteGraph {
    let mut graph = RouteGraph::new();
    for name in ["A", "B", "C", "D"] {
        graph.add_location(Location::new(name)).expect("add vertex");
    }
    graph
        .set_route(&Location::new("A"), &Location::new("B"), 5.0)
        .expect("route A-B");
    graph
        .set_route(&Location::new("B"), &Location::new("C"), 3.0)
        .expect("route B-C");
    graph
        .set_route(&Location::new("A"), &Location::new("C"), 10.0)
        .expect("route A-C");
    graph
}

#[test]
fn detour_beats_the_direct_road() {
    let graph = triangle();
    let result = calculate_route(
        &graph,
        &CostModel::default(),
        &Location::new("A"),
        &Location::new("C"),
    )
    .expect("route");

    assert_eq!(
        result.path(),
        &[Location::new("A"), Location::new("B"), Location::new("C")]
    );
    assert_eq!(result.distance(), 8.0);
    assert_eq!(result.cost(), 12_000.0);
    assert!((result.time() - 8.0 / 60.0).abs() < 1e-9);
}

#[test]
fn overwriting_a_route_weight_changes_later_queries() {
    let mut graph = triangle();
    let a = Location::new("A");
    let b = Location::new("B");
    let c = Location::new("C");

    let before = shortest_path(&graph, &a, &c).expect("query");
    assert_eq!(before.distance(), 8.0);

    graph.set_route(&a, &b, 2.0).expect("overwrite A-B");
    let after = shortest_path(&graph, &a, &c).expect("query");
    assert_eq!(after.steps(), &[a.clone(), b, c]);
    assert_eq!(after.distance(), 5.0);
}

#[test]
fn isolated_vertex_is_unreachable() {
    let graph = triangle();
    let result = calculate_route(
        &graph,
        &CostModel::default(),
        &Location::new("A"),
        &Location::new("D"),
    )
    .expect("route");

    assert!(!result.is_reachable());
    assert!(result.path().is_empty());
    assert!(result.distance().is_infinite());
    assert!(result.cost().is_infinite());
    assert!(result.time().is_infinite());
}

#[test]
fn reported_distance_matches_the_edge_weights_along_the_path() {
    let graph = default_network().expect("seed network");
    let outcome = shortest_path(&graph, &Location::new("Tunja"), &Location::new("Nobsa"))
        .expect("query");

    let PathOutcome::Found { steps, distance } = outcome else {
        panic!("Tunja and Nobsa are connected");
    };
    let sum: f64 = steps
        .windows(2)
        .map(|pair| graph.edge_weight(&pair[0], &pair[1]).expect("edge on path"))
        .sum();
    assert!((sum - distance).abs() < 1e-9);
    assert_eq!(distance, 54.5 + 7.2);
}

#[test]
fn direct_road_wins_when_cheaper_than_any_detour() {
    let graph = default_network().expect("seed network");
    let outcome = shortest_path(&graph, &Location::new("Tunja"), &Location::new("Sogamoso"))
        .expect("query");

    assert_eq!(
        outcome.steps(),
        &[Location::new("Tunja"), Location::new("Sogamoso")]
    );
    assert_eq!(outcome.distance(), 70.6);
}

#[test]
fn cost_and_time_scale_with_the_model_constants() {
    let graph = triangle();
    let model = CostModel::new(2000.0, 80.0);
    let result = calculate_route(&graph, &model, &Location::new("A"), &Location::new("B"))
        .expect("route");

    assert_eq!(result.distance(), 5.0);
    assert_eq!(result.cost(), 10_000.0);
    assert!((result.time() - 5.0 / 80.0).abs() < 1e-9);
}
