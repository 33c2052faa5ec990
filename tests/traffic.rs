use intersection_flow::maximum_flow::flow_minimizer::FlowMinimizer;
use intersection_flow::maximum_flow::graph::Graph;
use intersection_flow::traffic::{green_light_seconds, light_timings, TrafficModel};
use rstest::rstest;

#[rstest]
#[case::no_cars(0, 0)]
#[case::single_car(1, 1)]
#[case::four_cars(4, 4)]
#[case::sixteen_cars(16, 13)]
#[case::twenty_cars(20, 16)]
#[case::negative_count(-20, 16)]
fn green_light_covers_every_car(#[case] cars: i64, #[case] seconds: u64) {
    assert_eq!(green_light_seconds(cars), seconds);
}

#[test]
fn accepts_any_integer_type() {
    assert_eq!(green_light_seconds(20u8), green_light_seconds(20i32));
    assert_eq!(green_light_seconds(20usize), 16);
}

#[rstest]
#[case::leftover_cycle(20, 60, 44)]
#[case::cycle_too_short(20, 10, 0)]
#[case::empty_road(0, 30, 30)]
fn red_light_fills_the_cycle(#[case] cars: i32, #[case] cycle: u64, #[case] seconds: u64) {
    assert_eq!(TrafficModel::default().red_light_seconds(cars, cycle), seconds);
}

#[test]
fn faster_traffic_needs_less_green() {
    let model = TrafficModel { average_speed: 13.0, ..TrafficModel::default() };
    assert_eq!(model.green_light_seconds(20), 10);
}

#[test]
fn timings_follow_declaration_order() {
    let mut graph = Graph::new(4);
    graph.add_directed_edge(0, 1, 20).unwrap();
    graph.add_directed_edge(1, 3, 8).unwrap();
    graph.add_directed_edge(0, 2, 20).unwrap();
    graph.add_directed_edge(2, 3, 20).unwrap();
    FlowMinimizer::default().minimize(0, 3, &mut graph).unwrap();

    let timings = light_timings(&TrafficModel::default(), &graph);
    let ends: Vec<_> = timings.iter().map(|t| (t.from, t.to, t.flow)).collect();
    assert_eq!(ends, vec![(0, 1, 8), (1, 3, 8), (0, 2, 20), (2, 3, 20)]);

    // 8 cars need 7s of the 16s a full road of 20 needs
    assert_eq!(timings[0].green_seconds, 7);
    assert_eq!(timings[0].saved_seconds, 9);
    assert!((timings[0].saved_ratio - 9.0 / 16.0).abs() < 1e-9);

    assert_eq!(timings[2].green_seconds, 16);
    assert_eq!(timings[2].saved_seconds, 0);
    assert_eq!(timings[2].saved_ratio, 0.0);
    assert!(timings.iter().all(|t| (0.0..=1.0).contains(&t.saved_ratio)));
}
