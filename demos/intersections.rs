use intersection_flow::maximum_flow::flow_minimizer::FlowMinimizer;
use intersection_flow::maximum_flow::graph::Graph;
use intersection_flow::traffic::{light_timings, TrafficModel};

fn run(title: &str, roads: &[(usize, usize, i64)]) {
    let mut graph = Graph::new(6);
    for &(from, to, upper) in roads {
        graph.add_directed_edge(from, to, upper).unwrap();
    }

    let maximum_flow = match FlowMinimizer::default().minimize(0, 5, &mut graph) {
        Ok(flow) => flow,
        Err(err) => {
            eprintln!("{title}: {err}");
            return;
        }
    };

    println!("{title}");
    println!("maximum flow: {maximum_flow}");
    for (k, timing) in light_timings(&TrafficModel::default(), &graph).iter().enumerate() {
        println!(
            "{}\t{} -> {}, flow: {}, green light: {} sec, saved for pedestrians: {} sec, ratio: {:.3}",
            k + 1,
            timing.from,
            timing.to,
            timing.flow,
            timing.green_seconds,
            timing.saved_seconds,
            timing.saved_ratio
        );
    }
    println!();
}

fn main() {
    env_logger::init();

    run(
        "6 roads of capacity 20",
        &[(0, 1, 20), (0, 2, 20), (1, 2, 20), (1, 3, 20), (2, 1, 20), (2, 4, 20), (3, 2, 20), (3, 5, 20), (4, 3, 20), (4, 5, 20)],
    );
    run(
        "6 roads of different capacities",
        &[(0, 1, 16), (0, 2, 13), (1, 2, 10), (1, 3, 12), (2, 1, 4), (2, 4, 14), (3, 2, 9), (3, 5, 20), (4, 3, 7), (4, 5, 4)],
    );
}
