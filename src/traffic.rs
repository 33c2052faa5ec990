use crate::maximum_flow::graph::{Edge, Graph};
use num_traits::{NumAssign, ToPrimitive};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrafficModel {
    pub vehicle_length: f64, // meters
    pub vehicle_gap: f64,
    pub average_speed: f64, // meters per second
}

impl Default for TrafficModel {
    fn default() -> Self {
        TrafficModel { vehicle_length: 4.5, vehicle_gap: 2.0, average_speed: 8.333 }
    }
}

impl TrafficModel {
    // green includes yellow; the sign of cars is ignored
    pub fn green_light_seconds<N: ToPrimitive>(&self, cars: N) -> u64 {
        let cars = cars.to_f64().map_or(0.0, f64::abs);
        (cars * (self.vehicle_length + self.vehicle_gap) / self.average_speed).ceil() as u64
    }

    // never below zero, even when the cycle is shorter than the green phase
    pub fn red_light_seconds<N: ToPrimitive>(&self, cars: N, cycle_seconds: u64) -> u64 {
        cycle_seconds.saturating_sub(self.green_light_seconds(cars))
    }
}

pub fn green_light_seconds<N: ToPrimitive>(cars: N) -> u64 {
    TrafficModel::default().green_light_seconds(cars)
}

#[derive(Debug, Clone, PartialEq)]
pub struct LightTiming<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub green_seconds: u64,
    pub saved_seconds: u64,
    pub saved_ratio: f64,
}

impl<Flow> LightTiming<Flow>
where
    Flow: ToPrimitive + Copy,
{
    pub fn new(model: &TrafficModel, edge: &Edge<Flow>) -> Self {
        let capacity_seconds = model.green_light_seconds(edge.upper);
        let green_seconds = model.green_light_seconds(edge.flow);
        let saved_seconds = capacity_seconds.saturating_sub(green_seconds);
        let saved_ratio = if capacity_seconds == 0 {
            0.0
        } else {
            (saved_seconds as f64 / capacity_seconds as f64).clamp(0.0, 1.0)
        };

        LightTiming { from: edge.from, to: edge.to, flow: edge.flow, green_seconds, saved_seconds, saved_ratio }
    }
}

pub fn light_timings<Flow>(model: &TrafficModel, graph: &Graph<Flow>) -> Vec<LightTiming<Flow>>
where
    Flow: NumAssign + Ord + Copy + ToPrimitive,
{
    graph.edges().map(|edge| LightTiming::new(model, &edge)).collect()
}
