use crate::maximum_flow::edmonds_karp::EdmondsKarp;
use crate::maximum_flow::error::FlowError;
use crate::maximum_flow::graph::Graph;
use log::{debug, info};
use num_traits::NumAssign;
use std::fmt::Debug;

// Each declared edge gets one try, in declaration order, at carrying one unit less.
// A try resets all flows and re-solves with every edge capped at its budget.
#[derive(Default)]
pub struct FlowMinimizer {
    solver: EdmondsKarp,
}

impl FlowMinimizer {
    // returns the preserved maximum flow value; declared capacities are restored on exit
    pub fn minimize<Flow>(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Result<Flow, FlowError>
    where
        Flow: NumAssign + Ord + Copy + Debug,
    {
        let maximum_flow = self.solver.solve(source, sink, graph)?;
        if source == sink {
            return Ok(maximum_flow);
        }

        let mut budgets: Vec<Flow> = graph.edges().map(|edge| edge.flow).collect();
        let mut reduced = 0;
        for edge_id in 0..budgets.len() {
            if budgets[edge_id] == Flow::zero() {
                debug!("edge #{edge_id} carries no flow; skipped");
                continue;
            }

            budgets[edge_id] -= Flow::one();
            let flow = self.solve_within(source, sink, graph, &budgets)?;
            if flow == maximum_flow {
                reduced += 1;
                debug!("edge #{edge_id} lowered to {:?}", budgets[edge_id]);
            } else {
                budgets[edge_id] += Flow::one();
                debug!("edge #{edge_id} kept at {:?}: maximum flow would drop to {flow:?}", budgets[edge_id]);
            }
        }

        let flow = if Self::is_flow(source, sink, graph, &budgets, maximum_flow) {
            graph.reset_flows();
            graph.restore_capacities();
            for (edge_id, &budget) in budgets.iter().enumerate() {
                graph.set_flow(edge_id, budget);
            }
            maximum_flow
        } else {
            // budgets do not balance at some node; fall back to any flow within them
            debug!("budgets are not a flow; re-solving within them");
            let flow = self.solve_within(source, sink, graph, &budgets)?;
            graph.restore_capacities();
            flow
        };
        debug_assert_eq!(flow, maximum_flow);

        info!("lowered {reduced} of {} edges, maximum flow stays {maximum_flow:?}", budgets.len());
        Ok(flow)
    }

    fn solve_within<Flow>(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>, budgets: &[Flow]) -> Result<Flow, FlowError>
    where
        Flow: NumAssign + Ord + Copy + Debug,
    {
        graph.reset_flows();
        for (edge_id, &budget) in budgets.iter().enumerate() {
            graph.set_upper(edge_id, budget);
        }
        self.solver.solve(source, sink, graph)
    }

    // conserved at every inner node and worth `value` at the source
    fn is_flow<Flow>(source: usize, sink: usize, graph: &Graph<Flow>, flows: &[Flow], value: Flow) -> bool
    where
        Flow: NumAssign + Ord + Copy,
    {
        let mut in_flow = vec![Flow::zero(); graph.num_nodes()];
        let mut out_flow = vec![Flow::zero(); graph.num_nodes()];
        for (edge, &flow) in graph.original_edges().iter().zip(flows.iter()) {
            out_flow[edge.from] += flow;
            in_flow[edge.to] += flow;
        }

        let conserved = (0..graph.num_nodes()).filter(|&u| u != source && u != sink).all(|u| in_flow[u] == out_flow[u]);
        conserved && out_flow[source] >= in_flow[source] && out_flow[source] - in_flow[source] == value
    }
}
