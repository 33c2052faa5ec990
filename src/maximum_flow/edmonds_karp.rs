use crate::maximum_flow::error::FlowError;
use crate::maximum_flow::graph::Graph;
use log::{debug, trace};
use num_traits::NumAssign;
use std::collections::VecDeque;
use std::fmt::Debug;

// augments on top of the flow the graph already carries
#[derive(Default)]
pub struct EdmondsKarp {
    prev: Vec<usize>, // arc used to reach each node
    visited: Vec<bool>,
    queue: VecDeque<usize>,
}

impl EdmondsKarp {
    pub fn solve<Flow>(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Result<Flow, FlowError>
    where
        Flow: NumAssign + Ord + Copy + Debug,
    {
        graph.check_node(source)?;
        graph.check_node(sink)?;
        if source == sink {
            debug!("source and sink are both {source}; nothing to augment");
            return Ok(Flow::zero());
        }

        self.prev.clear();
        self.prev.resize(graph.num_nodes(), usize::MAX);
        self.visited.clear();
        self.visited.resize(graph.num_nodes(), false);

        let mut augmentations = 0;
        while self.bfs(source, sink, graph) {
            // calculate delta
            let mut delta = graph.residual_capacity(self.prev[sink]);
            let mut v = sink;
            while v != source {
                let arc = self.prev[v];
                delta = delta.min(graph.residual_capacity(arc));
                v = graph.arcs[arc].from;
            }

            // update flow
            let mut v = sink;
            while v != source {
                let arc = self.prev[v];
                graph.push_flow(arc, delta);
                v = graph.arcs[arc].from;
            }

            augmentations += 1;
            trace!("augmenting path #{augmentations} carries {delta:?}");
        }

        let flow = graph.maximum_flow(source);
        debug!("maximum flow {source} -> {sink} is {flow:?} after {augmentations} augmentations");
        Ok(flow)
    }

    // marks nodes on discovery so every node is queued at most once
    fn bfs<Flow>(&mut self, source: usize, sink: usize, graph: &Graph<Flow>) -> bool
    where
        Flow: NumAssign + Ord + Copy,
    {
        self.prev.fill(usize::MAX);
        self.visited.fill(false);
        self.queue.clear();

        self.visited[source] = true;
        self.queue.push_back(source);
        while let Some(u) = self.queue.pop_front() {
            if u == sink {
                break;
            }

            for &arc in graph.neighbors(u) {
                let to = graph.arcs[arc].to;
                if self.visited[to] || graph.residual_capacity(arc) == Flow::zero() {
                    continue;
                }

                self.visited[to] = true;
                self.prev[to] = arc;
                self.queue.push_back(to);
            }
        }

        self.visited[sink]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_shortest_paths() {
        let mut graph = Graph::new(4);
        graph.add_directed_edge(0, 1, 1).unwrap();
        graph.add_directed_edge(0, 2, 1).unwrap();
        graph.add_directed_edge(1, 2, 1).unwrap();
        graph.add_directed_edge(1, 3, 1).unwrap();
        graph.add_directed_edge(2, 3, 1).unwrap();

        assert_eq!(EdmondsKarp::default().solve(0, 3, &mut graph), Ok(2));
        assert_eq!(graph.get_edge(2).unwrap().flow, 0);
    }

    #[test]
    fn reverse_arcs_undo_earlier_routing() {
        let mut graph = Graph::new(4);
        graph.add_directed_edge(0, 1, 1).unwrap();
        graph.add_directed_edge(1, 2, 1).unwrap();
        graph.add_directed_edge(2, 3, 1).unwrap();
        graph.add_directed_edge(0, 2, 1).unwrap();
        graph.add_directed_edge(1, 3, 1).unwrap();

        let mut solver = EdmondsKarp::default();
        // route 0-1-2-3 by hand, then let the solver cancel 1->2
        for arc in [0, 2, 4] {
            graph.push_flow(arc, 1);
        }
        assert_eq!(solver.solve(0, 3, &mut graph), Ok(2));
        assert_eq!(graph.get_edge(1).unwrap().flow, 0);
    }

    #[test]
    fn unsigned_flows_never_underflow() {
        let mut graph: Graph<u8> = Graph::new(3);
        graph.add_directed_edge(0, 1, 255).unwrap();
        graph.add_directed_edge(1, 2, 200).unwrap();
        graph.add_directed_edge(0, 2, 55).unwrap();

        assert_eq!(EdmondsKarp::default().solve(0, 2, &mut graph), Ok(255));
    }
}
