use crate::maximum_flow::error::FlowError;
use num_traits::NumAssign;
use std::collections::VecDeque;

#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
}

// as declared, kept apart from the residual arcs
#[derive(PartialEq, Debug, Clone)]
pub struct OriginalEdge<Flow> {
    pub from: usize,
    pub to: usize,
    pub upper: Flow,
    pub(crate) arc: usize,
}

// Every declared edge owns a forward arc and a reverse arc pointing at each other through `rev`.
// A reverse arc stores `flow = upper - f` (f = flow of its forward arc), so its residual capacity is f.
#[derive(PartialEq, Debug, Clone)]
pub(crate) struct ResidualArc<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
    pub rev: usize,
}

impl<Flow> ResidualArc<Flow>
where
    Flow: NumAssign + Copy,
{
    #[inline]
    pub fn residual_capacity(&self) -> Flow {
        self.upper - self.flow
    }
}

#[derive(Default)]
pub struct Graph<Flow> {
    num_nodes: usize,
    pub(crate) arcs: Vec<ResidualArc<Flow>>,
    adjacency: Vec<Vec<usize>>,
    original_edges: Vec<OriginalEdge<Flow>>,
}

impl<Flow> Graph<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn new(num_nodes: usize) -> Self {
        Graph { num_nodes, arcs: Vec::new(), adjacency: vec![Vec::new(); num_nodes], original_edges: Vec::new() }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.original_edges.len()
    }

    #[inline]
    pub fn num_arcs(&self) -> usize {
        self.arcs.len()
    }

    pub fn add_node(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.num_nodes += 1;
        self.num_nodes - 1
    }

    pub fn add_nodes(&mut self, num_nodes: usize) -> Vec<usize> {
        self.adjacency.resize(self.num_nodes + num_nodes, Vec::new());
        self.num_nodes += num_nodes;
        ((self.num_nodes - num_nodes)..self.num_nodes).collect()
    }

    pub(crate) fn check_node(&self, node: usize) -> Result<(), FlowError> {
        if node >= self.num_nodes {
            return Err(FlowError::NodeOutOfRange { node, num_nodes: self.num_nodes });
        }
        Ok(())
    }

    // return edge index
    pub fn add_directed_edge(&mut self, from: usize, to: usize, upper: Flow) -> Result<usize, FlowError> {
        self.check_node(from)?;
        self.check_node(to)?;
        if upper < Flow::zero() {
            return Err(FlowError::NegativeCapacity { from, to });
        }

        let forward = self.arcs.len();
        let backward = forward + 1;
        self.arcs.push(ResidualArc { from, to, flow: Flow::zero(), upper, rev: backward });
        self.arcs.push(ResidualArc { from: to, to: from, flow: upper, upper, rev: forward });
        self.adjacency[from].push(forward);
        self.adjacency[to].push(backward);

        self.original_edges.push(OriginalEdge { from, to, upper, arc: forward });
        Ok(self.original_edges.len() - 1)
    }

    // panics if arc >= num_arcs
    #[inline]
    pub fn residual_capacity(&self, arc: usize) -> Flow {
        self.arcs[arc].residual_capacity()
    }

    // arcs leaving u in insertion order, reverse arcs included; panics if u >= num_nodes
    #[inline]
    pub fn neighbors(&self, u: usize) -> &[usize] {
        &self.adjacency[u]
    }

    pub fn original_edges(&self) -> &[OriginalEdge<Flow>] {
        &self.original_edges
    }

    pub fn get_edge(&self, edge_id: usize) -> Option<Edge<Flow>> {
        let original = self.original_edges.get(edge_id)?;
        let arc = &self.arcs[original.arc];
        Some(Edge { from: original.from, to: original.to, flow: arc.flow, upper: original.upper })
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge<Flow>> + '_ {
        self.original_edges.iter().map(|original| Edge {
            from: original.from,
            to: original.to,
            flow: self.arcs[original.arc].flow,
            upper: original.upper,
        })
    }

    // net flow leaving source
    pub fn maximum_flow(&self, source: usize) -> Flow {
        let (out_flow, in_flow) = self.edges().fold((Flow::zero(), Flow::zero()), |(mut out_flow, mut in_flow), edge| {
            if edge.from == source {
                out_flow += edge.flow;
            }
            if edge.to == source {
                in_flow += edge.flow;
            }
            (out_flow, in_flow)
        });
        out_flow - in_flow
    }

    // source side of a minimum cut once the flow is maximal
    pub fn minimum_cut(&self, source: usize) -> Result<Vec<usize>, FlowError> {
        self.check_node(source)?;

        let mut cut = Vec::new();
        let mut visited = vec![false; self.num_nodes];
        let mut que = VecDeque::from([source]);
        visited[source] = true;

        while let Some(u) = que.pop_front() {
            cut.push(u);
            for &arc in self.adjacency[u].iter() {
                let to = self.arcs[arc].to;
                if !visited[to] && self.arcs[arc].residual_capacity() > Flow::zero() {
                    visited[to] = true;
                    que.push_back(to);
                }
            }
        }

        Ok(cut)
    }

    pub fn cut_capacity(&self, side: &[usize]) -> Flow {
        let mut inside = vec![false; self.num_nodes];
        side.iter().filter(|&&u| u < self.num_nodes).for_each(|&u| inside[u] = true);

        self.original_edges
            .iter()
            .filter(|e| inside[e.from] && !inside[e.to])
            .fold(Flow::zero(), |sum, e| sum + e.upper)
    }

    pub fn reset_flows(&mut self) {
        for original in self.original_edges.iter() {
            let forward = original.arc;
            let backward = self.arcs[forward].rev;
            self.arcs[forward].flow = Flow::zero();
            self.arcs[backward].flow = self.arcs[backward].upper;
        }
    }

    #[inline]
    pub(crate) fn push_flow(&mut self, arc: usize, flow: Flow) {
        let rev = self.arcs[arc].rev;

        // update flow
        self.arcs[arc].flow += flow;
        self.arcs[rev].flow -= flow;
    }

    // caller keeps the current flow of the edge within `upper`
    pub(crate) fn set_upper(&mut self, edge_id: usize, upper: Flow) {
        let forward = self.original_edges[edge_id].arc;
        let backward = self.arcs[forward].rev;
        debug_assert!(self.arcs[forward].flow <= upper);

        self.arcs[forward].upper = upper;
        self.arcs[backward].upper = upper;
        self.arcs[backward].flow = upper - self.arcs[forward].flow;
    }

    // flow has to fit the edge's current upper bound
    pub(crate) fn set_flow(&mut self, edge_id: usize, flow: Flow) {
        let forward = self.original_edges[edge_id].arc;
        let backward = self.arcs[forward].rev;
        debug_assert!(flow <= self.arcs[forward].upper);

        self.arcs[forward].flow = flow;
        self.arcs[backward].flow = self.arcs[backward].upper - flow;
    }

    pub(crate) fn restore_capacities(&mut self) {
        for edge_id in 0..self.original_edges.len() {
            let upper = self.original_edges[edge_id].upper;
            self.set_upper(edge_id, upper);
        }
    }
}
