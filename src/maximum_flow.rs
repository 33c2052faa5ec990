pub mod edmonds_karp;
pub mod error;
pub mod flow_minimizer;
pub mod graph;
