use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("node {node} is out of range (network has {num_nodes} nodes)")]
    NodeOutOfRange { node: usize, num_nodes: usize },

    #[error("edge {from} -> {to} has a negative capacity")]
    NegativeCapacity { from: usize, to: usize },
}
