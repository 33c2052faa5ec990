pub mod maximum_flow;
pub mod traffic;
