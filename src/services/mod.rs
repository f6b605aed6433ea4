pub mod social_graph_service;

pub use social_graph_service::*;
