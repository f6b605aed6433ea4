pub mod health;
pub mod metrics;
pub mod social_graph;
pub mod swagger;
