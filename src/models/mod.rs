pub mod social_graph;
pub mod user;

pub use social_graph::*;
pub use user::*;
