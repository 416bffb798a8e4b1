//! Server module for assembling and running the HTTP service

pub mod builder;
pub mod router;

pub use builder::ServerBuilder;
pub use router::build_routes;
