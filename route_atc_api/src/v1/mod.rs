mod api_models;
mod handlers;
mod router;

pub use router::router;
