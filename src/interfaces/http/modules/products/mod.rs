//! Products module — catalog listing, detail and stats

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
