//! API routes module.

pub mod docs;
pub mod handlers;
pub mod routes;
pub mod stub;


pub use docs::ApiDoc;
pub use routes::create_router;
