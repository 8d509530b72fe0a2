// src/infrastructure/content/mod.rs
//
// Compiled-in content catalogs. Definitions come from the external authoring
// process; the type system is the only schema validation.
mod articles;
mod newsletters;
mod routes;
mod tools;

pub use articles::seed_index;
pub use newsletters::newsletter_backlist;
pub use routes::STATIC_ROUTES;
pub use tools::tool_catalog;
