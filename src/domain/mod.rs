pub mod article;
pub mod errors;
pub mod newsletter;
pub mod registry;
pub mod tool;
