pub mod entity;
pub mod taxonomy;
pub mod value_objects;

pub use entity::Article;
pub use taxonomy::{FundType, Pillar};
pub use value_objects::{ArticleBody, ArticleId, ArticleSlug, ArticleTitle};
