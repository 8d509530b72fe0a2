pub mod builder;
pub mod entry;

pub use builder::SitemapBuilder;
pub use entry::{ChangeFrequency, SitemapEntry};
