mod by_fund_type;
mod by_pillar;
mod related;
mod service;

pub use service::ArticleQueryService;
