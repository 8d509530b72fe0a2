use super::ArticleQueryService;
use crate::{application::dto::ArticleDto, domain::article::FundType};

impl ArticleQueryService {
    /// Every article for the given fund type, in registry order. A string
    /// that is not a known fund type behaves like a known type with zero
    /// articles.
    pub fn articles_by_fund_type(&self, fund_type: &str) -> Vec<ArticleDto> {
        let Ok(fund_type) = fund_type.parse::<FundType>() else {
            return Vec::new();
        };
        self.index
            .by_fund_type(fund_type)
            .into_iter()
            .map(Into::into)
            .collect()
    }
}
