use super::ArticleQueryService;
use crate::{
    application::dto::ArticleDto,
    domain::article::{FundType, Pillar},
};

impl ArticleQueryService {
    /// First article matching the (fund type, pillar) pair in registry
    /// order. `None` for unknown strings or when the pair has no article.
    pub fn article_by_pillar(&self, fund_type: &str, pillar: &str) -> Option<ArticleDto> {
        let fund_type = fund_type.parse::<FundType>().ok()?;
        let pillar = pillar.parse::<Pillar>().ok()?;
        self.index
            .by_fund_type_and_pillar(fund_type, pillar)
            .map(Into::into)
    }
}
