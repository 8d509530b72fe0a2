// src/domain/article/entity.rs
use crate::domain::article::taxonomy::{FundType, Pillar};
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleSlug, ArticleTitle};

/// One published piece of content. Constructed once at startup from static
/// definitions and immutable for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub subtitle: String,
    pub slug: ArticleSlug,
    pub fund_type: FundType,
    pub pillar: Pillar,
    pub body: ArticleBody,
    /// Raw authoring-time date strings, possibly malformed. Parsed
    /// defensively at the sitemap boundary only.
    pub published_date: Option<String>,
    pub last_updated_date: Option<String>,
    /// Advisory estimate in minutes. No invariant enforced.
    pub reading_time: u32,
}

impl Article {
    /// Most recent raw date string on record, preferring the update date.
    pub fn freshness_date(&self) -> Option<&str> {
        self.last_updated_date
            .as_deref()
            .or(self.published_date.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new("pe-cfo-001").unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            subtitle: "subtitle".into(),
            slug: ArticleSlug::new("title").unwrap(),
            fund_type: FundType::PrivateEquity,
            pillar: Pillar::Cfo,
            body: ArticleBody::new("<p>body</p>").unwrap(),
            published_date: Some("2024-03-01".into()),
            last_updated_date: None,
            reading_time: 6,
        }
    }

    #[test]
    fn freshness_prefers_update_date() {
        let mut article = sample_article();
        assert_eq!(article.freshness_date(), Some("2024-03-01"));
        article.last_updated_date = Some("2024-06-15".into());
        assert_eq!(article.freshness_date(), Some("2024-06-15"));
    }

    #[test]
    fn freshness_is_none_without_dates() {
        let mut article = sample_article();
        article.published_date = None;
        assert!(article.freshness_date().is_none());
    }
}
