// tests/support/builders.rs
use std::sync::Arc;

use fundops_core::domain::article::*;
use fundops_core::domain::registry::ContentIndex;

pub struct ArticleBuilder {
    id: String,
    title: String,
    subtitle: String,
    slug: String,
    fund_type: FundType,
    pillar: Pillar,
    body: String,
    published_date: Option<String>,
    last_updated_date: Option<String>,
    reading_time: u32,
}

impl ArticleBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: "Test Article".into(),
            subtitle: "Test subtitle".into(),
            slug: "test-article".into(),
            fund_type: FundType::PrivateEquity,
            pillar: Pillar::Cfo,
            body: "<p>Test body</p>".into(),
            published_date: None,
            last_updated_date: None,
            reading_time: 5,
        }
    }

    pub fn fund_type(mut self, fund_type: FundType) -> Self {
        self.fund_type = fund_type;
        self
    }

    pub fn pillar(mut self, pillar: Pillar) -> Self {
        self.pillar = pillar;
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn published_date(mut self, date: impl Into<String>) -> Self {
        self.published_date = Some(date.into());
        self
    }

    pub fn last_updated_date(mut self, date: impl Into<String>) -> Self {
        self.last_updated_date = Some(date.into());
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            subtitle: self.subtitle,
            slug: ArticleSlug::new(self.slug).unwrap(),
            fund_type: self.fund_type,
            pillar: self.pillar,
            body: ArticleBody::new(self.body).unwrap(),
            published_date: self.published_date,
            last_updated_date: self.last_updated_date,
            reading_time: self.reading_time,
        }
    }
}

/// The three-article fixture: A and B share a fund type, A and C share a
/// pillar.
pub fn scenario_index() -> Arc<ContentIndex> {
    let articles = vec![
        ArticleBuilder::new("1")
            .fund_type(FundType::HedgeFunds)
            .pillar(Pillar::Tax)
            .slug("article-a")
            .build(),
        ArticleBuilder::new("2")
            .fund_type(FundType::HedgeFunds)
            .pillar(Pillar::Banking)
            .slug("article-b")
            .build(),
        ArticleBuilder::new("3")
            .fund_type(FundType::RealEstate)
            .pillar(Pillar::Tax)
            .slug("article-c")
            .build(),
    ];
    Arc::new(ContentIndex::from_articles(articles).unwrap())
}
