use crate::domain::article::Article;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub slug: String,
    pub fund_type: String,
    pub pillar: String,
    pub body: String,
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub last_updated_date: Option<String>,
    pub reading_time: u32,
}

impl From<&Article> for ArticleDto {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.as_str().to_owned(),
            title: article.title.as_str().to_owned(),
            subtitle: article.subtitle.clone(),
            slug: article.slug.as_str().to_owned(),
            fund_type: article.fund_type.as_str().to_owned(),
            pillar: article.pillar.as_str().to_owned(),
            body: article.body.as_str().to_owned(),
            published_date: article.published_date.clone(),
            last_updated_date: article.last_updated_date.clone(),
            reading_time: article.reading_time,
        }
    }
}
