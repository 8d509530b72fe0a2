// src/domain/registry.rs
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use crate::domain::article::{Article, ArticleId, FundType, Pillar};
use crate::domain::errors::{DomainError, DomainResult};

/// The full immutable set of article records, addressable by id and
/// enumerable in definition order. Definition order is load-bearing: pillar
/// lookups, related-article tie-breaks, and manifest ordering all rely on it.
#[derive(Debug)]
pub struct ContentRegistry {
    articles: Vec<Article>,
    by_id: HashMap<ArticleId, usize>,
}

impl ContentRegistry {
    /// Two definitions with the same id indicate corrupt authoring data; the
    /// process must not start in that case.
    pub fn new(articles: Vec<Article>) -> DomainResult<Self> {
        let mut by_id = HashMap::with_capacity(articles.len());
        let mut pairs = HashSet::new();
        for (position, article) in articles.iter().enumerate() {
            if by_id.insert(article.id.clone(), position).is_some() {
                return Err(DomainError::DuplicateId(article.id.to_string()));
            }
            if !pairs.insert((article.fund_type, article.pillar)) {
                tracing::warn!(
                    fund_type = article.fund_type.as_str(),
                    pillar = article.pillar.as_str(),
                    article_id = article.id.as_str(),
                    "multiple articles share a fund-type/pillar pair; pillar lookups return the first"
                );
            }
        }
        Ok(Self { articles, by_id })
    }

    pub fn get(&self, id: &ArticleId) -> Option<&Article> {
        self.by_id.get(id).map(|&position| &self.articles[position])
    }

    /// Definition order.
    pub fn all(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// Constructed-once, read-only view over a [`ContentRegistry`] with a lazily
/// derived taxonomy index. Shareable across threads behind an `Arc` without
/// locking.
#[derive(Debug)]
pub struct ContentIndex {
    registry: ContentRegistry,
    fund_type_slots: OnceLock<HashMap<FundType, Vec<usize>>>,
}

impl ContentIndex {
    pub fn new(registry: ContentRegistry) -> Self {
        Self {
            registry,
            fund_type_slots: OnceLock::new(),
        }
    }

    pub fn from_articles(articles: Vec<Article>) -> DomainResult<Self> {
        Ok(Self::new(ContentRegistry::new(articles)?))
    }

    pub fn registry(&self) -> &ContentRegistry {
        &self.registry
    }

    fn fund_type_slots(&self) -> &HashMap<FundType, Vec<usize>> {
        self.fund_type_slots.get_or_init(|| {
            let mut slots: HashMap<FundType, Vec<usize>> = HashMap::new();
            for (position, article) in self.registry.all().iter().enumerate() {
                slots.entry(article.fund_type).or_default().push(position);
            }
            slots
        })
    }

    /// All articles for a fund type, in registry order. A fund type with no
    /// articles yields an empty vec, not an error.
    pub fn by_fund_type(&self, fund_type: FundType) -> Vec<&Article> {
        self.fund_type_slots()
            .get(&fund_type)
            .map(|positions| {
                positions
                    .iter()
                    .map(|&position| &self.registry.all()[position])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// First article matching the pair, in registry order. `None` when the
    /// pair has no article.
    pub fn by_fund_type_and_pillar(&self, fund_type: FundType, pillar: Pillar) -> Option<&Article> {
        self.by_fund_type(fund_type)
            .into_iter()
            .find(|article| article.pillar == pillar)
    }
}
