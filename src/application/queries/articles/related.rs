use super::ArticleQueryService;
use crate::{
    application::dto::ArticleDto,
    domain::{
        article::{Article, ArticleId},
        registry::ContentRegistry,
    },
};

/// Shared fund type outweighs any pillar match.
const FUND_TYPE_WEIGHT: u32 = 2;
const PILLAR_WEIGHT: u32 = 1;

impl ArticleQueryService {
    /// Up to `limit` other articles related to the source, most relevant
    /// first. Unknown source id yields an empty vec.
    pub fn related_articles(&self, source_id: &ArticleId, limit: usize) -> Vec<ArticleDto> {
        let registry = self.index.registry();
        let Some(source) = registry.get(source_id) else {
            return Vec::new();
        };
        select_related(registry, source, limit)
            .into_iter()
            .map(Into::into)
            .collect()
    }
}

/// Score every candidate, order by score descending with registry position
/// as the tie-break, and truncate. Zero-score candidates stay in the pool,
/// so short result sets pad out with the next registry-order articles. Pure
/// over an unchanged registry: no clock, no randomness.
pub(crate) fn select_related<'a>(
    registry: &'a ContentRegistry,
    source: &Article,
    limit: usize,
) -> Vec<&'a Article> {
    let mut scored: Vec<(u32, usize, &Article)> = registry
        .all()
        .iter()
        .enumerate()
        .filter(|(_, candidate)| candidate.id != source.id)
        .map(|(position, candidate)| (relevance(source, candidate), position, candidate))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    scored.truncate(limit);
    scored.into_iter().map(|(_, _, article)| article).collect()
}

fn relevance(source: &Article, candidate: &Article) -> u32 {
    let mut score = 0;
    if candidate.fund_type == source.fund_type {
        score += FUND_TYPE_WEIGHT;
    }
    if candidate.pillar == source.pillar {
        score += PILLAR_WEIGHT;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{
        ArticleBody, ArticleSlug, ArticleTitle, FundType, Pillar,
    };

    fn article(id: &str, fund_type: FundType, pillar: Pillar) -> Article {
        Article {
            id: ArticleId::new(id).unwrap(),
            title: ArticleTitle::new(format!("Article {id}")).unwrap(),
            subtitle: String::from("sub"),
            slug: ArticleSlug::new(format!("article-{id}")).unwrap(),
            fund_type,
            pillar,
            body: ArticleBody::new("<p>body</p>").unwrap(),
            published_date: None,
            last_updated_date: None,
            reading_time: 4,
        }
    }

    #[test]
    fn fund_type_outranks_pillar() {
        let source = article("s", FundType::HedgeFunds, Pillar::Tax);
        let same_fund = article("f", FundType::HedgeFunds, Pillar::Banking);
        let same_pillar = article("p", FundType::RealEstate, Pillar::Tax);
        assert!(relevance(&source, &same_fund) > relevance(&source, &same_pillar));
    }

    #[test]
    fn both_dimensions_score_highest() {
        let source = article("s", FundType::HedgeFunds, Pillar::Tax);
        let twin = article("t", FundType::HedgeFunds, Pillar::Tax);
        let same_fund = article("f", FundType::HedgeFunds, Pillar::Banking);
        assert!(relevance(&source, &twin) > relevance(&source, &same_fund));
    }

    #[test]
    fn equal_scores_fall_back_to_registry_order() {
        let registry = ContentRegistry::new(vec![
            article("s", FundType::HedgeFunds, Pillar::Tax),
            article("a", FundType::HedgeFunds, Pillar::Banking),
            article("b", FundType::HedgeFunds, Pillar::Audit),
        ])
        .unwrap();
        let source = registry.all()[0].clone();
        let picks: Vec<&str> = select_related(&registry, &source, 2)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(picks, vec!["a", "b"]);
    }

    #[test]
    fn pads_with_unrelated_articles_in_registry_order() {
        let registry = ContentRegistry::new(vec![
            article("s", FundType::HedgeFunds, Pillar::Tax),
            article("x", FundType::RealEstate, Pillar::Banking),
            article("y", FundType::Secondaries, Pillar::Audit),
        ])
        .unwrap();
        let source = registry.all()[0].clone();
        let picks: Vec<&str> = select_related(&registry, &source, 3)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(picks, vec!["x", "y"]);
    }

    #[test]
    fn empty_registry_excluding_source_yields_empty() {
        let registry =
            ContentRegistry::new(vec![article("s", FundType::HedgeFunds, Pillar::Tax)]).unwrap();
        let source = registry.all()[0].clone();
        assert!(select_related(&registry, &source, 5).is_empty());
    }
}
