use crate::domain::{
    article::{Article, ArticleBody, ArticleId, ArticleSlug, ArticleTitle, FundType, Pillar},
    errors::DomainResult,
    registry::ContentIndex,
};

struct ArticleSeed {
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    fund_type: FundType,
    pillar: Pillar,
    body: &'static str,
    published: Option<&'static str>,
    updated: Option<&'static str>,
    reading_time: u32,
}

/// Build the production content index from the compiled-in catalog. Fails
/// only on corrupt authoring data (duplicate id); the caller must treat that
/// as fatal.
pub fn seed_index() -> DomainResult<ContentIndex> {
    let articles = SEEDS
        .iter()
        .map(build)
        .collect::<DomainResult<Vec<Article>>>()?;
    ContentIndex::from_articles(articles)
}

fn build(seed: &ArticleSeed) -> DomainResult<Article> {
    let title = ArticleTitle::new(seed.title)?;
    let slug = ArticleSlug::from_title(&title)?;
    Ok(Article {
        id: ArticleId::new(seed.id)?,
        title,
        subtitle: seed.subtitle.to_owned(),
        slug,
        fund_type: seed.fund_type,
        pillar: seed.pillar,
        body: ArticleBody::new(seed.body)?,
        published_date: seed.published.map(ToOwned::to_owned),
        last_updated_date: seed.updated.map(ToOwned::to_owned),
        reading_time: seed.reading_time,
    })
}

const SEEDS: &[ArticleSeed] = &[
    ArticleSeed {
        id: "pe-cfo-001",
        title: "The Outsourced CFO Playbook for Private Equity",
        subtitle: "When a fractional finance chief beats a full-time hire",
        fund_type: FundType::PrivateEquity,
        pillar: Pillar::Cfo,
        body: "<p>Most sub-$500m buyout shops discover the CFO question at the worst possible \
               moment: mid-fundraise.</p><h2>Scope before headcount</h2><p>Management company \
               accounting, fund accounting, and portfolio reporting are three different jobs.</p>",
        published: Some("2024-02-12"),
        updated: Some("2024-07-03"),
        reading_time: 9,
    },
    ArticleSeed {
        id: "pe-fa-002",
        title: "Choosing a Fund Administrator for Buyout Vehicles",
        subtitle: "Waterfall modelling is where cheap administrators get expensive",
        fund_type: FundType::PrivateEquity,
        pillar: Pillar::FundAdministration,
        body: "<p>Capital-call mechanics are commoditised; carry calculations are not.</p>\
               <p>Ask every shortlisted administrator to model your distribution waterfall \
               against last year's actuals before you sign.</p>",
        published: Some("2024-03-05"),
        updated: None,
        reading_time: 7,
    },
    ArticleSeed {
        id: "pe-tax-003",
        title: "Management Fee Waivers After the Latest IRS Guidance",
        subtitle: "Structuring fee-for-carry conversions that survive audit",
        fund_type: FundType::PrivateEquity,
        pillar: Pillar::Tax,
        body: "<p>The safe-harbour line moved again. Significant entrepreneurial risk remains \
               the controlling test, and side-letter guarantees remain the easiest way to \
               fail it.</p>",
        published: Some("2024-05-21"),
        updated: None,
        reading_time: 11,
    },
    ArticleSeed {
        id: "hf-cfo-004",
        title: "Shadow NAV: What Hedge Fund CFOs Actually Reconcile",
        subtitle: "A monthly close checklist for multi-prime books",
        fund_type: FundType::HedgeFunds,
        pillar: Pillar::Cfo,
        body: "<p>Your administrator strikes the official NAV; your investors still expect you \
               to catch the administrator's mistakes.</p><h2>The big four breaks</h2>\
               <p>Pricing, corporate actions, financing accruals, and fee crystallisation.</p>",
        published: Some("2024-01-18"),
        updated: Some("2024-06-30"),
        reading_time: 8,
    },
    ArticleSeed {
        id: "hf-tax-005",
        title: "Trader vs Investor Status for Hedge Fund Taxation",
        subtitle: "Why the distinction drives every K-1 footnote",
        fund_type: FundType::HedgeFunds,
        pillar: Pillar::Tax,
        body: "<p>Section 475 elections, wash sales, and straddle rules all hang off one \
               classification made at the fund level.</p>",
        published: Some("2023-11-02"),
        updated: Some("2024-04-14"),
        reading_time: 10,
    },
    ArticleSeed {
        id: "hf-bank-006",
        title: "Prime Brokerage Cash Sweep Arrangements",
        subtitle: "Unswept balances are uncompensated counterparty risk",
        fund_type: FundType::HedgeFunds,
        pillar: Pillar::Banking,
        body: "<p>Post-2023 every treasurer knows the drill: segregate, sweep, and document \
               the sweep.</p>",
        published: Some("2024-04-09"),
        updated: None,
        reading_time: 6,
    },
    ArticleSeed {
        id: "re-pm-007",
        title: "Property Management Fees Inside Real Estate Funds",
        subtitle: "Affiliated managers and the conflicts disclosure they require",
        fund_type: FundType::RealEstate,
        pillar: Pillar::PropertyManagement,
        body: "<p>LPs rarely object to an affiliated property manager; they object to \
               finding out about it in year three.</p>",
        published: Some("2024-02-27"),
        updated: None,
        reading_time: 7,
    },
    ArticleSeed {
        id: "re-ins-008",
        title: "Insurance Towers for Core-Plus Real Estate Portfolios",
        subtitle: "Layering property, liability, and environmental cover",
        fund_type: FundType::RealEstate,
        pillar: Pillar::Insurance,
        body: "<p>A single blanket policy stops making sense around the fifteenth asset.</p>",
        // Authoring system exported this one without a day component.
        published: Some("2024-06"),
        updated: None,
        reading_time: 9,
    },
    ArticleSeed {
        id: "vc-fr-009",
        title: "First-Time Fund Fundraising: the Data Room LPs Expect",
        subtitle: "Track record attribution when the track record isn't yours",
        fund_type: FundType::VentureCapital,
        pillar: Pillar::Fundraising,
        body: "<p>Emerging managers lose diligence processes on attribution, not on \
               returns.</p><p>Get written consent from your former firm before you cite \
               deals you led there.</p>",
        published: Some("2024-03-19"),
        updated: Some("2024-08-01"),
        reading_time: 12,
    },
    ArticleSeed {
        id: "vc-ir-010",
        title: "Quarterly Letters That Venture LPs Actually Read",
        subtitle: "Reserve math and markdown policy beat narrative",
        fund_type: FundType::VentureCapital,
        pillar: Pillar::InvestorRelations,
        body: "<p>Your LPs hold forty funds. The letters they remember are the ones that \
               state reserve deployment against plan in one table.</p>",
        published: Some("2024-05-06"),
        updated: None,
        reading_time: 5,
    },
    ArticleSeed {
        id: "infra-aud-011",
        title: "Auditing Availability-Payment Infrastructure Assets",
        subtitle: "Revenue recognition when the counterparty is a government",
        fund_type: FundType::Infrastructure,
        pillar: Pillar::Audit,
        body: "<p>Concession accounting sits in an awkward gap between IFRIC 12 and plain \
               lease treatment, and auditors split on it.</p>",
        published: Some("2024-01-30"),
        updated: None,
        reading_time: 10,
    },
    ArticleSeed {
        id: "pc-fa-012",
        title: "Loan Administration for Private Credit Funds",
        subtitle: "Why agency notices break fund accounting pipelines",
        fund_type: FundType::PrivateCredit,
        pillar: Pillar::FundAdministration,
        body: "<p>PIK toggles, amendments, and partial paydowns arrive as PDFs. Your \
               administrator's loan ops team is the parser.</p>",
        published: Some("2024-04-23"),
        updated: Some("2024-07-29"),
        reading_time: 8,
    },
    ArticleSeed {
        id: "sec-cfo-013",
        title: "Secondaries Funds and the Deferred Purchase Price Ledger",
        subtitle: "Tracking obligations the wire never shows",
        fund_type: FundType::Secondaries,
        pillar: Pillar::Cfo,
        body: "<p>Half the purchase price settles at close; the CFO carries the other half \
               as a liability with its own covenant package.</p>",
        published: Some("2024-06-11"),
        updated: None,
        reading_time: 7,
    },
    ArticleSeed {
        id: "gp-fr-014",
        title: "GP Stakes Deals: What Selling a Piece of the Firm Changes",
        subtitle: "Fundraising leverage versus governance drag",
        fund_type: FundType::GpStakes,
        pillar: Pillar::Fundraising,
        body: "<p>A minority stake sale accelerates the next flagship raise and complicates \
               every succession conversation after it.</p>",
        published: Some("2023-12-07"),
        updated: Some("2024-05-15"),
        reading_time: 9,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_builds() {
        let index = seed_index().unwrap();
        assert_eq!(index.registry().len(), SEEDS.len());
    }

    #[test]
    fn seed_ids_are_unique() {
        // Registry construction enforces it, but keep the failure message close
        // to the data.
        let mut ids: Vec<&str> = SEEDS.iter().map(|seed| seed.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SEEDS.len());
    }

    #[test]
    fn slugs_unique_within_taxonomy_pair() {
        let index = seed_index().unwrap();
        for article in index.registry().all() {
            let twins = index
                .by_fund_type(article.fund_type)
                .into_iter()
                .filter(|other| other.pillar == article.pillar && other.slug == article.slug)
                .count();
            assert_eq!(twins, 1, "duplicate slug within pair for {}", article.id);
        }
    }
}
