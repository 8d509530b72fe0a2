use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    application::{
        ports::time::Clock,
        sitemap::entry::{ChangeFrequency, SitemapEntry},
    },
    config::SiteConfig,
    domain::{article::FundType, newsletter::NewsletterIssue, registry::ContentIndex, tool::Tool},
};

const HOMEPAGE_PRIORITY: f64 = 1.0;
const STATIC_ROUTE_PRIORITY: f64 = 0.5;
const TOOL_PRIORITY: f64 = 0.7;
const NEWSLETTER_PRIORITY: f64 = 0.6;
const FUND_TYPE_PAGE_PRIORITY: f64 = 0.8;
const ARTICLE_PRIORITY: f64 = 0.7;

/// Merges every content source into one ordered URL manifest. The merge
/// order is fixed: homepage, static routes, active tools, newsletters,
/// fund-type pages, article pages. Nothing here can abort the build; a
/// malformed date degrades to the injected clock's notion of now.
pub struct SitemapBuilder<'a> {
    index: &'a ContentIndex,
    tools: &'a [Tool],
    newsletters: &'a [NewsletterIssue],
    static_routes: &'a [&'a str],
    config: &'a SiteConfig,
    clock: &'a dyn Clock,
}

impl<'a> SitemapBuilder<'a> {
    pub fn new(
        index: &'a ContentIndex,
        tools: &'a [Tool],
        newsletters: &'a [NewsletterIssue],
        static_routes: &'a [&'a str],
        config: &'a SiteConfig,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            index,
            tools,
            newsletters,
            static_routes,
            config,
            clock,
        }
    }

    pub fn build(&self) -> Vec<SitemapEntry> {
        let base = self.config.base_url();
        let now = self.clock.now();
        let mut entries = Vec::new();

        entries.push(SitemapEntry {
            url: base.to_owned(),
            last_modified: now,
            change_frequency: ChangeFrequency::Weekly,
            priority: HOMEPAGE_PRIORITY,
        });

        for route in self.static_routes {
            entries.push(SitemapEntry {
                url: format!("{base}/{route}"),
                last_modified: now,
                change_frequency: ChangeFrequency::Monthly,
                priority: STATIC_ROUTE_PRIORITY,
            });
        }

        for tool in self.tools.iter().filter(|tool| tool.is_active()) {
            entries.push(SitemapEntry {
                url: format!("{base}/tools/{}", tool.slug),
                last_modified: self.resolve_date(tool.updated.as_deref(), now),
                change_frequency: ChangeFrequency::Monthly,
                priority: TOOL_PRIORITY,
            });
        }

        for issue in self.newsletters {
            entries.push(SitemapEntry {
                url: format!("{base}/newsletters/{}", issue.slug),
                last_modified: self.resolve_date(issue.published.as_deref(), now),
                change_frequency: ChangeFrequency::Monthly,
                priority: NEWSLETTER_PRIORITY,
            });
        }

        for fund_type in FundType::ALL {
            entries.push(SitemapEntry {
                url: format!("{base}/funds/{fund_type}"),
                last_modified: now,
                change_frequency: ChangeFrequency::Weekly,
                priority: FUND_TYPE_PAGE_PRIORITY,
            });
        }

        for article in self.index.registry().all() {
            entries.push(SitemapEntry {
                url: format!(
                    "{base}/funds/{}/{}/{}",
                    article.fund_type, article.pillar, article.slug
                ),
                last_modified: self.resolve_date(article.freshness_date(), now),
                change_frequency: ChangeFrequency::Monthly,
                priority: ARTICLE_PRIORITY,
            });
        }

        tracing::debug!(entries = entries.len(), "sitemap manifest assembled");
        entries
    }

    fn resolve_date(&self, raw: Option<&str>, now: DateTime<Utc>) -> DateTime<Utc> {
        match raw {
            Some(raw) => parse_recorded_date(raw).unwrap_or_else(|| {
                tracing::debug!(raw, "unparsable date on manifest item, using build time");
                now
            }),
            None => now,
        }
    }
}

/// Accepts RFC 3339 or a bare `YYYY-MM-DD` day.
fn parse_recorded_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
