use crate::domain::newsletter::NewsletterIssue;

/// Static back-catalog of newsletter issues.
pub fn newsletter_backlist() -> Vec<NewsletterIssue> {
    vec![
        NewsletterIssue {
            slug: "2024-q2-operations-brief".into(),
            title: "Q2 2024 Operations Brief".into(),
            published: Some("2024-07-08".into()),
        },
        NewsletterIssue {
            slug: "2024-q1-operations-brief".into(),
            title: "Q1 2024 Operations Brief".into(),
            published: Some("2024-04-05".into()),
        },
        NewsletterIssue {
            slug: "2023-year-in-review".into(),
            title: "2023 Year in Review".into(),
            published: Some("2024-01-12".into()),
        },
    ]
}
