// src/domain/newsletter.rs

/// Back-catalog newsletter issue. The set is a static literal list; issues
/// are never unpublished.
#[derive(Debug, Clone)]
pub struct NewsletterIssue {
    pub slug: String,
    pub title: String,
    /// Raw date string, possibly malformed.
    pub published: Option<String>,
}
