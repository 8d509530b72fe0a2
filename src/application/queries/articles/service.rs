use std::sync::Arc;

use crate::domain::registry::ContentIndex;

/// Read-side facade the page layer calls into. Unknown-but-well-typed input
/// always resolves to an empty result, never an error.
pub struct ArticleQueryService {
    pub(super) index: Arc<ContentIndex>,
}

impl ArticleQueryService {
    pub fn new(index: Arc<ContentIndex>) -> Self {
        Self { index }
    }
}
