// src/domain/tool.rs

/// Interactive calculator/utility page. Only active tools are published.
#[derive(Debug, Clone)]
pub struct Tool {
    pub slug: String,
    pub name: String,
    pub status: ToolStatus,
    /// Raw date string, possibly malformed.
    pub updated: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolStatus {
    Active,
    Retired,
}

impl Tool {
    pub fn is_active(&self) -> bool {
        self.status == ToolStatus::Active
    }
}
