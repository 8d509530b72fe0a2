/// Fixed non-dynamic pages, in the order they appear in the manifest.
pub const STATIC_ROUTES: &[&str] = &["about", "contact", "glossary", "privacy"];
