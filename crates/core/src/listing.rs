//! Catalog listing extraction.
//!
//! Listing templates drift between deployments of the same engine, so every
//! structural lookup is a fallback chain: the first entry selector that
//! matches anything supplies the entry nodes, and link, title, and cover are
//! each resolved through their own candidate lists. An entry that cannot
//! produce a link and a title is dropped; it never aborts the page.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::parse::{Document, Element};
use crate::profile::SiteProfile;

/// Selector configuration for one site's listing pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingSelectors {
    /// Entry-node selector chain; first selector with a match wins.
    pub entries: Vec<String>,
    /// Link-element chain, searched inside each entry node.
    pub link: Vec<String>,
    /// Candidate attributes holding the link target, in priority order.
    pub link_attrs: Vec<String>,
    /// Title-element chain; falls back to the link's `title` attribute, then
    /// the link text.
    pub title: Vec<String>,
    /// Cover-image element chain.
    pub cover: Vec<String>,
    /// Candidate attributes holding the cover URL, lazy-load variants first.
    pub cover_attrs: Vec<String>,
    /// "There is a next page" indicator chain.
    pub next_page: Vec<String>,
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self {
            entries: vec![
                "div.list .row".to_string(),
                "div.col-novel-main .row".to_string(),
                "div.book-item".to_string(),
                "article.bs".to_string(),
            ],
            link: vec!["h3 a".to_string(), "h2 a".to_string(), "a".to_string()],
            link_attrs: vec!["href".to_string(), "data-href".to_string(), "data-url".to_string()],
            title: vec!["h3".to_string(), "h2".to_string(), ".title".to_string()],
            cover: vec!["img".to_string()],
            cover_attrs: vec![
                "data-src".to_string(),
                "src".to_string(),
                "data-lazy-src".to_string(),
                "data-original".to_string(),
                "data-cfsrc".to_string(),
            ],
            next_page: vec![
                "ul.pagination li.next:not(.disabled) a".to_string(),
                "li.next a".to_string(),
                "a.next".to_string(),
            ],
        }
    }
}

/// One catalog entry of a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Canonical path identifying the entry within the site.
    pub id: String,
    pub title: String,
    pub cover_url: Option<String>,
}

/// One page of catalog entries plus a continuation flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPage {
    pub entries: Vec<CatalogEntry>,
    pub has_next_page: bool,
}

/// Extracts a listing page from a parsed document.
///
/// Duplicate canonical ids (overlapping selector matches, repeated shelves)
/// collapse to the first occurrence in document order. `has_next_page` is
/// true iff any selector of the `next_page` chain matches at least one node.
pub fn extract_listing(doc: &Document, profile: &SiteProfile) -> ListingPage {
    let selectors = &profile.listing;
    let mut entries = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for node in doc.waterfall(&selectors.entries) {
        let Some(entry) = extract_entry(&node, selectors, &profile.base_url) else {
            tracing::trace!(site = %profile.name, "dropping entry node without link or title");
            continue;
        };
        if seen.insert(entry.id.clone()) {
            entries.push(entry);
        }
    }

    if entries.is_empty() {
        tracing::debug!(site = %profile.name, "no listing entries matched");
    }

    ListingPage { entries, has_next_page: doc.matches_any(&selectors.next_page) }
}

fn extract_entry(node: &Element<'_>, selectors: &ListingSelectors, base: &Url) -> Option<CatalogEntry> {
    let link = node.first_match(&selectors.link)?;
    let href = link.first_attr(&selectors.link_attrs)?.to_string();

    let title = node
        .first_match(&selectors.title)
        .map(|el| squish(&el.text()))
        .filter(|t| !t.is_empty())
        .or_else(|| link.attr("title").map(squish).filter(|t| !t.is_empty()))
        .or_else(|| Some(squish(&link.text())).filter(|t| !t.is_empty()))?;

    let cover_url = node
        .first_match(&selectors.cover)
        .and_then(|img| img.first_attr(&selectors.cover_attrs).map(str::to_string));

    Some(CatalogEntry { id: canonical_id(&href, base), title, cover_url })
}

/// Normalizes a listing link to the canonical path identifying its entry.
///
/// A link prefixed by the site base has the prefix stripped; a foreign
/// absolute URL keeps only its path; an existing path passes through; any
/// other value gets a leading slash.
pub fn canonical_id(link: &str, base: &Url) -> String {
    let link = link.trim();
    let base_prefix = base.as_str().trim_end_matches('/');

    if let Some(rest) = link.strip_prefix(base_prefix) {
        return if rest.starts_with('/') { rest.to_string() } else { format!("/{rest}") };
    }
    if let Ok(absolute) = Url::parse(link)
        && !absolute.cannot_be_a_base()
    {
        return absolute.path().to_string();
    }
    if link.starts_with('/') { link.to_string() } else { format!("/{link}") }
}

fn squish(text: impl AsRef<str>) -> String {
    text.as_ref().split_whitespace().collect::<Vec<_>>().join(" ")
}
