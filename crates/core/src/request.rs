//! Navigation request construction.
//!
//! One resolver turns the current search state (free text, page, filter
//! selections) into exactly one concrete request. Overlap between filters is
//! settled by [`ROLE_PRIORITY`], an explicit total order over the roles the
//! resolver honors, not by per-site branching.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::filter::{Filter, FilterRole};
use crate::profile::SiteProfile;
use crate::{LegendaError, Result};

/// Endpoint paths and query-parameter names of one site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Default listing path used when no filter applies.
    pub listing_path: String,
    /// Free-text search path.
    pub search_path: String,
    /// Query-parameter name carrying the search text.
    pub search_param: String,
    /// Query-parameter name carrying the 1-based page number.
    pub page_param: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            listing_path: "latest".to_string(),
            search_path: "search".to_string(),
            search_param: "keyword".to_string(),
            page_param: "page".to_string(),
        }
    }
}

/// Search state resolved against a site's filter set, built fresh per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQuery {
    /// 1-based page number.
    pub page: u32,
    pub free_text: Option<String>,
    /// Non-empty raw values per role; the first filter of a role wins.
    pub applied: BTreeMap<FilterRole, String>,
}

impl ResolvedQuery {
    pub fn new(page: u32, free_text: Option<String>, filters: &[Filter]) -> Self {
        let mut applied = BTreeMap::new();
        for filter in filters {
            let value = filter.query_value();
            if !value.is_empty() {
                applied.entry(filter.role).or_insert_with(|| value.to_string());
            }
        }
        Self { page, free_text, applied }
    }
}

/// A fully-resolved navigation request, ready for the transport collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub url: Url,
    pub headers: Vec<(String, String)>,
}

/// Filter roles in resolution order. The first role whose applied value is
/// non-empty determines the endpoint; everything after it is ignored. Roles
/// absent from this list (e.g. [`FilterRole::Sort`]) never influence the
/// endpoint, which lets profiles carry filters ahead of resolver support.
pub const ROLE_PRIORITY: &[FilterRole] = &[FilterRole::Genre, FilterRole::Kind];

/// Builds the one navigation request for a search state.
///
/// Resolution order: non-blank free text always wins and targets the search
/// endpoint with every filter ignored; otherwise the highest-priority applied
/// filter's raw value is the endpoint path; otherwise the default listing
/// path. Only the page parameter is ever appended to a filter endpoint.
///
/// # Errors
///
/// Only a structurally broken profile (base URL that cannot absorb the
/// configured paths) produces [`LegendaError::InvalidUrl`]; every search
/// state yields a well-formed request.
pub fn build_page_request(profile: &SiteProfile, query: &ResolvedQuery) -> Result<PageRequest> {
    let endpoints = &profile.endpoints;
    let page = query.page.to_string();

    let free_text = query.free_text.as_deref().map(str::trim).filter(|s| !s.is_empty());

    let url = if let Some(text) = free_text {
        let mut url = join(&profile.base_url, &endpoints.search_path)?;
        url.query_pairs_mut()
            .append_pair(&endpoints.search_param, text)
            .append_pair(&endpoints.page_param, &page);
        url
    } else {
        let path = ROLE_PRIORITY
            .iter()
            .find_map(|role| query.applied.get(role))
            .map(String::as_str)
            .unwrap_or(&endpoints.listing_path);
        let mut url = join(&profile.base_url, path)?;
        url.query_pairs_mut().append_pair(&endpoints.page_param, &page);
        url
    };

    Ok(PageRequest { url, headers: profile.headers.clone() })
}

fn join(base: &Url, path: &str) -> Result<Url> {
    base.join(path)
        .map_err(|e| LegendaError::InvalidUrl(format!("{base} + {path}: {e}")))
}
