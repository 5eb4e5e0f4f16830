//! Per-site configuration.
//!
//! A [`SiteProfile`] is the whole of a site integration: base URL, endpoint
//! names, selector chains, filter tables, and (for sites that scramble their
//! text) a cipher table. The shared pipeline functions consume profiles as
//! plain data: adding a site means adding a table, not code.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::cipher::CipherTable;
use crate::content::ContentSelectors;
use crate::filter::Filter;
use crate::listing::ListingSelectors;
use crate::request::Endpoints;

/// The declarative strategy record for one site integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteProfile {
    /// Short stable identifier, e.g. `novelfull`.
    pub name: String,
    /// Human-readable site name.
    pub label: String,
    pub base_url: Url,
    #[serde(default)]
    pub endpoints: Endpoints,
    /// Extra request headers some sites require (referer checks and the like).
    #[serde(default)]
    pub headers: Vec<(String, String)>,
    #[serde(default)]
    pub listing: ListingSelectors,
    #[serde(default)]
    pub content: ContentSelectors,
    /// Filter tables offered to the host; order is presentation order.
    #[serde(default)]
    pub filters: Vec<Filter>,
    /// Present only for sites that scramble their chapter text.
    #[serde(default)]
    pub cipher: Option<CipherTable>,
}

impl SiteProfile {
    /// Builds a profile with default selector chains and endpoints.
    ///
    /// `base_url` comes from a compiled-in site table and must be a valid
    /// absolute URL; a broken literal is a defect in the table itself.
    pub fn new(name: impl Into<String>, label: impl Into<String>, base_url: &str) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            base_url: Url::parse(base_url).expect("site base URL must be absolute"),
            endpoints: Endpoints::default(),
            headers: Vec::new(),
            listing: ListingSelectors::default(),
            content: ContentSelectors::default(),
            filters: Vec::new(),
            cipher: None,
        }
    }

    /// A fresh, caller-mutable copy of the site's filter tables.
    pub fn filter_set(&self) -> Vec<Filter> {
        self.filters.clone()
    }
}
