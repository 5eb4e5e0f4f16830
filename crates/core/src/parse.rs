//! HTML parsing facade.
//!
//! Wraps the parse-tree collaborator behind [`Document`] and [`Element`] so
//! the extraction pipeline only ever talks CSS selectors, text, and
//! attributes. The waterfall helpers implement the shared "try selectors in
//! order, first non-empty match wins" policy used for every fallback chain.

use scraper::{Html, Selector};
use url::Url;

use crate::{LegendaError, Result};

/// A parsed page plus the location it was fetched from.
///
/// The base location drives canonical-id normalization, media-URL
/// absolutization, and the deobfuscation key, so listing and content
/// extraction expect documents built with [`Document::parse_with_base`].
pub struct Document {
    html: Html,
    base_url: Option<Url>,
}

impl Document {
    /// Parses HTML without an origin location.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html), base_url: None }
    }

    /// Parses HTML fetched from `base_url`.
    pub fn parse_with_base(html: &str, base_url: Url) -> Self {
        Self { html: Html::parse_document(html), base_url: Some(base_url) }
    }

    /// The location this document was fetched from, if known.
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Serializes the whole document back to HTML.
    pub fn as_string(&self) -> String {
        self.html.html()
    }

    /// Selects elements by CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`LegendaError::InvalidSelector`] if the selector string does
    /// not parse.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = Selector::parse(selector)
            .map_err(|e| LegendaError::InvalidSelector(format!("{selector}: {e}")))?;
        Ok(self.html.select(&sel).map(|el| Element { el }).collect())
    }

    /// Returns all matches of the first selector in the chain that matches
    /// anything. Selectors that fail to parse are skipped, so one stale entry
    /// in a fallback chain cannot poison the rest.
    pub fn waterfall(&'_ self, selectors: &[String]) -> Vec<Element<'_>> {
        for selector in selectors {
            if let Ok(matches) = self.select(selector)
                && !matches.is_empty()
            {
                tracing::debug!(%selector, count = matches.len(), "selector chain resolved");
                return matches;
            }
        }
        Vec::new()
    }

    /// True if any selector in the chain matches at least one node.
    pub fn matches_any(&self, selectors: &[String]) -> bool {
        !self.waterfall(selectors).is_empty()
    }

    /// Concatenated text of the whole document.
    pub fn text_content(&self) -> String {
        self.html.root_element().text().collect()
    }
}

/// A single node of a parsed document.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    el: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Concatenated text of all descendant text nodes.
    pub fn text(&self) -> String {
        self.el.text().collect()
    }

    /// HTML inside this element, excluding its own tags.
    pub fn inner_html(&self) -> String {
        self.el.inner_html()
    }

    /// HTML including this element's own tags.
    pub fn outer_html(&self) -> String {
        self.el.html()
    }

    /// Attribute value, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.el.value().attr(name)
    }

    /// First attribute from `names` whose value is present and non-blank.
    pub fn first_attr(&self, names: &[String]) -> Option<&str> {
        names
            .iter()
            .filter_map(|name| self.attr(name))
            .map(str::trim)
            .find(|value| !value.is_empty())
    }

    /// Lowercase tag name.
    pub fn tag_name(&self) -> String {
        self.el.value().name().to_lowercase()
    }

    /// Selects descendant elements by CSS selector.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = Selector::parse(selector)
            .map_err(|e| LegendaError::InvalidSelector(format!("{selector}: {e}")))?;
        Ok(self.el.select(&sel).map(|el| Element { el }).collect())
    }

    /// First match of the first selector in the chain that matches anything
    /// under this element. Unparsable selectors are skipped.
    pub fn first_match(&'_ self, selectors: &[String]) -> Option<Element<'_>> {
        for selector in selectors {
            if let Ok(mut matches) = self.select(selector)
                && !matches.is_empty()
            {
                return Some(matches.remove(0));
            }
        }
        None
    }
}
