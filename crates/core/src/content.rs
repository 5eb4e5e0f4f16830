//! Chapter content extraction.
//!
//! The pipeline is ordered: disallowed subtrees are removed first so a stale
//! ad container inside the content root can never survive, then the root is
//! selected through its fallback chain, then the surviving fragment is
//! rewritten in one streaming pass: media references resolved to absolute
//! form and, for cipher sites, paragraph text decoded node by node so the
//! surrounding markup stays untouched.

use std::borrow::Cow;

use lol_html::html_content::{ContentType, Element, TextChunk};
use lol_html::{ElementContentHandlers, HtmlRewriter, Selector, Settings};
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::cipher::CipherTable;
use crate::parse::Document;
use crate::profile::SiteProfile;

/// Selector configuration for one site's reader pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSelectors {
    /// Content-root selector chain; first selector with a match wins.
    pub roots: Vec<String>,
    /// Subtrees removed before the root is selected.
    pub strip: Vec<String>,
}

impl Default for ContentSelectors {
    fn default() -> Self {
        Self {
            roots: vec![
                "#chapter-content".to_string(),
                ".chapter-content".to_string(),
                ".reading-content".to_string(),
                "#content".to_string(),
            ],
            strip: vec![
                "script".to_string(),
                "style".to_string(),
                "noscript".to_string(),
                "iframe".to_string(),
                "div.ads".to_string(),
                ".ads-holder".to_string(),
                "ins.adsbygoogle".to_string(),
            ],
        }
    }
}

/// The readable fragment of a reader page.
///
/// An empty fragment is a valid result: it means no root selector matched,
/// which on a drifted template is preferable to failing the whole page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedContent {
    pub html: String,
}

impl ExtractedContent {
    pub fn is_empty(&self) -> bool {
        self.html.trim().is_empty()
    }
}

/// Extracts the readable fragment of a reader page.
///
/// Media elements inside the fragment get their `src`/`data-src` attributes
/// resolved against the document's base location; already-absolute values
/// come back from the resolution unchanged. When the profile carries a
/// cipher, paragraph text is decoded keyed by that same base location.
pub fn extract_content(doc: &Document, profile: &SiteProfile) -> ExtractedContent {
    let cleaned = strip_subtrees(&doc.as_string(), &profile.content.strip);
    let cleaned_doc = Document::parse(&cleaned);

    let Some(root) = cleaned_doc.waterfall(&profile.content.roots).into_iter().next() else {
        tracing::debug!(site = %profile.name, "no content root matched");
        return ExtractedContent { html: String::new() };
    };

    let fragment = root.inner_html();
    let html = rewrite_fragment(&fragment, doc.base_url(), profile.cipher.as_ref());
    ExtractedContent { html }
}

/// Drops configured subtrees and HTML comments from a serialized page.
fn strip_subtrees(html: &str, strip: &[String]) -> String {
    let html = Regex::new(r"(?s)<!--.*?-->").unwrap().replace_all(html, "").to_string();

    let mut handlers: Vec<(Cow<'_, Selector>, ElementContentHandlers<'_>)> = Vec::new();
    for selector in strip {
        match selector.parse::<Selector>() {
            Ok(parsed) => handlers.push((
                Cow::Owned(parsed),
                ElementContentHandlers::default().element(|el: &mut Element| {
                    el.remove();
                    Ok(())
                }),
            )),
            Err(_) => tracing::debug!(%selector, "skipping unparsable strip selector"),
        }
    }
    rewrite(&html, handlers)
}

/// One streaming pass over the extracted fragment: absolutize media
/// references and decode paragraph text for cipher sites.
fn rewrite_fragment(fragment: &str, base_url: Option<&Url>, cipher: Option<&CipherTable>) -> String {
    let mut handlers: Vec<(Cow<'_, Selector>, ElementContentHandlers<'_>)> = Vec::new();

    if let Some(base) = base_url {
        for tag in ["img", "source", "video", "audio"] {
            handlers.push((
                Cow::Owned(tag.parse::<Selector>().unwrap()),
                ElementContentHandlers::default().element(move |el: &mut Element| {
                    for attr in ["src", "data-src"] {
                        if let Some(value) = el.get_attribute(attr)
                            && let Ok(absolute) = base.join(&value)
                        {
                            el.set_attribute(attr, absolute.as_str()).ok();
                        }
                    }
                    Ok(())
                }),
            ));
        }
    }

    if let Some(table) = cipher {
        let key = base_url.map(Url::as_str).unwrap_or_default().to_string();
        handlers.push((
            Cow::Owned("p".parse::<Selector>().unwrap()),
            ElementContentHandlers::default().text(move |chunk: &mut TextChunk| {
                let decoded = table.decode(chunk.as_str(), &key);
                chunk.replace(&decoded, ContentType::Text);
                Ok(())
            }),
        ));
    }

    if handlers.is_empty() {
        return fragment.to_string();
    }
    rewrite(fragment, handlers)
}

fn rewrite<'h, 's>(
    html: &str,
    handlers: Vec<(Cow<'s, Selector>, ElementContentHandlers<'h>)>,
) -> String {
    let mut output = String::new();
    let mut rewriter = HtmlRewriter::new(
        Settings { element_content_handlers: handlers, ..Default::default() },
        |c: &[u8]| {
            output.push_str(&String::from_utf8_lossy(c));
        },
    );

    if rewriter.write(html.as_bytes()).is_err() {
        return html.to_string();
    }
    if rewriter.end().is_err() {
        return html.to_string();
    }

    if output.is_empty() { html.to_string() } else { output }
}
