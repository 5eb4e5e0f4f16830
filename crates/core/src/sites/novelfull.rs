//! NovelFull integration table.

use crate::filter::{Filter, FilterOption, FilterRole};
use crate::profile::SiteProfile;
use crate::request::Endpoints;

const GENRES: &[(&str, &str)] = &[
    ("Action", "genre/Action"),
    ("Adventure", "genre/Adventure"),
    ("Comedy", "genre/Comedy"),
    ("Drama", "genre/Drama"),
    ("Fantasy", "genre/Fantasy"),
    ("Harem", "genre/Harem"),
    ("Historical", "genre/Historical"),
    ("Horror", "genre/Horror"),
    ("Martial Arts", "genre/Martial+Arts"),
    ("Mature", "genre/Mature"),
    ("Mystery", "genre/Mystery"),
    ("Psychological", "genre/Psychological"),
    ("Romance", "genre/Romance"),
    ("School Life", "genre/School+Life"),
    ("Sci-fi", "genre/Sci-fi"),
    ("Seinen", "genre/Seinen"),
    ("Shounen", "genre/Shounen"),
    ("Slice of Life", "genre/Slice+of+Life"),
    ("Sports", "genre/Sports"),
    ("Supernatural", "genre/Supernatural"),
    ("Tragedy", "genre/Tragedy"),
    ("Wuxia", "genre/Wuxia"),
    ("Xianxia", "genre/Xianxia"),
    ("Xuanhuan", "genre/Xuanhuan"),
];

const LISTS: &[(&str, &str)] = &[
    ("Hot Novel", "hot-novel"),
    ("Completed Novel", "completed-novel"),
    ("Most Popular", "most-popular"),
];

pub fn profile() -> SiteProfile {
    let mut profile = SiteProfile::new("novelfull", "NovelFull", "https://novelfull.com/");

    profile.endpoints = Endpoints {
        listing_path: "latest-release-novel".to_string(),
        search_path: "search".to_string(),
        search_param: "keyword".to_string(),
        page_param: "page".to_string(),
    };

    profile.listing.entries = vec![
        "#list-page .list-truyen .row".to_string(),
        ".list-truyen .row".to_string(),
        "#list-page .row".to_string(),
    ];
    profile.listing.link = vec![
        "h3.truyen-title > a".to_string(),
        "h3.title a".to_string(),
        "a".to_string(),
    ];
    profile.listing.title = vec!["h3.truyen-title".to_string(), "h3.title".to_string()];
    profile.listing.next_page = vec![
        "ul.pagination li.next:not(.disabled) a".to_string(),
        "li.next a".to_string(),
    ];

    profile.content.roots = vec![
        "#chapter-content".to_string(),
        "#chr-content".to_string(),
        ".chapter-c".to_string(),
    ];
    profile.content.strip = vec![
        "script".to_string(),
        "style".to_string(),
        "noscript".to_string(),
        "iframe".to_string(),
        ".ads".to_string(),
        ".ads-holder".to_string(),
        "ins.adsbygoogle".to_string(),
        r#"div[align="center"]"#.to_string(),
    ];

    profile.filters = vec![
        Filter::with_any(
            FilterRole::Genre,
            "Genre",
            GENRES.iter().map(|(label, value)| FilterOption::new(*label, *value)).collect(),
        ),
        Filter::with_any(
            FilterRole::Kind,
            "List",
            LISTS.iter().map(|(label, value)| FilterOption::new(*label, *value)).collect(),
        ),
    ];

    profile
}
