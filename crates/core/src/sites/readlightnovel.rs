//! ReadLightNovel integration table.
//!
//! The site serves chapter paragraphs through a keyed character substitution;
//! the offset table below is a reverse-engineered constant tied to this one
//! deployment and is preserved exactly.

use crate::cipher::{CipherTable, OffsetPair};
use crate::filter::{Filter, FilterOption, FilterRole};
use crate::profile::SiteProfile;
use crate::request::Endpoints;

const CATEGORIES: &[(&str, &str)] = &[
    ("Action", "category/action"),
    ("Adventure", "category/adventure"),
    ("Comedy", "category/comedy"),
    ("Drama", "category/drama"),
    ("Fantasy", "category/fantasy"),
    ("Harem", "category/harem"),
    ("Historical", "category/historical"),
    ("Martial Arts", "category/martial-arts"),
    ("Mystery", "category/mystery"),
    ("Romance", "category/romance"),
    ("School Life", "category/school-life"),
    ("Sci-fi", "category/sci-fi"),
    ("Slice of Life", "category/slice-of-life"),
    ("Supernatural", "category/supernatural"),
    ("Xianxia", "category/xianxia"),
];

const SHELVES: &[(&str, &str)] = &[
    ("Top Rated", "top-novels/top-rated"),
    ("Most Viewed", "top-novels/most-viewed"),
];

pub fn profile() -> SiteProfile {
    let mut profile = SiteProfile::new(
        "readlightnovel",
        "ReadLightNovel",
        "https://www.readlightnovel.me/",
    );

    profile.endpoints = Endpoints {
        listing_path: "top-novels/new".to_string(),
        search_path: "search".to_string(),
        search_param: "q".to_string(),
        page_param: "page".to_string(),
    };
    profile.headers = vec![(
        "Referer".to_string(),
        "https://www.readlightnovel.me/".to_string(),
    )];

    profile.listing.entries = vec![
        ".top-novel-block".to_string(),
        ".category-items ul li".to_string(),
    ];
    profile.listing.link = vec![
        ".top-novel-header h2 a".to_string(),
        "h2 a".to_string(),
        "a".to_string(),
    ];
    profile.listing.title = vec![".top-novel-header h2".to_string(), "h2".to_string()];
    profile.listing.cover = vec![".top-novel-cover img".to_string(), "img".to_string()];
    profile.listing.next_page = vec![
        "ul.pagination li.active + li a".to_string(),
        "a[rel=\"next\"]".to_string(),
    ];

    profile.content.roots = vec![
        "#chapterhidden".to_string(),
        ".chapter-content3 .desc".to_string(),
        ".hidden-content".to_string(),
    ];
    profile.content.strip = vec![
        "script".to_string(),
        "style".to_string(),
        "noscript".to_string(),
        "iframe".to_string(),
        "center".to_string(),
        ".ads".to_string(),
        ".ads-title".to_string(),
        ".apester-media".to_string(),
        ".hid".to_string(),
    ];

    profile.filters = vec![
        Filter::with_any(
            FilterRole::Genre,
            "Category",
            CATEGORIES.iter().map(|(label, value)| FilterOption::new(*label, *value)).collect(),
        ),
        Filter::with_any(
            FilterRole::Kind,
            "Shelf",
            SHELVES.iter().map(|(label, value)| FilterOption::new(*label, *value)).collect(),
        ),
    ];

    profile.cipher = Some(CipherTable::new(vec![
        OffsetPair::new(12368, 12462),
        OffsetPair::new(12320, 12416),
        OffsetPair::new(12432, 12526),
    ]));

    profile
}
