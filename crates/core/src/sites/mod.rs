//! Built-in site tables.
//!
//! One module per integrated site, each exporting a single `profile()`
//! function. Everything site-specific lives in these tables; the pipeline
//! code never branches on a site name.

mod novelfull;
mod readlightnovel;

use crate::profile::SiteProfile;

/// All compiled-in site profiles, in presentation order.
pub fn builtin() -> Vec<SiteProfile> {
    vec![novelfull::profile(), readlightnovel::profile()]
}

/// Looks up a built-in profile by its short name.
pub fn by_name(name: &str) -> Option<SiteProfile> {
    builtin().into_iter().find(|profile| profile.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_names_are_unique() {
        let profiles = builtin();
        assert!(!profiles.is_empty());
        let names: HashSet<_> = profiles.iter().map(|p| p.name.clone()).collect();
        assert_eq!(names.len(), profiles.len());
    }

    #[test]
    fn test_by_name() {
        assert!(by_name("novelfull").is_some());
        assert!(by_name("readlightnovel").is_some());
        assert!(by_name("unheard-of").is_none());
    }

    #[test]
    fn test_every_builtin_has_usable_chains() {
        for profile in builtin() {
            assert!(!profile.listing.entries.is_empty(), "{}", profile.name);
            assert!(!profile.listing.link.is_empty(), "{}", profile.name);
            assert!(!profile.content.roots.is_empty(), "{}", profile.name);
            for filter in &profile.filters {
                assert!(filter.selected < filter.options.len(), "{}", profile.name);
            }
        }
    }

    #[test]
    fn test_cipher_tables_have_three_entries() {
        for profile in builtin() {
            if let Some(cipher) = &profile.cipher {
                assert_eq!(cipher.offsets.len(), 3, "{}", profile.name);
            }
        }
    }
}
