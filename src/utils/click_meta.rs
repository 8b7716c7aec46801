//! Click metadata derived from the caller's environment.
//!
//! Real referral attribution and geolocation are outside the registry's
//! responsibility, so the HTTP layer classifies the `Referer` header into a
//! fixed category set and falls back to a fixed location enumeration.

use rand::seq::IndexedRandom;

/// Fallback location labels used when no real geolocation is available.
pub const FALLBACK_LOCATIONS: &[&str] = &[
    "New York, US",
    "London, UK",
    "Tokyo, JP",
    "Sydney, AU",
    "Toronto, CA",
    "Berlin, DE",
    "Mumbai, IN",
    "São Paulo, BR",
];

/// Classifies a `Referer` header value into a referral channel label.
///
/// No referer means a direct visit. Unrecognized referers fall through to
/// the generic "Referral" bucket.
pub fn classify_source(referer: Option<&str>) -> String {
    let Some(referer) = referer.filter(|r| !r.is_empty()) else {
        return "Direct".to_string();
    };

    let referer = referer.to_ascii_lowercase();

    let label = if referer.contains("google") {
        "Google Search"
    } else if ["facebook", "twitter", "t.co", "linkedin", "instagram", "reddit"]
        .iter()
        .any(|s| referer.contains(s))
    {
        "Social Media"
    } else if referer.contains("mail") {
        "Email"
    } else if referer.contains("doubleclick") || referer.contains("ads") {
        "Advertisement"
    } else {
        "Referral"
    };

    label.to_string()
}

/// Picks a location label from the fallback enumeration.
pub fn fallback_location() -> String {
    let mut rng = rand::rng();
    FALLBACK_LOCATIONS
        .choose(&mut rng)
        .copied()
        .unwrap_or("Unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_referer_is_direct() {
        assert_eq!(classify_source(None), "Direct");
        assert_eq!(classify_source(Some("")), "Direct");
    }

    #[test]
    fn test_google_referer() {
        assert_eq!(
            classify_source(Some("https://www.google.com/search?q=rust")),
            "Google Search"
        );
    }

    #[test]
    fn test_social_referers() {
        assert_eq!(classify_source(Some("https://t.co/abc")), "Social Media");
        assert_eq!(
            classify_source(Some("https://www.reddit.com/r/rust")),
            "Social Media"
        );
    }

    #[test]
    fn test_mail_referer() {
        assert_eq!(classify_source(Some("https://mail.proton.me/")), "Email");
    }

    #[test]
    fn test_unknown_referer_is_referral() {
        assert_eq!(classify_source(Some("https://example.org/blog")), "Referral");
    }

    #[test]
    fn test_fallback_location_is_from_enumeration() {
        for _ in 0..50 {
            let location = fallback_location();
            assert!(FALLBACK_LOCATIONS.contains(&location.as_str()));
        }
    }
}
