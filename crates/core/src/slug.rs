//! Slug derivation and cleanup helpers.
//!
//! Slugs are URL-safe and globally unique across the product catalog. When a
//! product is created without one, it is derived from the name via
//! [`slugify`]. Some legacy rows carry a full product URL in the slug column;
//! [`clean_slug`] reduces those to the last path segment so lookups keep
//! working.

/// Derive a URL-safe slug from free text.
///
/// Lowercases ASCII letters, replaces every run of non-alphanumeric
/// characters with a single hyphen, and trims hyphens from both ends.
#[must_use]
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }

    out
}

/// Reduce a slug that embeds a full URL to its last path segment.
///
/// Returns the input unchanged when it does not look like a URL.
#[must_use]
pub fn clean_slug(raw: &str) -> &str {
    if raw.contains("://") || raw.starts_with("www.") {
        raw.trim_end_matches('/')
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or(raw)
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Buket Tulip"), "buket-tulip");
        assert_eq!(slugify("Kue Ulang Tahun Custom"), "kue-ulang-tahun-custom");
    }

    #[test]
    fn test_slugify_collapses_punctuation() {
        assert_eq!(slugify("Hampers -- Lebaran!!"), "hampers-lebaran");
        assert_eq!(slugify("  Papan   Bunga  "), "papan-bunga");
    }

    #[test]
    fn test_slugify_already_slug() {
        assert_eq!(slugify("buket-mawar-merah-premium"), "buket-mawar-merah-premium");
    }

    #[test]
    fn test_clean_slug_plain_passthrough() {
        assert_eq!(clean_slug("buket-mawar-merah-premium"), "buket-mawar-merah-premium");
    }

    #[test]
    fn test_clean_slug_full_url() {
        assert_eq!(
            clean_slug("https://example.com/produk/buket-mawar-merah-premium"),
            "buket-mawar-merah-premium"
        );
    }

    #[test]
    fn test_clean_slug_trailing_slash() {
        assert_eq!(
            clean_slug("https://bloomgift.id/produk/hampers-lebaran-eksklusif/"),
            "hampers-lebaran-eksklusif"
        );
    }

    #[test]
    fn test_clean_slug_idempotent() {
        let dirty = "https://example.com/produk/buket-tulip";
        assert_eq!(clean_slug(clean_slug(dirty)), clean_slug(dirty));
    }
}
