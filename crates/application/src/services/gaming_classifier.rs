use aho_corasick::AhoCorasick;
use ferrous_doh_domain::QueryClass;
use tracing::warn;

/// Flags query names that belong to latency-sensitive platforms.
///
/// Matching is a case-insensitive substring search with no anchoring, so
/// `"lol"` also matches `"lollipop.example"`. False positives only cost a
/// race against three providers; false negatives (e.g. compressed names that
/// decode as empty) fall back to sequential resolution.
pub struct GamingClassifier {
    matcher: Option<AhoCorasick>,
}

impl GamingClassifier {
    pub fn new<I, S>(hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<String> = hints
            .into_iter()
            .map(|h| h.as_ref().trim().to_ascii_lowercase())
            .filter(|h| !h.is_empty())
            .collect();

        if patterns.is_empty() {
            return Self { matcher: None };
        }

        let matcher = match AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
        {
            Ok(m) => Some(m),
            Err(e) => {
                warn!(error = %e, "Failed to build gaming hint matcher; classification disabled");
                None
            }
        };

        Self { matcher }
    }

    pub fn classify(&self, qname: &str) -> QueryClass {
        match &self.matcher {
            Some(m) if !qname.is_empty() && m.is_match(qname) => QueryClass::Gaming,
            _ => QueryClass::Standard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrous_doh_domain::config::GamingConfig;

    fn default_classifier() -> GamingClassifier {
        GamingClassifier::new(GamingConfig::default().hints)
    }

    #[test]
    fn test_steam_store_is_gaming() {
        assert_eq!(
            default_classifier().classify("store.steampowered.com"),
            QueryClass::Gaming
        );
    }

    #[test]
    fn test_example_com_is_standard() {
        assert_eq!(
            default_classifier().classify("example.com"),
            QueryClass::Standard
        );
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(
            default_classifier().classify("Launcher.EpicGames.com"),
            QueryClass::Gaming
        );
    }

    #[test]
    fn test_empty_name_is_standard() {
        assert_eq!(default_classifier().classify(""), QueryClass::Standard);
    }

    #[test]
    fn test_no_hints_never_matches() {
        let classifier = GamingClassifier::new(Vec::<String>::new());
        assert_eq!(classifier.classify("steam.com"), QueryClass::Standard);

        let classifier = GamingClassifier::new(vec!["", "  "]);
        assert_eq!(classifier.classify("anything.com"), QueryClass::Standard);
    }

    #[test]
    fn test_substring_without_anchoring() {
        let classifier = GamingClassifier::new(vec!["cod"]);
        assert_eq!(classifier.classify("barcode.example"), QueryClass::Gaming);
    }
}
