use proptest::prelude::ProptestConfig;

/// Shared proptest configuration; `PROPTEST_CASES` overrides the case count.
pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(128);
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
