use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub store: StoreConfig,
    pub analysis: AnalysisDefaults,
}

/// Connection settings for the disclosure record store.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the record store's REST API.
    pub base_url: String,
    /// Optional API key sent as the `apikey` header on every request.
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Defaults applied when the CLI omits an explicit date range.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisDefaults {
    /// How many days back from today to analyze by default.
    pub lookback_days: u32,
}
