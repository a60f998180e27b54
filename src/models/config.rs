//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_seed_sample_data() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize)]
/// Settings consumed by [`crate::run`].
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Insert the bundled sample customers when the table is empty.
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,
}
