use dotenvy::dotenv;
use std::env;

pub const DEFAULT_NGEFILM_URL: &str = "https://new10.ngefilm.site/";
pub const DEFAULT_DUTAMOVIE_URL: &str = "https://asia.dutamovie21.work/";

/// Site base URLs, loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub ngefilm_url: String,
    pub dutamovie_url: String,
}

impl Config {
    /// Reads `SITE_URL` and `DUTAMOVIE_SITE`, falling back to the last known mirrors.
    pub fn from_env() -> Self {
        // Load .env file if present
        let _ = dotenv();

        Self {
            ngefilm_url: env::var("SITE_URL").unwrap_or_else(|_| DEFAULT_NGEFILM_URL.to_string()),
            dutamovie_url: env::var("DUTAMOVIE_SITE")
                .unwrap_or_else(|_| DEFAULT_DUTAMOVIE_URL.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ngefilm_url: DEFAULT_NGEFILM_URL.to_string(),
            dutamovie_url: DEFAULT_DUTAMOVIE_URL.to_string(),
        }
    }
}
