use clap::Parser;

/// Process-wide configuration, read once at startup and passed into the
/// client and renderer. A local `.env` file (loaded in `main` before
/// parsing) can seed any variable that is not already set.
#[derive(Debug, Clone, Parser)]
#[command(name = "rainsearch")]
#[command(about = "Search Amazon via the Rainforest API and browse the results", long_about = None)]
pub struct Config {
    /// Rainforest API key; when unset every search shows an error banner
    #[arg(long, env = "RAINFOREST_API_KEY")]
    pub api_key: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Amazon marketplace domain passed to the API and shown in the footer
    #[arg(long, env = "AMAZON_DOMAIN", default_value = "amazon.com")]
    pub amazon_domain: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config =
            Config::try_parse_from(["rainsearch", "--port", "9000", "--amazon-domain", "amazon.co.uk"])
                .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.amazon_domain, "amazon.co.uk");
    }

    #[test]
    fn env_file_seeds_unset_variables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "RAINSEARCH_TEST_SEED=from-file\n").unwrap();

        dotenv::from_path(&path).ok();
        assert_eq!(std::env::var("RAINSEARCH_TEST_SEED").unwrap(), "from-file");
    }

    #[test]
    fn malformed_env_file_keeps_earlier_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "RAINSEARCH_TEST_GOOD=yes\nnot a key value line\n").unwrap();

        // Mirrors the `.ok()` call site in main: parse errors are dropped,
        // lines read before the bad one still land in the environment.
        dotenv::from_path(&path).ok();
        assert_eq!(std::env::var("RAINSEARCH_TEST_GOOD").unwrap(), "yes");
    }
}
