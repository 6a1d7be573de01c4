use std::path::Path;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents fail
    /// expansion, parsing or validation
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse configuration from TOML text
    ///
    /// Expands `{{ env.VAR }}` placeholders, then deserializes and validates
    /// the result.
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded = crate::env::expand_env(raw).context("config variable expansion failed")?;
        let config: Self = toml::from_str(&expanded).context("failed to parse config")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending field
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.errors.page_format.trim().is_empty() {
            anyhow::bail!("errors.page_format must not be empty");
        }

        if self.server.health.enabled && !self.server.health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with `/`: `{}`", self.server.health.path);
        }

        EnvFilter::try_new(&self.telemetry.filter)
            .with_context(|| format!("invalid telemetry.filter `{}`", self.telemetry.filter))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::net::SocketAddr;

    use faultline_core::Environment;
    use indoc::indoc;

    use crate::{Config, LogFormat};

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.listen_address, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert!(config.server.health.enabled);
        assert_eq!(config.server.health.path, "/health");
        assert_eq!(config.errors.page_format, "html");
        assert!(config.errors.render_pages);
        assert_eq!(config.telemetry.filter, "info");
        assert_eq!(config.telemetry.format, LogFormat::Text);
    }

    #[test]
    fn full_document() {
        let config = Config::from_toml(indoc! {r#"
            environment = "prod"

            [server]
            listen_address = "127.0.0.1:9000"

            [server.health]
            enabled = false
            path = "/up"

            [errors]
            page_format = "xhtml"
            render_pages = false

            [telemetry]
            filter = "warn,faultline=debug"
            format = "json"
        "#})
        .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.server.listen_address, SocketAddr::from(([127, 0, 0, 1], 9000)));
        assert!(!config.server.health.enabled);
        assert_eq!(config.server.health.path, "/up");
        assert_eq!(config.errors.page_format, "xhtml");
        assert!(!config.errors.render_pages);
        assert_eq!(config.telemetry.filter, "warn,faultline=debug");
        assert_eq!(config.telemetry.format, LogFormat::Json);
    }

    #[test]
    fn environment_from_variable() {
        temp_env::with_var("FAULTLINE_TEST_DEPLOYMENT", Some("testing"), || {
            let config = Config::from_toml("environment = \"{{ env.FAULTLINE_TEST_DEPLOYMENT }}\"").unwrap();
            assert_eq!(config.environment, Environment::Testing);
        });
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let err = Config::from_toml("environment = \"staging\"").unwrap_err();
        assert!(format!("{err:#}").contains("unknown environment `staging`"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(Config::from_toml("[server]\nport = 80").is_err());
    }

    #[test]
    fn empty_page_format_is_rejected() {
        let err = Config::from_toml("[errors]\npage_format = \"  \"").unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"errors.page_format must not be empty");
    }

    #[test]
    fn relative_health_path_is_rejected() {
        let err = Config::from_toml("[server.health]\npath = \"health\"").unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"server.health.path must start with `/`: `health`");
    }

    #[test]
    fn relative_health_path_is_fine_when_disabled() {
        assert!(Config::from_toml("[server.health]\nenabled = false\npath = \"health\"").is_ok());
    }

    #[test]
    fn invalid_filter_is_rejected() {
        let err = Config::from_toml("[telemetry]\nfilter = \"faultline=loud\"").unwrap_err();
        assert!(err.to_string().contains("invalid telemetry.filter"));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "environment = \"production\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(config.environment.is_release());
    }

    #[test]
    fn sample_config_is_valid() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../faultline.toml");

        temp_env::with_var_unset("FAULTLINE_DEPLOYMENT", || {
            let config = Config::load(&path).unwrap();
            assert_eq!(config.environment, Environment::Development);
        });
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Config::load(std::path::Path::new("/nonexistent/faultline.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file /nonexistent/faultline.toml"));
    }
}
