use tracing::Level;
use url::Url;
use wokky_geolocation::PositionOptions;

/// Forecast endpoint baked in at build time. Unset disables the weather panel.
pub const FORECAST_URL: Option<&str> = std::option_env!("WOKKY_FORECAST_URL");

/// Log level baked in at build time, one of `trace`, `debug`, `info`, `warn`, `error`.
pub const LOG_LEVEL: Option<&str> = std::option_env!("WOKKY_LOG");

/// Settings for the app, provided to the whole tree as context.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub position: PositionOptions,
    pub forecast_endpoint: Option<Url>,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            position: PositionOptions::default(),
            forecast_endpoint: None,
            log_level: if cfg!(debug_assertions) {
                Level::DEBUG
            } else {
                Level::INFO
            },
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// The configuration this binary was built with.
    pub fn from_env() -> Self {
        Self::from_vars(FORECAST_URL, LOG_LEVEL)
    }

    /// Build from raw variable values. Values that don't parse are logged and
    /// replaced by the default.
    pub fn from_vars(forecast_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = forecast_url.filter(|raw| !raw.is_empty()) {
            match Url::parse(raw) {
                Ok(url) => config.forecast_endpoint = Some(url),
                Err(err) => tracing::warn!("ignoring WOKKY_FORECAST_URL `{raw}`: {err}"),
            }
        }

        if let Some(raw) = log_level.filter(|raw| !raw.is_empty()) {
            match raw.parse() {
                Ok(level) => config.log_level = level,
                Err(err) => tracing::warn!("ignoring WOKKY_LOG `{raw}`: {err}"),
            }
        }

        config
    }

    pub fn with_position_options(mut self, options: PositionOptions) -> Self {
        self.position = options;
        self
    }

    pub fn with_forecast_endpoint(mut self, endpoint: Url) -> Self {
        self.forecast_endpoint = Some(endpoint);
        self
    }

    pub fn with_log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variables_give_defaults() {
        let config = Config::from_vars(None, Some(""));
        assert_eq!(config, Config::default());
        assert_eq!(config.position, PositionOptions::default());
        assert!(config.forecast_endpoint.is_none());
    }

    #[test]
    fn reads_forecast_endpoint_and_level() {
        let config = Config::from_vars(
            Some("https://api.open-meteo.com/v1/forecast"),
            Some("warn"),
        );
        assert_eq!(
            config.forecast_endpoint.as_ref().map(Url::as_str),
            Some("https://api.open-meteo.com/v1/forecast")
        );
        assert_eq!(config.log_level, Level::WARN);
    }

    #[test]
    fn garbage_falls_back() {
        let config = Config::from_vars(Some("not a url"), Some("loud"));
        assert!(config.forecast_endpoint.is_none());
        assert_eq!(config.log_level, Config::default().log_level);
    }

    #[test]
    fn builder_overrides() {
        let options = PositionOptions {
            enable_high_accuracy: false,
            timeout: 10_000,
            maximum_age: 60_000,
        };
        let config = Config::new()
            .with_position_options(options)
            .with_log_level(Level::TRACE);
        assert_eq!(config.position, options);
        assert_eq!(config.log_level, Level::TRACE);
    }
}
