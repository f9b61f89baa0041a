use {
    crate::{
        adapters::atlantic_client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT},
        services::withdrawal::PollPolicy,
    },
    std::{env, str::FromStr, time::Duration},
    thiserror::Error,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not valid: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: String,
    pub atlantic_base_url: String,
    pub upstream_timeout: Duration,
    pub poll_policy: PollPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            atlantic_base_url: DEFAULT_BASE_URL.into(),
            upstream_timeout: DEFAULT_TIMEOUT,
            poll_policy: PollPolicy::default(),
        }
    }
}

impl Settings {
    /// Reads settings from the process environment, falling back to defaults
    /// for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let upstream_timeout = parse_var(&lookup, "UPSTREAM_TIMEOUT_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.upstream_timeout);
        let max_attempts = parse_var(&lookup, "POLL_MAX_ATTEMPTS")?
            .unwrap_or(defaults.poll_policy.max_attempts);
        let interval = parse_var(&lookup, "POLL_INTERVAL_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.poll_policy.interval);

        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            atlantic_base_url: lookup("ATLANTIC_BASE_URL").unwrap_or(defaults.atlantic_base_url),
            upstream_timeout,
            poll_policy: PollPolicy {
                max_attempts,
                interval,
            },
        })
    }

    /// Service-wide request ceiling: every upstream call timing out plus the
    /// full polling wait, with a few seconds of slack.
    pub fn request_timeout(&self) -> Duration {
        let calls = self.poll_policy.max_attempts + 2;
        self.poll_policy.budget() + self.upstream_timeout * calls + Duration::from_secs(5)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
