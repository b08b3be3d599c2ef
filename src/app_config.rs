use config::{Config, ConfigError};
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::time::Duration;

const DEFAULT_REQUIRED_PRIVILEGES: [&str; 7] = [
    "Read Accounts",
    "Read Buildings",
    "Read Computers",
    "Update Computers",
    "Read Departments",
    "Read User",
    "Update User",
];

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    jss: Jss,
    #[serde(default)]
    policies: Policies,
    #[serde(default)]
    privileges: Privileges,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("CARGO_SHIP").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn jss(&self) -> &Jss {
        &self.jss
    }

    pub fn policies(&self) -> &Policies {
        &self.policies
    }

    pub fn privileges(&self) -> &Privileges {
        &self.privileges
    }
}

#[derive(Debug, Deserialize)]
pub struct Jss {
    url: String,
    username: String,
    password: String,
    #[serde(with = "humantime_serde", default = "default_timeout")]
    timeout: Duration,
    #[serde(default)]
    accept_invalid_certs: bool,
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

impl Jss {
    pub fn url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }
}

/// What to do when a single policy cannot be fetched.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FailureMode {
    /// The first failure aborts the whole batch.
    #[default]
    Abort,
    /// Every policy is attempted and failures are reported next to the successes.
    Collect,
}

#[derive(Debug, Default, Deserialize)]
pub struct Policies {
    concurrency: Option<NonZeroUsize>,
    #[serde(default)]
    failure_mode: FailureMode,
}

impl Policies {
    pub fn concurrency(&self) -> usize {
        self.concurrency
            .or_else(|| std::thread::available_parallelism().ok())
            .map(NonZeroUsize::get)
            .unwrap_or(1)
    }

    pub fn failure_mode(&self) -> FailureMode {
        self.failure_mode
    }
}

#[derive(Debug, Deserialize)]
pub struct Privileges {
    required: Vec<String>,
}

impl Default for Privileges {
    fn default() -> Self {
        Privileges {
            required: DEFAULT_REQUIRED_PRIVILEGES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Privileges {
    pub fn required(&self) -> &[String] {
        &self.required
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                jss: Jss {
                    url: "https://jss.url:8443".to_string(),
                    username: "user".to_string(),
                    password: "secret".to_string(),
                    timeout: Duration::from_secs(5),
                    accept_invalid_certs: false,
                },
                policies: Policies::default(),
                privileges: Privileges::default(),
            },
        }
    }

    pub fn jss_url(mut self, url: String) -> Self {
        self.config.jss.url = url;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.jss.timeout = timeout;
        self
    }

    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.config.policies.concurrency = NonZeroUsize::new(concurrency);
        self
    }

    pub fn failure_mode(mut self, failure_mode: FailureMode) -> Self {
        self.config.policies.failure_mode = failure_mode;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
