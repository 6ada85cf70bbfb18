use serde::{Deserialize, Serialize};
use std::fs;

/// Resolved CLI configuration: file values under env overrides under flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub iterations: u32,
    pub persona: String,
    pub seed: Option<u64>,
    pub log: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

impl ValueSource {
    pub fn label(self) -> &'static str {
        match self {
            ValueSource::Default => "default",
            ValueSource::File => "file",
            ValueSource::Env => "env",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub iterations: ValueSource,
    pub persona: ValueSource,
    pub seed: ValueSource,
    pub log: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            iterations: ValueSource::Default,
            persona: ValueSource::Default,
            seed: ValueSource::Default,
            log: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            iterations: 3_000,
            persona: "Balanced".into(),
            seed: None,
            log: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("STACKFISH_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.iterations {
            cfg.iterations = v;
            sources.iterations = ValueSource::File;
        }
        if let Some(v) = f.persona {
            cfg.persona = v;
            sources.persona = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.log {
            cfg.log = Some(v);
            sources.log = ValueSource::File;
        }
    }

    if let Ok(iters) = std::env::var("STACKFISH_ITERATIONS")
        && !iters.is_empty()
    {
        cfg.iterations = iters
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid iterations".into()))?;
        sources.iterations = ValueSource::Env;
    }
    if let Ok(persona) = std::env::var("STACKFISH_PERSONA")
        && !persona.is_empty()
    {
        cfg.persona = persona;
        sources.persona = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("STACKFISH_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(log) = std::env::var("STACKFISH_LOG")
        && !log.is_empty()
    {
        cfg.log = Some(log);
        sources.log = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    iterations: Option<u32>,
    #[serde(default)]
    persona: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    log: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.iterations == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: iterations must be >0".into(),
        ));
    }
    Ok(())
}
