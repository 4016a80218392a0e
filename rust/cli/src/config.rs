use maumau_engine::cards::DeckVariant;
use maumau_engine::game::DEFAULT_HAND_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub players: usize,
    pub hand_size: usize,
    pub deck: DeckVariant,
    pub copies: u8,
    pub max_turns: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub players: ValueSource,
    pub hand_size: ValueSource,
    pub deck: ValueSource,
    pub copies: ValueSource,
    pub max_turns: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            players: ValueSource::Default,
            hand_size: ValueSource::Default,
            deck: ValueSource::Default,
            copies: ValueSource::Default,
            max_turns: ValueSource::Default,
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
            seed: None,
            players: 3,
            hand_size: DEFAULT_HAND_SIZE,
            deck: DeckVariant::Short,
            copies: 1,
            max_turns: None,
        }
    }
}

impl Config {
    /// Total number of cards the configured deck holds.
    pub fn deck_size(&self) -> usize {
        self.deck.size() * self.copies as usize
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "malformed config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("MAUMAU_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.hand_size {
            cfg.hand_size = v;
            sources.hand_size = ValueSource::File;
        }
        if let Some(v) = f.deck {
            cfg.deck = v;
            sources.deck = ValueSource::File;
        }
        if let Some(v) = f.copies {
            cfg.copies = v;
            sources.copies = ValueSource::File;
        }
        if let Some(v) = f.max_turns {
            cfg.max_turns = Some(v);
            sources.max_turns = ValueSource::File;
        }
    }

    if let Some(seed) = env_value("MAUMAU_SEED") {
        cfg.seed = Some(parse_env(&seed, "seed")?);
        sources.seed = ValueSource::Env;
    }
    if let Some(players) = env_value("MAUMAU_PLAYERS") {
        cfg.players = parse_env(&players, "players")?;
        sources.players = ValueSource::Env;
    }
    if let Some(hand_size) = env_value("MAUMAU_HAND_SIZE") {
        cfg.hand_size = parse_env(&hand_size, "hand_size")?;
        sources.hand_size = ValueSource::Env;
    }
    if let Some(deck) = env_value("MAUMAU_DECK") {
        cfg.deck = deck
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("Invalid deck: {}", e)))?;
        sources.deck = ValueSource::Env;
    }
    if let Some(copies) = env_value("MAUMAU_COPIES") {
        cfg.copies = parse_env(&copies, "copies")?;
        sources.copies = ValueSource::Env;
    }
    if let Some(max_turns) = env_value("MAUMAU_MAX_TURNS") {
        cfg.max_turns = Some(parse_env(&max_turns, "max_turns")?);
        sources.max_turns = ValueSource::Env;
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
    seed: Option<u64>,
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    hand_size: Option<usize>,
    #[serde(default)]
    deck: Option<DeckVariant>,
    #[serde(default)]
    copies: Option<u8>,
    #[serde(default)]
    max_turns: Option<u32>,
}

/// Checks that a table can be dealt with these settings.
pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&cfg.players) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: players must be between {} and {}",
            MIN_PLAYERS, MAX_PLAYERS
        )));
    }
    if cfg.hand_size == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: hand_size must be >=1".into(),
        ));
    }
    if cfg.copies == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: copies must be >=1".into(),
        ));
    }
    let needed = cfg.players * cfg.hand_size + 1;
    if needed > cfg.deck_size() {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: {} players x {} cards + 1 needs {} cards, the {} deck has {}",
            cfg.players,
            cfg.hand_size,
            needed,
            cfg.deck.as_str(),
            cfg.deck_size()
        )));
    }
    Ok(())
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn parse_env<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {}", name)))
}
