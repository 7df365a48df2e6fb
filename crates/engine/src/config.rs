use crate::error::{EngineError, Result};
use crate::options::{OrderMode, RatioPolicy, ReadMode};
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    /// Expand directory arguments into the regular files below them.
    #[builder(default)]
    pub recursive: bool,
    #[builder(default)]
    pub follow_links: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct ReadOptions {
    #[builder(default)]
    pub mode: ReadMode,
    /// Flush a final unterminated word into the word count.
    #[builder(default)]
    pub count_trailing_word: bool,
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    #[builder(default)]
    pub inputs: Vec<PathBuf>,
    #[builder(default)]
    pub walk: WalkOptions,
    #[builder(default)]
    pub read: ReadOptions,

    /// Worker cap. `None` spawns one thread per file.
    #[builder(default)]
    pub jobs: Option<usize>,
    #[builder(default = "1024")]
    pub channel_capacity: usize,

    #[builder(default)]
    pub aggregate: bool,
    #[builder(default)]
    pub ratio_policy: RatioPolicy,
    #[builder(default)]
    pub order: OrderMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: vec![],
            walk: WalkOptions::default(),
            read: ReadOptions::default(),
            jobs: None,
            channel_capacity: 1024,
            aggregate: false,
            ratio_policy: RatioPolicy::default(),
            order: OrderMode::default(),
        }
    }
}

impl ConfigBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        if let Some(Some(0)) = self.jobs {
            return Err("jobs must be at least 1".to_string());
        }
        if let Some(0) = self.channel_capacity {
            return Err("channel capacity must be at least 1".to_string());
        }
        if let Some(ReadOptions {
            mode: ReadMode::Chunked(0),
            ..
        }) = self.read
        {
            return Err("chunk size must be at least 1".to_string());
        }
        Ok(())
    }
}

impl From<ConfigBuilderError> for EngineError {
    fn from(err: ConfigBuilderError) -> Self {
        Self::Config(err.to_string())
    }
}

impl Config {
    /// Build a config, mapping builder failures onto [`EngineError::Config`].
    pub fn from_builder(builder: &ConfigBuilder) -> Result<Self> {
        Ok(builder.build()?)
    }
}
