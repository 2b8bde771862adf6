use crate::types::Invocation;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SCRAPER_DIR: &str = "youtube-scrapy-scraper";
pub const SCRAPER_PROGRAM: &str = "python3";
pub const SCRAPER_ENTRY: &str = "scraper.py";

/// Directory the scraper checkout sits next to: this crate's own root,
/// fixed at compile time so the caller's cwd never matters. This is the
/// build machine's path; deployments point `base_dir` elsewhere.
pub fn default_base_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn default_scraper_dir() -> String {
    SCRAPER_DIR.into()
}

pub fn default_program() -> String {
    SCRAPER_PROGRAM.into()
}

pub fn default_args() -> Vec<String> {
    vec![SCRAPER_ENTRY.into()]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetcherConfig {
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,
    #[serde(default = "default_scraper_dir")]
    pub scraper_dir: String,
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            scraper_dir: default_scraper_dir(),
            program: default_program(),
            args: default_args(),
        }
    }
}

impl FetcherConfig {
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// `<base_dir>/<scraper_dir>`
    pub fn working_dir(&self) -> PathBuf {
        Path::new(&self.base_dir).join(&self.scraper_dir)
    }

    pub fn invocation(&self) -> Invocation {
        Invocation::new(self.program.clone(), self.args.clone(), self.working_dir())
    }
}
