use std::path::{ Path, PathBuf };

use serde::Deserialize;

use crate::types::Result;

pub const DEFAULT_OUTPUT: &str = "cpp_cp_cheatsheet.pdf";

/// the system font directory probed for optional fonts
pub fn default_font_dir() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("C:\\Windows\\Fonts")
    } else {
        PathBuf::from("/usr/share/fonts/truetype/msttcorefonts")
    }
}

/// # Build settings
/// Every field has a default, so an empty JSON object is a valid config file.
#[derive(Debug,Clone,Deserialize,PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    pub output: PathBuf,
    pub font_dir: PathBuf,
    pub compress: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            output: PathBuf::from(DEFAULT_OUTPUT),
            font_dir: default_font_dir(),
            compress: true,
        }
    }
}

impl BuildConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// builder function setting the output path
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// builder function setting the font directory
    pub fn with_font_dir(mut self, font_dir: impl Into<PathBuf>) -> Self {
        self.font_dir = font_dir.into();
        self
    }

    /// builder function toggling stream compression
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}
