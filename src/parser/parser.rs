use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::parser::types::*;

// Trees nest without bound, so parse without serde_json's recursion limit
// and let serde_stacker grow the stack as needed.
fn from_json<T: DeserializeOwned>(json: &str) -> serde_json::Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    deserializer.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}

// Loader for the tree handed over by whatever gathered the source data
pub struct TreeParser;

impl TreeParser {
    pub fn parse_str(json: &str) -> Result<Item> {
        let root: Item = from_json(json).context("Failed to parse tree JSON")?;
        debug!(
            root = root.name.as_deref().unwrap_or("<anonymous>"),
            items = root.count(),
            "parsed tree"
        );
        Ok(root)
    }

    pub fn parse_reader(mut reader: impl Read) -> Result<Item> {
        let mut json = String::new();
        reader
            .read_to_string(&mut json)
            .context("Failed to read tree JSON")?;
        Self::parse_str(&json)
    }

    /// Reads a tree from `path`, or from standard input when `path` is `-`
    pub fn parse_path(path: &Path) -> Result<Item> {
        if path.to_str() == Some("-") {
            return Self::parse_reader(std::io::stdin().lock());
        }

        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read tree file {}", path.display()))?;
        Self::parse_str(&json).with_context(|| format!("Invalid tree in {}", path.display()))
    }
}

// Loader for user supplied decorator profiles
pub struct ProfileParser;

impl ProfileParser {
    pub fn parse_str(json: &str) -> Result<ProfileFile> {
        let file: ProfileFile = from_json(json).context("Failed to parse profile JSON")?;
        debug!(
            json = file.json.len(),
            xml = file.xml.len(),
            dot = file.dot.len(),
            "parsed profiles"
        );
        Ok(file)
    }

    pub fn parse_path(path: &Path) -> Result<ProfileFile> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile file {}", path.display()))?;
        Self::parse_str(&json).with_context(|| format!("Invalid profiles in {}", path.display()))
    }
}
