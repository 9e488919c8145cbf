use propgraph_dot::DotOptions;
use propgraph_types::{PropError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "propgraph.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropGraphConfig {
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default = "default_graph_name")]
    pub name: String,
    #[serde(default = "default_node_prefix")]
    pub node_prefix: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { name: default_graph_name(), node_prefix: default_node_prefix() }
    }
}

fn default_graph_name() -> String {
    "G".to_string()
}

fn default_node_prefix() -> String {
    "n".to_string()
}

pub const DEFAULT_MAX_DEPTH: usize = 512;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Deepest allowed nesting of negations and parentheses; `0` is unlimited.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { max_depth: default_max_depth() }
    }
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { path: default_output_path() }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("output.dot")
}

impl PropGraphConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PropError::config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))
    }

    /// Reads `path` if it exists, otherwise falls back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        }
        else {
            Ok(Self::default())
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| PropError::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn dot_options(&self) -> DotOptions {
        DotOptions { graph_name: self.graph.name.clone(), node_prefix: self.graph.node_prefix.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = PropGraphConfig::from_toml("[parser]\nmax_depth = 8\n").unwrap();
        assert_eq!(config.parser.max_depth, 8);
        assert_eq!(config.graph.name, "G");
        assert_eq!(config.output.path, PathBuf::from("output.dot"));
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = PropGraphConfig::from_toml("").unwrap();
        assert_eq!(config, PropGraphConfig::default());
        assert_eq!(config.parser.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_bad_config_is_config_error() {
        let error = PropGraphConfig::from_toml("[graph]\nname = 3\n").unwrap_err();
        assert!(matches!(error.kind(), propgraph_types::PropErrorKind::ConfigError { .. }));
    }
}
