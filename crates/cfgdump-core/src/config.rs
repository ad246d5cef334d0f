//! Dump Configuration
//!
//! Raw dump options as supplied by a caller or an options file, and their
//! validated form. Validation rejects bad values; it never clamps them.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};

pub const DEFAULT_OUTPUT_PATH: &str = "./";
pub const DEFAULT_NAME: &str = "webpack.config.dump";
pub const DEFAULT_DEPTH: usize = 4;

/// Recursion bound for simplification and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// Prune everything at this level and below (root is level 0)
    Bounded(usize),

    /// No bound; termination relies on cycle detection
    Unbounded,
}

impl Depth {
    pub fn is_unbounded(self) -> bool {
        matches!(self, Depth::Unbounded)
    }

    /// True when `level` is at or beyond the bound.
    pub fn reached(self, level: usize) -> bool {
        match self {
            Depth::Bounded(limit) => level >= limit,
            Depth::Unbounded => false,
        }
    }
}

/// Flags handed to the simplifier, with depth already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimplifyOptions {
    pub depth: Depth,
    pub include_false_values: bool,
    pub show_function_names: bool,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        SimplifyOptions {
            depth: Depth::Bounded(DEFAULT_DEPTH),
            include_false_values: false,
            show_function_names: false,
        }
    }
}

/// Options as written by a caller. Missing fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DumpOptions {
    pub output_path: Option<String>,
    pub name: Option<String>,
    pub depth: Option<i64>,
    pub keep_circular_references: Option<bool>,
    pub show_function_names: Option<bool>,
    pub include_false_values: Option<bool>,
}

impl DumpOptions {
    /// Overlay every field set in `other` onto `self`.
    pub fn merge(mut self, other: DumpOptions) -> Self {
        if other.output_path.is_some() {
            self.output_path = other.output_path;
        }
        if other.name.is_some() {
            self.name = other.name;
        }
        if other.depth.is_some() {
            self.depth = other.depth;
        }
        if other.keep_circular_references.is_some() {
            self.keep_circular_references = other.keep_circular_references;
        }
        if other.show_function_names.is_some() {
            self.show_function_names = other.show_function_names;
        }
        if other.include_false_values.is_some() {
            self.include_false_values = other.include_false_values;
        }
        self
    }
}

/// Validated dump configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpConfig {
    pub output_path: PathBuf,
    pub name: String,
    pub depth: usize,
    pub keep_circular_references: bool,
    pub show_function_names: bool,
    pub include_false_values: bool,
}

impl Default for DumpConfig {
    fn default() -> Self {
        DumpConfig {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            name: DEFAULT_NAME.to_string(),
            depth: DEFAULT_DEPTH,
            keep_circular_references: false,
            show_function_names: false,
            include_false_values: false,
        }
    }
}

impl DumpConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate raw options. A zero depth, empty path or empty name falls
    /// back to its default.
    pub fn from_options(options: DumpOptions) -> ConfigResult<Self> {
        let depth = match options.depth {
            None | Some(0) => DEFAULT_DEPTH,
            Some(depth) if depth < 0 => return Err(ConfigError::NegativeDepth { depth }),
            Some(depth) => depth as usize,
        };

        let output_path = options
            .output_path
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());
        let name = options
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_NAME.to_string());

        Ok(DumpConfig {
            output_path: PathBuf::from(output_path),
            name,
            depth,
            keep_circular_references: options.keep_circular_references.unwrap_or(false),
            show_function_names: options.show_function_names.unwrap_or(false),
            include_false_values: options.include_false_values.unwrap_or(false),
        })
    }

    /// Keeping circular references lifts the depth bound entirely.
    pub fn effective_depth(&self) -> Depth {
        if self.keep_circular_references {
            Depth::Unbounded
        } else {
            Depth::Bounded(self.depth)
        }
    }

    pub fn simplify_options(&self) -> SimplifyOptions {
        SimplifyOptions {
            depth: self.effective_depth(),
            include_false_values: self.include_false_values,
            show_function_names: self.show_function_names,
        }
    }

    pub fn dump_path(&self) -> PathBuf {
        self.output_path.join(&self.name)
    }
}
