//! Dump orchestration
//!
//! Resolves the effective depth, runs the simplifier and renderer, and
//! writes the result. I/O failures go to the warning sink; they never
//! reach the caller as errors.

use std::path::PathBuf;

use cfgdump_core::{render, ConfigResult, DumpConfig, DumpOptions, Simplifier, Value};

use crate::fs::{DumpFs, StdFs};
use crate::sink::{TracingSink, WarningSink};

pub const CREATE_DIR_WARNING: &str = "Could not create cache folder:";
pub const WRITE_FILE_WARNING: &str = "Could not create dump file:";

/// Supplies the raw value graph, e.g. a build tool's resolved options.
pub trait BuildHost {
    fn options(&self) -> &Value;
}

/// What a dump ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpOutcome {
    Written(PathBuf),
    DirectoryUnavailable,
    WriteFailed,
}

/// Wrap rendered text as a loadable module.
pub fn module_text(rendered: &str) -> String {
    format!("module.exports = () => ({})", rendered)
}

pub struct ConfigDumper<F = StdFs, W = TracingSink> {
    config: DumpConfig,
    fs: F,
    sink: W,
}

impl ConfigDumper {
    /// Validate `options` and dump through the real filesystem.
    pub fn new(options: DumpOptions) -> ConfigResult<Self> {
        Ok(Self::with_io(DumpConfig::from_options(options)?, StdFs, TracingSink))
    }
}

impl<F: DumpFs, W: WarningSink> ConfigDumper<F, W> {
    pub fn with_io(config: DumpConfig, fs: F, sink: W) -> Self {
        ConfigDumper { config, fs, sink }
    }

    pub fn config(&self) -> &DumpConfig {
        &self.config
    }

    /// Build-host hook: dump whatever graph the host exposes.
    pub fn apply<H: BuildHost + ?Sized>(&self, host: &H) -> DumpOutcome {
        self.dump_config(host.options())
    }

    /// Simplified and rendered text of `graph` using the configured flags.
    pub fn dump_text(&self, graph: &Value) -> String {
        let options = self.config.simplify_options();
        let simplified = Simplifier::new(options)
            .simplify(graph)
            .unwrap_or(Value::Nullish);
        render(&simplified, options.depth)
    }

    pub fn dump_config(&self, graph: &Value) -> DumpOutcome {
        let dir = &self.config.output_path;
        if !self.fs.exists(dir) {
            if let Err(err) = self.fs.create_dir(dir) {
                self.sink.warn(CREATE_DIR_WARNING, &err);
                return DumpOutcome::DirectoryUnavailable;
            }
            tracing::debug!(path = %dir.display(), "created output directory");
        }

        let text = module_text(&self.dump_text(graph));
        let target = self.config.dump_path();
        match self.fs.write(&target, &text) {
            Ok(()) => {
                tracing::debug!(path = %target.display(), bytes = text.len(), "config dump written");
                DumpOutcome::Written(target)
            }
            Err(err) => {
                self.sink.warn(WRITE_FILE_WARNING, &err);
                DumpOutcome::WriteFailed
            }
        }
    }
}
