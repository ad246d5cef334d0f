//! Host crate: filesystem, warning and build-tool integration for dumps
//!
//! `ConfigDumper` ties the core simplifier and renderer to the outside
//! world. Filesystem access and warning output sit behind small traits.

pub use cfgdump_core::{DumpConfig, DumpOptions, Value};

pub mod fs;
pub mod sink;
mod dumper;

pub use dumper::{
    module_text, BuildHost, ConfigDumper, DumpOutcome, CREATE_DIR_WARNING, WRITE_FILE_WARNING,
};
pub use fs::{DumpFs, StdFs};
pub use sink::{RecordingSink, TracingSink, Warning, WarningSink};
