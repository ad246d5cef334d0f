pub mod path;
pub mod references;
pub mod simplifier;

pub use references::{back_reference_label, ReferenceTable};
pub use simplifier::{callable_label, simplify, Simplifier};
