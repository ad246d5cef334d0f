pub mod json;
pub mod pattern;
pub mod value;

pub use pattern::Pattern;
pub use value::{Callable, Mapping, NodeId, Sequence, Value};
