//! Config Dump - Core Library
//!
//! Value graph model, the simplifier that reduces a graph to a bounded,
//! acyclic snapshot, and the renderer that turns a snapshot into literal text.

pub mod error;
pub mod config;
pub mod graph;
pub mod simplify;
pub mod render;

// Re-export commonly used types
pub use error::{ConfigError, ConfigResult, GraphError, GraphResult};
pub use config::{Depth, DumpConfig, DumpOptions, SimplifyOptions};
pub use graph::{Callable, Mapping, NodeId, Pattern, Sequence, Value};
pub use simplify::{simplify, Simplifier};
pub use render::render;

#[cfg(test)]
mod tests {
	use super::*;

	fn map(entries: Vec<(&str, Value)>) -> Value {
		Value::Mapping(entries.into_iter().collect())
	}

	#[test]
	fn keeps_numbers_with_values() {
		let config = map(vec![("foo", 9000.into()), ("bar", 0.into())]);
		let out = simplify(&config, Depth::Bounded(5), false, false);
		assert_eq!(out, Some(map(vec![("foo", 9000.into())])));
	}

	#[test]
	fn keeps_non_empty_arrays() {
		let config = map(vec![
			("foo", Value::from(Vec::<Value>::new())),
			("bar", Value::from(vec!["test".into()])),
			("some", Value::from(vec!["".into()])),
		]);
		let out = simplify(&config, Depth::Bounded(5), false, false);
		assert_eq!(out, Some(map(vec![("bar", Value::from(vec!["test".into()]))])));
	}

	#[test]
	fn self_reference_becomes_label() {
		let looped = Mapping::new();
		looped.insert("key", looped.clone());
		let config = map(vec![(
			"foo",
			map(vec![("oof", 20.into()), ("loop", Value::Mapping(looped))]),
		)]);

		let out = simplify(&config, Depth::Unbounded, false, false);
		assert_eq!(
			out,
			Some(map(vec![(
				"foo",
				map(vec![
					("oof", 20.into()),
					(
						"loop",
						map(vec![("key", "<<Circular reference to 'config.foo.loop'>>".into())]),
					),
				]),
			)]))
		);
	}

	#[test]
	fn empty_shared_object_is_dropped() {
		let empty = Mapping::new();
		let config = map(vec![
			("x", 1.into()),
			("first", Value::Mapping(empty.clone())),
			("second", map(vec![("again", Value::Mapping(empty))])),
		]);

		let out = simplify(&config, Depth::Unbounded, false, false);
		assert_eq!(out, Some(map(vec![("x", 1.into())])));
	}

	#[test]
	fn empty_shared_object_is_labelled_when_false_values_kept() {
		let empty = Mapping::new();
		let config = map(vec![
			("first", Value::Mapping(empty.clone())),
			("second", Value::Mapping(empty)),
		]);

		let out = simplify(&config, Depth::Unbounded, true, false);
		assert_eq!(
			out,
			Some(map(vec![
				("first", map(vec![])),
				("second", "<<Circular reference to 'config.first'>>".into()),
			]))
		);
	}

	#[test]
	fn negative_depth_is_a_configuration_error() {
		let err = DumpConfig::from_options(DumpOptions {
			depth: Some(-12),
			..Default::default()
		})
		.unwrap_err();
		assert!(matches!(err, ConfigError::NegativeDepth { depth: -12 }));
	}

	#[test]
	fn simplified_output_renders() {
		let config = map(vec![
			("mode", "development".into()),
			("devtool", false.into()),
			("resolve", map(vec![("extensions", Value::from(vec![".js".into(), ".ts".into()]))])),
		]);
		let options = DumpConfig::new().simplify_options();
		let out = Simplifier::new(options).simplify(&config).unwrap_or(Value::Nullish);
		assert_eq!(
			render(&out, options.depth),
			"{ mode: 'development', resolve: { extensions: [ '.js', '.ts' ] } }"
		);
	}
}
