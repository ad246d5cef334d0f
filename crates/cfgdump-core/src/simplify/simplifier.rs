//! Simplifier
//!
//! Turns an arbitrary, possibly cyclic value graph into a bounded, acyclic
//! snapshot. `None` stands for a pruned node.

use crate::config::{Depth, SimplifyOptions};
use crate::graph::{Callable, Mapping, NodeId, Sequence, Value};

use super::path;
use super::references::{back_reference_label, ReferenceTable};

/// Label substituted for a callable when function names are shown.
pub fn callable_label(callable: &Callable) -> String {
    format!("<<Function '{}'>>", callable.name().unwrap_or("anonymous"))
}

/// Depth-bounded, cycle-aware simplifier
#[derive(Debug, Clone, Copy, Default)]
pub struct Simplifier {
    options: SimplifyOptions,
}

impl Simplifier {
    pub fn new(options: SimplifyOptions) -> Self {
        Simplifier { options }
    }

    /// Simplify a whole graph. Each call uses a fresh reference table.
    pub fn simplify(&self, value: &Value) -> Option<Value> {
        let mut references = ReferenceTable::new();
        self.simplify_level(value, 0, path::ROOT, &mut references)
    }

    fn simplify_level(
        &self,
        value: &Value,
        level: usize,
        path: &str,
        references: &mut ReferenceTable,
    ) -> Option<Value> {
        if self.options.depth.reached(level) {
            return None;
        }

        match value {
            Value::Callable(callable) => self
                .options
                .show_function_names
                .then(|| Value::String(callable_label(callable))),
            Value::Sequence(seq) => self.simplify_sequence(seq, level, path, references),
            Value::Mapping(map) => self.simplify_mapping(map, level, path, references),
            Value::Pattern(_) => Some(value.clone()),
            Value::Nullish | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                self.keep_scalar(value)
            }
        }
    }

    fn keep_scalar(&self, value: &Value) -> Option<Value> {
        (!value.is_falsy() || self.options.include_false_values).then(|| value.clone())
    }

    /// Keep a simplified child, substituting `Nullish` for a pruned one when
    /// false values are included.
    fn keep_child(&self, child: Option<Value>) -> Option<Value> {
        match child {
            Some(v) => Some(v),
            None if self.options.include_false_values => Some(Value::Nullish),
            None => None,
        }
    }

    /// Report a container already entered during this traversal.
    ///
    /// Returns `Some(outcome)` when the container was seen before, where the
    /// outcome is either a back-reference label or absence for a target
    /// that simplified to nothing. Registers the container otherwise.
    fn revisit(
        &self,
        id: NodeId,
        path: &str,
        references: &mut ReferenceTable,
    ) -> Option<Option<Value>> {
        if !self.options.depth.is_unbounded() {
            return None;
        }
        if let Some(reference) = references.lookup(id) {
            tracing::trace!(at = %path, target = %reference.path, empty = reference.empty, "back-reference");
            let outcome = (!reference.empty || self.options.include_false_values)
                .then(|| Value::String(back_reference_label(&reference.path)));
            return Some(outcome);
        }
        references.register(id, path);
        None
    }

    /// Record whether the container kept anything and decide its result.
    fn finish<T>(
        &self,
        id: NodeId,
        kept: usize,
        references: &mut ReferenceTable,
        build: impl FnOnce() -> T,
    ) -> Option<T> {
        if self.options.depth.is_unbounded() {
            references.mark_empty(id, kept == 0);
        }
        (kept > 0 || self.options.include_false_values).then(build)
    }

    fn simplify_sequence(
        &self,
        seq: &Sequence,
        level: usize,
        path: &str,
        references: &mut ReferenceTable,
    ) -> Option<Value> {
        let id = seq.id();
        if let Some(outcome) = self.revisit(id, path, references) {
            return outcome;
        }

        let items = seq.items();
        let mut kept = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let child_path = path::index(path, index);
            let child = self.simplify_level(item, level + 1, &child_path, references);
            if let Some(child) = self.keep_child(child) {
                kept.push(child);
            }
        }

        self.finish(id, kept.len(), references, || {
            Value::Sequence(kept.into_iter().collect())
        })
    }

    fn simplify_mapping(
        &self,
        map: &Mapping,
        level: usize,
        path: &str,
        references: &mut ReferenceTable,
    ) -> Option<Value> {
        let id = map.id();
        if let Some(outcome) = self.revisit(id, path, references) {
            return outcome;
        }

        let entries = map.entries();
        let mut kept: Vec<(String, Value)> = Vec::with_capacity(entries.len());
        for (key, item) in entries.iter() {
            let child_path = path::member(path, key);
            let child = self.simplify_level(item, level + 1, &child_path, references);
            if let Some(child) = self.keep_child(child) {
                kept.push((key.clone(), child));
            }
        }

        self.finish(id, kept.len(), references, || {
            Value::Mapping(kept.into_iter().collect())
        })
    }
}

/// Simplify `value` with explicit flags.
pub fn simplify(
    value: &Value,
    depth: Depth,
    include_false_values: bool,
    show_function_names: bool,
) -> Option<Value> {
    Simplifier::new(SimplifyOptions {
        depth,
        include_false_values,
        show_function_names,
    })
    .simplify(value)
}
