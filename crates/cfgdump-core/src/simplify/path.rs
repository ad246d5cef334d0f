//! Traversal paths
//!
//! Human-readable addresses of nodes, used only for back-reference labels.

pub const ROOT: &str = "config";

/// Path of a mapping member: `parent.key`.
pub fn member(parent: &str, key: &str) -> String {
    let mut path = String::with_capacity(parent.len() + key.len() + 1);
    path.push_str(parent);
    path.push('.');
    for ch in key.chars() {
        if ch == '\'' || ch == '\\' {
            path.push('\\');
        }
        path.push(ch);
    }
    path
}

/// Path of a sequence member: `parent.[index]`.
pub fn index(parent: &str, index: usize) -> String {
    format!("{}.[{}]", parent, index)
}
