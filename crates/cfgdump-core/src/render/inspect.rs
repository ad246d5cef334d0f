//! Literal renderer
//!
//! Formats a value as source-literal text in the style of Node's
//! `util.inspect`: single-quoted strings, bare identifier keys, `/re/flags`
//! patterns, and short containers collapsed onto one line.

use crate::config::Depth;
use crate::graph::{Callable, Mapping, NodeId, Pattern, Sequence, Value};

const BREAK_LENGTH: usize = 80;

/// Containers with this many levels of expanded containers below them
/// always break onto multiple lines.
const COMPACT_LEVELS: usize = 3;

/// Render `value`, expanding containers down to `depth` levels below the root.
pub fn render(value: &Value, depth: Depth) -> String {
    Renderer::new(depth).render(value)
}

/// Stateful renderer for one value
#[derive(Debug)]
pub struct Renderer {
    depth: Depth,
    indentation: usize,
    active: Vec<NodeId>,
}

/// Text of one rendered value, plus how many levels of expanded containers
/// it holds (`None` for anything that is not an expanded container).
struct Rendered {
    text: String,
    nested: Option<usize>,
}

impl Rendered {
    fn leaf(text: String) -> Self {
        Rendered { text, nested: None }
    }
}

impl Renderer {
    pub fn new(depth: Depth) -> Self {
        Renderer {
            depth,
            indentation: 0,
            active: Vec::new(),
        }
    }

    pub fn render(&mut self, value: &Value) -> String {
        self.indentation = 0;
        self.active.clear();
        self.format_value(value, 0).text
    }

    fn format_value(&mut self, value: &Value, level: usize) -> Rendered {
        match value {
            Value::Nullish => Rendered::leaf("null".to_string()),
            Value::Bool(b) => Rendered::leaf(b.to_string()),
            Value::Number(n) => Rendered::leaf(format_number(*n)),
            Value::String(s) => Rendered::leaf(quote_string(s)),
            Value::Pattern(p) => Rendered::leaf(format_pattern(p)),
            Value::Callable(c) => Rendered::leaf(format_callable(c)),
            Value::Sequence(seq) => self.format_sequence(seq, level),
            Value::Mapping(map) => self.format_mapping(map, level),
        }
    }

    fn format_sequence(&mut self, seq: &Sequence, level: usize) -> Rendered {
        let items = seq.items();
        if items.is_empty() {
            return Rendered::leaf("[]".to_string());
        }
        if let Some(placeholder) = self.placeholder(seq.id(), level, "[Array]") {
            return placeholder;
        }

        self.active.push(seq.id());
        let mut output = Vec::with_capacity(items.len());
        let mut nested = 0;
        for item in items.iter() {
            let child = self.format_child(item, level);
            nested = nested.max(child.nested.map_or(0, |n| n + 1));
            output.push(child.text);
        }
        self.active.pop();

        Rendered {
            text: self.reduce_to_single_string(output, nested, ('[', ']')),
            nested: Some(nested),
        }
    }

    fn format_mapping(&mut self, map: &Mapping, level: usize) -> Rendered {
        let entries = map.entries();
        if entries.is_empty() {
            return Rendered::leaf("{}".to_string());
        }
        if let Some(placeholder) = self.placeholder(map.id(), level, "[Object]") {
            return placeholder;
        }

        self.active.push(map.id());
        let mut output = Vec::with_capacity(entries.len());
        let mut nested = 0;
        for (key, item) in entries.iter() {
            let child = self.format_child(item, level);
            nested = nested.max(child.nested.map_or(0, |n| n + 1));
            output.push(format!("{}: {}", format_key(key), child.text));
        }
        self.active.pop();

        Rendered {
            text: self.reduce_to_single_string(output, nested, ('{', '}')),
            nested: Some(nested),
        }
    }

    /// Placeholder for a container that is re-entered or past the depth bound.
    fn placeholder(&self, id: NodeId, level: usize, past_depth: &str) -> Option<Rendered> {
        if self.active.contains(&id) {
            return Some(Rendered::leaf("[Circular]".to_string()));
        }
        let beyond = match self.depth {
            Depth::Bounded(limit) => level > limit,
            Depth::Unbounded => false,
        };
        beyond.then(|| Rendered::leaf(past_depth.to_string()))
    }

    fn format_child(&mut self, value: &Value, level: usize) -> Rendered {
        self.indentation += 2;
        let child = self.format_value(value, level + 1);
        self.indentation -= 2;
        child
    }

    fn reduce_to_single_string(
        &self,
        output: Vec<String>,
        nested: usize,
        (open, close): (char, char),
    ) -> String {
        if nested < COMPACT_LEVELS {
            let start = output.len() + self.indentation + 1 + 10;
            let total = output.len() + start + output.iter().map(String::len).sum::<usize>();
            if total <= BREAK_LENGTH && !output.iter().any(|entry| entry.contains('\n')) {
                return format!("{} {} {}", open, output.join(", "), close);
            }
        }
        let indentation = format!("\n{}", " ".repeat(self.indentation));
        format!(
            "{open}{ind}  {body}{ind}{close}",
            open = open,
            ind = indentation,
            body = output.join(&format!(",{}  ", indentation)),
            close = close,
        )
    }
}

/// JavaScript number formatting.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return if n.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exp = format!("{:e}", n);
        // JS always signs a positive exponent
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
            _ => exp,
        };
    }
    if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}

fn format_pattern(pattern: &Pattern) -> String {
    pattern.to_string()
}

fn format_callable(callable: &Callable) -> String {
    match callable.name() {
        Some(name) => format!("[Function: {}]", name),
        None => "[Function (anonymous)]".to_string(),
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn format_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        quote_string(key)
    }
}

/// Quote a string, preferring single quotes and switching to `"` or `` ` ``
/// to avoid escaping an embedded `'`.
pub fn quote_string(s: &str) -> String {
    let quote = if !s.contains('\'') {
        '\''
    } else if !s.contains('"') {
        '"'
    } else if !s.contains('`') && !s.contains("${") {
        '`'
    } else {
        '\''
    };
    escape_with(s, quote)
}

fn escape_with(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\x{:02X}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
