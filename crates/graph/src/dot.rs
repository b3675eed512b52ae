//! A minimal Graphviz DOT document.
//!
//! The document keeps nodes and edges in insertion order and prints them as
//! DOT text through [`Display`](fmt::Display). Nodes named `node`, `edge` or
//! `graph` are printed as default-attribute statements (`node [fontname="Mono"];`)
//! and left out when they carry no attributes.
//!
//! ```rust
//! use graphedes_graph::dot::{DotDocument, DotEdge, DotNode};
//!
//! let mut doc = DotDocument::new(true);
//! doc.add_node(DotNode::new("x4").with_attr("color", "blue"));
//! doc.get_or_insert_node("node").set("fontname", "Mono");
//! doc.add_edge(DotEdge::new("_1", "x4").with_attr("label", "\"BV\""));
//!
//! assert_eq!(
//!     doc.to_string(),
//!     "strict digraph {\nx4 [color=\"blue\"];\nnode [fontname=\"Mono\"];\n_1 -> x4 [label=\"BV\"];\n}\n"
//! );
//! ```

use crate::Attrs;
use std::fmt;

/// Names printed as default-attribute statements rather than nodes.
const DEFAULT_ENTRIES: [&str; 3] = ["node", "edge", "graph"];

/// DOT keywords; an id spelled like one must be quoted.
const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// A node statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotNode {
    pub name: String,
    pub attrs: Attrs,
}

impl DotNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Attrs::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set an attribute, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }
}

/// An edge statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotEdge {
    pub source: String,
    pub target: String,
    pub attrs: Attrs,
}

impl DotEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            attrs: Attrs::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }
}

/// A directed DOT graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DotDocument {
    /// Print as `strict digraph`.
    pub strict: bool,
    pub name: Option<String>,
    /// Graph-level attributes.
    pub attrs: Attrs,
    nodes: Vec<DotNode>,
    edges: Vec<DotEdge>,
}

impl DotDocument {
    pub fn new(strict: bool) -> Self {
        Self {
            strict,
            ..Self::default()
        }
    }

    pub fn nodes(&self) -> &[DotNode] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut DotNode> {
        self.nodes.iter_mut()
    }

    /// All node statements with the given name.
    pub fn get_node(&self, name: &str) -> Vec<&DotNode> {
        self.nodes.iter().filter(|n| n.name == name).collect()
    }

    pub fn add_node(&mut self, node: DotNode) {
        self.nodes.push(node);
    }

    /// The first node statement with the given name, added if missing.
    pub fn get_or_insert_node(&mut self, name: &str) -> &mut DotNode {
        let pos = match self.nodes.iter().position(|n| n.name == name) {
            Some(pos) => pos,
            None => {
                self.nodes.push(DotNode::new(name));
                self.nodes.len() - 1
            }
        };
        &mut self.nodes[pos]
    }

    pub fn edges(&self) -> &[DotEdge] {
        &self.edges
    }

    pub fn add_edge(&mut self, edge: DotEdge) {
        self.edges.push(edge);
    }
}

impl fmt::Display for DotDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.strict {
            f.write_str("strict ")?;
        }
        match &self.name {
            Some(name) => writeln!(f, "digraph {} {{", quote_id(name))?,
            None => writeln!(f, "digraph {{")?,
        }

        for (key, value) in &self.attrs {
            writeln!(f, "{}={};", quote_id(key), quote_value(value))?;
        }

        for node in &self.nodes {
            if DEFAULT_ENTRIES.contains(&node.name.as_str()) {
                if !node.attrs.is_empty() {
                    writeln!(f, "{} {};", node.name, AttrList(&node.attrs))?;
                }
            } else if node.attrs.is_empty() {
                writeln!(f, "{};", quote_id(&node.name))?;
            } else {
                writeln!(f, "{} {};", quote_id(&node.name), AttrList(&node.attrs))?;
            }
        }

        for edge in &self.edges {
            write!(f, "{} -> {}", quote_id(&edge.source), quote_id(&edge.target))?;
            if !edge.attrs.is_empty() {
                write!(f, " {}", AttrList(&edge.attrs))?;
            }
            writeln!(f, ";")?;
        }

        writeln!(f, "}}")
    }
}

/// `[key="value", ...]`
struct AttrList<'a>(&'a Attrs);

impl fmt::Display for AttrList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", quote_id(key), quote_value(value))?;
        }
        f.write_str("]")
    }
}

/// Quote an id unless it is a plain identifier or numeral.
fn quote_id(id: &str) -> String {
    let keyword = KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(id));
    if !keyword && (is_identifier(id) || is_numeral(id)) {
        id.to_string()
    } else {
        quoted(id)
    }
}

/// Quote an attribute value unless it is an HTML label or a well-formed
/// quoted string.
fn quote_value(value: &str) -> String {
    let html = value.len() >= 2 && value.starts_with('<') && value.ends_with('>');
    if html || is_quoted_string(value) {
        value.to_string()
    } else {
        quoted(value)
    }
}

fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// `"..."` where every inner quote is escaped and no escape is left open.
fn is_quoted_string(s: &str) -> bool {
    let Some(inner) = s
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return false;
    };
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if chars.next().is_none() {
                    return false;
                }
            }
            '"' => return false,
            _ => {}
        }
    }
    true
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_numeral(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let mut parts = digits.splitn(2, '.');
    let whole = parts.next().unwrap_or_default();
    let frac = parts.next();
    let all_digits = |p: &str| p.chars().all(|c| c.is_ascii_digit());
    match frac {
        None => !whole.is_empty() && all_digits(whole),
        Some(frac) => {
            (!whole.is_empty() || !frac.is_empty()) && all_digits(whole) && all_digits(frac)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quote_id() {
        assert_eq!(quote_id("x4"), "x4");
        assert_eq!(quote_id("_1"), "_1");
        assert_eq!(quote_id("-1.5"), "-1.5");
        assert_eq!(quote_id("a b"), "\"a b\"");
        assert_eq!(quote_id("Node"), "\"Node\"");
        assert_eq!(quote_id("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote_id("."), "\".\"");
    }

    #[test]
    fn test_quote_value() {
        assert_eq!(quote_value("blue"), "\"blue\"");
        assert_eq!(quote_value("\"BV\""), "\"BV\"");
        assert_eq!(quote_value("<<table></table>>"), "<<table></table>>");
        assert_eq!(quote_value("Courier New"), "\"Courier New\"");
        assert_eq!(quote_value(r#""say \"hi\"""#), r#""say \"hi\"""#);
    }

    #[test]
    fn test_quote_value_escapes_stray_quotes() {
        assert_eq!(quote_value(r#""a" "b""#), r#""\"a\" \"b\"""#);
        assert_eq!(quote_value(r#""a\""#), r#""\"a\\\"""#);
        assert_eq!(quote_value("\""), r#""\"""#);
    }

    #[test]
    fn test_backslash_is_escaped() {
        assert_eq!(quote_id(r"dir\"), r#""dir\\""#);
        assert_eq!(quote_value(r"C:\fonts"), r#""C:\\fonts""#);
    }

    #[test]
    fn test_font_with_quotes_stays_well_formed() {
        let mut doc = DotDocument::new(false);
        doc.add_node(DotNode::new("node").with_attr("fontname", r#""a" "b""#));
        assert_eq!(
            doc.to_string(),
            "digraph {\nnode [fontname=\"\\\"a\\\" \\\"b\\\"\"];\n}\n"
        );
    }

    #[test]
    fn test_empty_default_entries_are_omitted() {
        let mut doc = DotDocument::new(false);
        doc.add_node(DotNode::new("node"));
        doc.add_node(DotNode::new("edge"));
        doc.add_node(DotNode::new("x4"));
        assert_eq!(doc.to_string(), "digraph {\nx4;\n}\n");
    }

    #[test]
    fn test_get_or_insert_node_is_idempotent() {
        let mut doc = DotDocument::default();
        doc.get_or_insert_node("node").set("fontname", "Mono");
        doc.get_or_insert_node("node").set("fontsize", "10");
        assert_eq!(doc.get_node("node").len(), 1);
        assert_eq!(doc.get_node("node")[0].get("fontname"), Some("Mono"));
    }

    #[test]
    fn test_get_or_insert_node_returns_first_match() {
        let mut doc = DotDocument::default();
        doc.add_node(DotNode::new("edge").with_attr("color", "gray"));
        doc.add_node(DotNode::new("edge"));
        doc.get_or_insert_node("edge").set("fontname", "Mono");
        let entries = doc.get_node("edge");
        assert_eq!(entries[0].get("fontname"), Some("Mono"));
        assert_eq!(entries[1].get("fontname"), None);
    }

    #[test]
    fn test_graph_name_and_attrs() {
        let mut doc = DotDocument::new(true);
        doc.name = Some("eds".into());
        doc.attrs.insert("rankdir".into(), "LR".into());
        assert_eq!(doc.to_string(), "strict digraph eds {\nrankdir=\"LR\";\n}\n");
    }
}
