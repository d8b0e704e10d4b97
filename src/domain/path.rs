//! Path Encoder
//!
//! Serializes the route between two leaves through their lowest common ancestor:
//!
//! ```text
//! [Ident]UP[BinaryExpr:+]DOWN[Ident]
//! ```
//!
//! Every tag is wrapped in `TAG_OPEN`/`TAG_CLOSE`. Tags on the way up from the
//! source leaf are followed by `UP`, tags on the way down to the target leaf are
//! preceded by `DOWN`, and the LCA tag stands alone between them.

use crate::domain::ast::AstNode;

pub const TAG_OPEN: &str = "[";
pub const TAG_CLOSE: &str = "]";
pub const UP: &str = "UP";
pub const DOWN: &str = "DOWN";

/// Length of the longest common prefix of two ancestor paths, by node identity.
pub fn common_prefix_len(source: &[&AstNode], target: &[&AstNode]) -> usize {
    source
        .iter()
        .zip(target)
        .take_while(|(a, b)| a.is_same(b))
        .count()
}

/// Encode the path between the leaves ending `source` and `target`.
///
/// Returns `None` only when the paths share no root, which cannot happen for two
/// leaves of the same function.
pub fn encode_path(source: &[&AstNode], target: &[&AstNode]) -> Option<String> {
    let shared = common_prefix_len(source, target);
    let lca = *source.get(shared.checked_sub(1)?)?;

    let mut out = String::new();
    for node in source[shared..].iter().rev() {
        push_tag(&mut out, node);
        out.push_str(UP);
    }
    push_tag(&mut out, lca);
    for node in &target[shared..] {
        out.push_str(DOWN);
        push_tag(&mut out, node);
    }
    Some(out)
}

fn push_tag(out: &mut String, node: &AstNode) {
    out.push_str(TAG_OPEN);
    out.push_str(&node.tag());
    out.push_str(TAG_CLOSE);
}

/// A path string split back into its segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParts<'s> {
    /// Tags from the source leaf up to, not including, the LCA.
    pub up: Vec<&'s str>,
    pub lca: &'s str,
    /// Tags from below the LCA down to the target leaf.
    pub down: Vec<&'s str>,
}

impl<'s> PathParts<'s> {
    /// Parse a string produced by [`encode_path`]. Returns `None` if it is malformed.
    pub fn parse(path: &'s str) -> Option<Self> {
        let mut rest = path;
        let mut up = Vec::new();

        let lca = loop {
            let (tag, after) = take_tag(rest)?;
            match after.strip_prefix(UP) {
                Some(after_up) => {
                    up.push(tag);
                    rest = after_up;
                }
                None => {
                    rest = after;
                    break tag;
                }
            }
        };

        let mut down = Vec::new();
        while !rest.is_empty() {
            let (tag, after) = take_tag(rest.strip_prefix(DOWN)?)?;
            down.push(tag);
            rest = after;
        }

        Some(Self { up, lca, down })
    }

    /// The same route walked from the other end.
    pub fn reversed(&self) -> Self {
        Self {
            up: self.down.iter().rev().copied().collect(),
            lca: self.lca,
            down: self.up.iter().rev().copied().collect(),
        }
    }
}

fn take_tag(s: &str) -> Option<(&str, &str)> {
    let inner = s.strip_prefix(TAG_OPEN)?;
    let end = inner.find(TAG_CLOSE)?;
    Some((&inner[..end], &inner[end + TAG_CLOSE.len()..]))
}
