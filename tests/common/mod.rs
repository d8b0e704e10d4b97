// Shared fixtures for integration tests.

use pathctx::infrastructure::SynAstParser;
use pathctx::ports::AstParser;
use pathctx::AstNode;

/// A file touching most of the lowered constructs.
pub const SAMPLE: &str = r#"
use std::collections::HashMap;

const LIMIT: usize = 16;

pub struct Counter {
    counts: HashMap<String, usize>,
}

impl Counter {
    pub fn record(&mut self, word: &str) -> usize {
        let entry = self.counts.entry(word.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    pub fn top<T: Into<String>>(&self, n: usize, label: T) -> Vec<(String, usize)> {
        let mut items: Vec<_> = self.counts.iter().map(|(k, v)| (k.clone(), *v)).collect();
        items.sort_by(|a, b| b.1.cmp(&a.1));
        println!("{}: {}", label.into(), items.len());
        items.into_iter().take(n.min(LIMIT)).collect()
    }
}

fn classify(x: i64) -> &'static str {
    match x {
        0 => "zero",
        n if n < 0 => "negative",
        1..=9 => "small",
        _ => "large",
    }
}

fn outer(values: &[u8]) -> u32 {
    fn inner(v: u8) -> u32 { v as u32 * 2 }
    let mut total = 0;
    for (i, v) in values.iter().enumerate() {
        if i % 2 == 0 && !values.is_empty() {
            total += inner(*v);
        } else {
            total -= 1;
        }
    }
    while total > 100 { total /= 2; }
    total
}

fn twins(x: i32) -> (i32, i32) {
    (x + 1, x + 1)
}

fn lonely() {}
"#;

pub fn parse(src: &str) -> AstNode {
    SynAstParser.parse("sample.rs", src).expect("sample parses")
}
