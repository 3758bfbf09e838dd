use pw_common::timing::{COUNT_UP_DURATION_MS, COUNT_UP_FRAME_MS};
use pw_dom::{Document, NodeId};

use crate::error::Result;

/// Minimum visible ratio that starts a count-up.
pub const COUNT_UP_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone)]
struct Counter {
    node: NodeId,
    target: i64,
    current: f64,
}

impl Counter {
    fn increment(&self) -> f64 {
        self.target as f64 / (COUNT_UP_DURATION_MS as f64 / COUNT_UP_FRAME_MS as f64)
    }
}

/// Counts `data-count` elements up from zero when they come into view.
#[derive(Debug, Clone, Default)]
pub struct CountUp {
    counters: Vec<Counter>,
}

impl CountUp {
    /// Elements whose `data-count` is not an integer are skipped.
    pub fn attach(doc: &Document, selector: &str) -> Result<Option<Self>> {
        let mut counters = Vec::new();
        for node in doc.query_selector_all(selector)? {
            let raw = doc.attr(node, "data-count").unwrap_or_default();
            match parse_leading_int(raw) {
                Some(target) => counters.push(Counter {
                    node,
                    target,
                    current: 0.0,
                }),
                None => tracing::debug!(%node, raw, "Ignoring non-numeric count"),
            }
        }
        if counters.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self { counters }))
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.counters.iter().map(|counter| counter.node)
    }

    /// Start the animation of `node` on its first sufficient intersection.
    ///
    /// Returns the counter index to drive with [`CountUp::frame`].
    pub fn on_intersect(
        &mut self,
        doc: &mut Document,
        node: NodeId,
        ratio: f64,
    ) -> Result<Option<usize>> {
        if ratio < COUNT_UP_THRESHOLD || doc.attr(node, "data-animated").is_some() {
            return Ok(None);
        }
        let Some(index) = self.counters.iter().position(|c| c.node == node) else {
            return Ok(None);
        };
        doc.set_attr(node, "data-animated", "true")?;
        self.counters[index].current = 0.0;
        Ok(Some(index))
    }

    /// Advance one frame. Returns `true` while more frames are needed.
    pub fn frame(&mut self, doc: &mut Document, index: usize) -> Result<bool> {
        let Some(counter) = self.counters.get_mut(index) else {
            return Ok(false);
        };
        counter.current += counter.increment();
        if counter.current >= counter.target as f64 {
            doc.set_text(counter.node, &counter.target.to_string())?;
            return Ok(false);
        }
        let shown = counter.current.floor() as i64;
        doc.set_text(counter.node, &shown.to_string())?;
        Ok(true)
    }
}

/// Leading optionally-signed integer, ignoring surrounding text.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let digits_start = usize::from(trimmed.starts_with(['-', '+']));
    let end = trimmed[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(trimmed.len(), |offset| digits_start + offset);
    if end == digits_start {
        return None;
    }
    trimmed[..end].parse().ok()
}
