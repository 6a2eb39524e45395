use std::collections::BTreeMap;

use pulldown_cmark::Event;

use crate::error::Result;

/// Parsed metadata-header content: string keys to YAML values.
pub type Dict = BTreeMap<String, serde_yaml::Value>;

/// A boxed stream of markup events, the currency every pass trades in.
pub type Events<'a> = Box<dyn Iterator<Item = Event<'a>> + 'a>;

/// Everything one pipeline run extracts alongside the rendered markup.
/// Owned by the run and handed back to the caller; never shared between
/// documents.
#[derive(Debug, Default)]
pub struct Context {
    /// The parsed metadata header, empty when the document has none.
    pub metadata: Dict,
    /// Literal text of the first top-level heading, if one exists.
    pub title: Option<String>,
    /// Rendered output markup; empty unless a terminal pass rendered.
    pub html: String,
}

/// One rewriting stage of a [`Pipeline`](crate::markdown::Pipeline).
///
/// `remap` wraps the event stream with the pass's own view of it. A
/// pass must only inspect or rewrite node types it owns so that any
/// ordered subset of passes composes. `finalize` runs once the stream
/// is exhausted and records whatever the pass extracted into the run's
/// [`Context`].
pub trait Pass {
    fn remap<'a>(&'a mut self, events: Events<'a>) -> Events<'a> {
        events
    }

    fn finalize(&mut self, _context: &mut Context) -> Result<()> {
        Ok(())
    }
}
