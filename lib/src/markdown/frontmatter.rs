use pulldown_cmark::{Event, Tag, TagEnd};

use crate::error::{Chainable, Result};
use crate::markdown::{Context, Dict, Events, Pass};

/// Captures the document's metadata header and parses it into the run's
/// [`Context`]. The parser only recognizes a header at the very top of
/// a document; should several blocks ever reach this pass, the last one
/// captured wins.
#[derive(Debug, Default)]
pub struct FrontMatter {
    capturing: bool,
    buffer: String,
    raw: Option<String>,
}

impl Pass for FrontMatter {
    fn remap<'a>(&'a mut self, events: Events<'a>) -> Events<'a> {
        self.capturing = false;
        self.buffer.clear();
        self.raw = None;

        Box::new(events.inspect(move |event| match event {
            Event::Start(Tag::MetadataBlock(_)) => {
                self.capturing = true;
                self.buffer.clear();
            }
            Event::Text(text) if self.capturing => self.buffer.push_str(text),
            Event::End(TagEnd::MetadataBlock(_)) if self.capturing => {
                self.capturing = false;
                self.raw = Some(std::mem::take(&mut self.buffer));
            }
            _ => {}
        }))
    }

    fn finalize(&mut self, context: &mut Context) -> Result<()> {
        if let Some(raw) = self.raw.take() {
            context.metadata = serde_yaml::from_str::<Dict>(&raw)
                .chain(error!(MetadataParse: "metadata header is not a key/value mapping"))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Kind;
    use crate::markdown::Pipeline;

    fn extract(input: &str) -> Result<Context> {
        Pipeline::new().pass(FrontMatter::default()).run(input)
    }

    #[test]
    fn header_is_captured() {
        let context = extract("---\ndate: 2020-01-01\nimage: a.png\n---\nBody.").unwrap();
        assert_eq!(context.metadata.get("date").and_then(|v| v.as_str()), Some("2020-01-01"));
        assert_eq!(context.metadata.get("image").and_then(|v| v.as_str()), Some("a.png"));
    }

    #[test]
    fn absent_header_means_empty_metadata() {
        let context = extract("No header here.\n").unwrap();
        assert!(context.metadata.is_empty());
    }

    #[test]
    fn non_mapping_header_fails() {
        let error = extract("---\njust a scalar\n---\nBody.").unwrap_err();
        assert_eq!(error.kind(), Kind::MetadataParse);
    }

    #[test]
    fn header_after_content_is_not_metadata() {
        // A fence later in the document is a thematic break plus text,
        // never a metadata node.
        let context = extract("Body first.\n\n---\ndate: 2020-01-01\n---\n").unwrap();
        assert!(context.metadata.is_empty());
    }
}
