use pulldown_cmark::{Event, HeadingLevel, Tag, TagEnd};

use crate::error::Result;
use crate::markdown::{Context, Events, Pass};

/// Captures the first top-level heading as the article title and drops
/// it from the stream so rendered output doesn't repeat it. Later
/// top-level headings stay in the body untouched.
#[derive(Debug, Default)]
pub struct Headline {
    title: Option<String>,
}

struct HeadlineIter<'a, I: Iterator<Item = Event<'a>>> {
    slot: &'a mut Option<String>,
    inner: I,
}

impl<'a, I: Iterator<Item = Event<'a>>> Iterator for HeadlineIter<'a, I> {
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Event::Start(Tag::Heading { level: HeadingLevel::H1, .. })
                    if self.slot.is_none() =>
                {
                    // Swallow the heading, keeping only its literal text.
                    let mut title = String::new();
                    loop {
                        match self.inner.next()? {
                            Event::End(TagEnd::Heading(HeadingLevel::H1)) => break,
                            Event::Text(text) | Event::Code(text) => title.push_str(&text),
                            Event::InlineMath(src) | Event::DisplayMath(src) => {
                                title.push_str(&src)
                            }
                            Event::SoftBreak | Event::HardBreak => title.push(' '),
                            _ => {}
                        }
                    }

                    *self.slot = Some(title);
                }
                event => return Some(event),
            }
        }
    }
}

impl Pass for Headline {
    fn remap<'a>(&'a mut self, events: Events<'a>) -> Events<'a> {
        self.title = None;
        Box::new(HeadlineIter { slot: &mut self.title, inner: events })
    }

    fn finalize(&mut self, context: &mut Context) -> Result<()> {
        context.title = self.title.take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::{Pipeline, Renderer};

    fn run(input: &str) -> Context {
        Pipeline::new()
            .pass(Headline::default())
            .pass(Renderer::default())
            .run(input)
            .unwrap()
    }

    #[test]
    fn first_top_level_heading_becomes_the_title() {
        let context = run("# A *styled* `title`\n\nBody.\n");
        assert_eq!(context.title.as_deref(), Some("A styled title"));
        assert!(!context.html.contains("<h1"));
        assert!(context.html.contains("<p>Body.</p>"));
    }

    #[test]
    fn later_top_level_headings_stay_in_the_body() {
        let context = run("# First\n\nBody.\n\n# Second\n");
        assert_eq!(context.title.as_deref(), Some("First"));
        assert!(context.html.contains("<h1>Second</h1>"));
        assert!(!context.html.contains("First"));
    }

    #[test]
    fn documents_without_a_top_level_heading_keep_no_title() {
        let context = run("## Only a subheading\n\nBody.\n");
        assert!(context.title.is_none());
        assert!(context.html.contains("<h2>Only a subheading</h2>"));
    }
}
