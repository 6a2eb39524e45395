use pulldown_cmark::html;

use crate::error::Result;
use crate::markdown::{Context, Events, Pass};

/// Terminal pass: renders whatever reaches it to an HTML string and
/// hands the result to the run's [`Context`]. Text is escaped unless a
/// node carries verbatim markup, and sibling order is preserved
/// exactly.
#[derive(Debug, Default)]
pub struct Renderer {
    rendered: String,
}

impl Pass for Renderer {
    fn remap<'a>(&'a mut self, events: Events<'a>) -> Events<'a> {
        let mut output = String::new();
        html::push_html(&mut output, events);
        self.rendered = output;
        Box::new(std::iter::empty())
    }

    fn finalize(&mut self, context: &mut Context) -> Result<()> {
        context.html = std::mem::take(&mut self.rendered);
        Ok(())
    }
}
