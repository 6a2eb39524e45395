use pulldown_cmark::Event;
use pulldown_cmark_escape::escape_html;

use crate::markdown::{Events, Pass};

/// Rewrites math spans into markup the renderer emits verbatim: the
/// expression source, HTML-escaped and wrapped in TeX delimiters,
/// inside a classed `<span>` for a client-side typesetter to pick up.
#[derive(Debug, Default)]
pub struct Math;

fn typeset(class: &str, open: &str, close: &str, source: &str) -> String {
    let mut html = String::with_capacity(source.len() + 40);
    html.push_str("<span class=\"math ");
    html.push_str(class);
    html.push_str("\">");
    html.push_str(open);
    let _ = escape_html(&mut html, source);
    html.push_str(close);
    html.push_str("</span>");
    html
}

impl Pass for Math {
    fn remap<'a>(&'a mut self, events: Events<'a>) -> Events<'a> {
        Box::new(events.map(|event| match event {
            Event::InlineMath(src) => {
                Event::Html(typeset("inline", "\\(", "\\)", &src).into())
            }
            Event::DisplayMath(src) => {
                Event::Html(typeset("display", "\\[", "\\]", &src).into())
            }
            event => event,
        }))
    }
}
