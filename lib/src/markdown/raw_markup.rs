use pulldown_cmark::Event;

use crate::markdown::{Events, Pass};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Policy {
    Verbatim,
    Escaped,
}

/// Decides what happens to raw markup embedded in a document. The
/// renderer emits markup nodes unescaped, so `verbatim` leaves the
/// stream alone; `escaped` downgrades embedded markup to plain text,
/// which the renderer then escapes like any other text.
#[derive(Debug, Copy, Clone)]
pub struct RawMarkup {
    policy: Policy,
}

impl RawMarkup {
    pub fn verbatim() -> Self {
        RawMarkup { policy: Policy::Verbatim }
    }

    pub fn escaped() -> Self {
        RawMarkup { policy: Policy::Escaped }
    }
}

impl Pass for RawMarkup {
    fn remap<'a>(&'a mut self, events: Events<'a>) -> Events<'a> {
        if self.policy == Policy::Verbatim {
            return events;
        }

        Box::new(events.map(|event| match event {
            Event::Html(markup) | Event::InlineHtml(markup) => Event::Text(markup),
            event => event,
        }))
    }
}
