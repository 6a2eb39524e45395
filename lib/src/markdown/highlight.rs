use std::fmt::Write;

use once_cell::sync::Lazy;
use pulldown_cmark::{CodeBlockKind, Event, Tag, TagEnd};
use syntect::html::{ClassedHTMLGenerator, ClassStyle};
use syntect::parsing::{SyntaxReference, SyntaxSet};

use crate::markdown::{Events, Pass};

static SYNTAXES: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

/// Rewrites fenced code blocks whose language tag resolves against the
/// bundled syntax set into class-annotated span markup. Untagged blocks
/// and unknown languages flow through untouched and render as plain
/// escaped code.
#[derive(Default, Clone)]
pub struct SyntaxHighlight;

impl SyntaxHighlight {
    /// Loading the bundled syntax set takes tens of milliseconds; force
    /// it on a worker thread before the first document needs it.
    pub fn warm_up() {
        rayon::spawn(|| { Lazy::force(&SYNTAXES); });
    }
}

fn find_syntax(info: &str) -> Option<(&'static SyntaxReference, String)> {
    let token = info.split([',', ' ']).next().unwrap_or("");
    if token.is_empty() {
        return None;
    }

    SYNTAXES.find_syntax_by_token(token)
        .map(|syntax| (syntax, token.to_string()))
}

struct Highlighter<I> {
    generator: Option<(ClassedHTMLGenerator<'static>, String)>,
    inner: I,
}

impl<'a, I: Iterator<Item = Event<'a>>> Iterator for Highlighter<I> {
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                event @ Event::Start(Tag::CodeBlock(_)) => {
                    if let Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) = &event {
                        if let Some((syntax, lang)) = find_syntax(info) {
                            let generator = ClassedHTMLGenerator::new_with_class_style(
                                syntax, &SYNTAXES, ClassStyle::Spaced);

                            self.generator = Some((generator, lang));
                            continue;
                        }
                    }

                    return Some(event);
                }
                Event::Text(text) if self.generator.is_some() => {
                    let (generator, _) = self.generator.as_mut().unwrap();
                    let _ = generator.parse_html_for_line_which_includes_newline(&text);
                }
                Event::End(TagEnd::CodeBlock) if self.generator.is_some() => {
                    let (generator, lang) = self.generator.take().unwrap();
                    let mut html = String::new();
                    let _ = write!(html, "<pre class=\"highlight\"><code class=\"language-{lang}\">");
                    html.push_str(&generator.finalize());
                    html.push_str("</code></pre>\n");
                    return Some(Event::Html(html.into()));
                }
                event => return Some(event),
            }
        }
    }
}

impl Pass for SyntaxHighlight {
    fn remap<'a>(&'a mut self, events: Events<'a>) -> Events<'a> {
        Box::new(Highlighter { generator: None, inner: events })
    }
}
