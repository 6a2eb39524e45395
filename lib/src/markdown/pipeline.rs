use pulldown_cmark::{Options, Parser};

use crate::error::Result;
use crate::markdown::{Context, Events, Pass};
use crate::markdown::{FrontMatter, Headline, Math, RawMarkup, Renderer, SyntaxHighlight};

/// An ordered chain of [`Pass`]es over one parsed document.
///
/// The first registered pass sees the parser's events first; each later
/// pass sees whatever its predecessor emitted. Running the pipeline
/// returns the [`Context`] the passes filled in.
pub struct Pipeline {
    options: Options,
    passes: Vec<Box<dyn Pass>>,
}

impl Pipeline {
    /// An empty pipeline: parses and discards. Callers select passes
    /// with [`Pipeline::pass`].
    pub fn new() -> Self {
        Pipeline { options: Pipeline::default_options(), passes: vec![] }
    }

    /// The standard article chain: metadata extraction, headline
    /// capture, math spans, verbatim raw markup, code highlighting,
    /// HTML rendering.
    pub fn article() -> Self {
        Pipeline::new()
            .pass(FrontMatter::default())
            .pass(Headline::default())
            .pass(Math::default())
            .pass(RawMarkup::verbatim())
            .pass(SyntaxHighlight::default())
            .pass(Renderer::default())
    }

    // Everything articles use, minus smart punctuation: authors get the
    // punctuation they typed.
    fn default_options() -> Options {
        Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_MATH
            | Options::ENABLE_YAML_STYLE_METADATA_BLOCKS
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn pass<P: Pass + 'static>(mut self, pass: P) -> Self {
        self.passes.push(Box::new(pass));
        self
    }

    /// Parses `input` and drives it through the chain.
    pub fn run(&mut self, input: &str) -> Result<Context> {
        let parser = Parser::new_ext(input, self.options);
        let events = self.passes.iter_mut()
            .fold(Box::new(parser) as Events<'_>, |events, pass| pass.remap(events));

        // Drive the stream to completion: terminal passes consume it
        // eagerly, extraction passes observe it as it flows by.
        events.for_each(drop);

        let mut context = Context::default();
        for pass in self.passes.iter_mut() {
            pass.finalize(&mut context)?;
        }

        Ok(context)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Pipeline::new()
    }
}
