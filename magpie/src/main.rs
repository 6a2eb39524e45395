use std::path::PathBuf;
use std::time::SystemTime;

use gazette::Catalog;
use gazette::markdown::SyntaxHighlight;

use crate::config::Config;

mod config;
mod export;

fn main() {
    let mut args = std::env::args().skip(1);
    let site = PathBuf::from(args.next().expect("<site-dir>"));
    let output = PathBuf::from(args.next().expect("<output-dir>"));

    let start = SystemTime::now();
    SyntaxHighlight::warm_up();

    let result = Config::load(&site).and_then(|config| {
        let catalog = Catalog::init(site.join(&config.articles))?;
        println!("catalog time: {}ms ({} articles)",
            start.elapsed().unwrap().as_millis(), catalog.len());

        let export = SystemTime::now();
        export::write_api(catalog, &config, &output)?;
        println!("export time: {}ms", export.elapsed().unwrap().as_millis());
        println!("total time: {}ms", start.elapsed().unwrap().as_millis());
        Ok(())
    });

    if let Err(e) = result {
        println!("error: {e}");
        std::process::exit(1);
    }
}
