/// Fetch a URL and print the extracted page as JSON.
///
/// Usage:
///
/// ```sh
/// cargo run --features fetch --example scrape -- https://example.com
/// ```
///
/// Requires the fetch feature.
use std::error::Error;
use std::process::ExitCode;

use argh::FromArgs;

/// Fetch one or more pages and print what was extracted from them, one JSON document per line.
#[derive(FromArgs)]
struct Cli {
    /// also print the raw HTML of each page.
    #[argh(switch)]
    with_html: bool,

    /// the URLs to fetch
    #[argh(positional)]
    urls: Vec<String>,
}

fn report(error: &dyn Error) {
    eprintln!("error: {}", error);
    let mut source = error.source();
    while let Some(e) = source {
        eprintln!("  caused by: {}", e);
        source = e.source();
    }
}

fn main() -> ExitCode {
    let cli: Cli = argh::from_env();
    let mut status = ExitCode::SUCCESS;

    for url in &cli.urls {
        match metascrape::fetch(url) {
            Ok(mut page) => {
                if !cli.with_html {
                    page.html.clear();
                }
                println!("{}", serde_json::to_string(&page).unwrap());
            }
            Err(e) => {
                report(&e);
                status = ExitCode::FAILURE;
            }
        }
    }

    status
}
