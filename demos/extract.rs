/// Extract a page from HTML on stdin and print it as JSON.
///
/// Usage:
///
/// ```sh
/// echo '<title>Hi</title><body><p>Hello</p></body>' | cargo run --example extract
/// ```
///
/// If stdin fails halfway through, whatever was extracted so far is printed before exiting with
/// an error.
use std::error::Error;
use std::io::stdin;
use std::process::ExitCode;

use argh::FromArgs;
use metascrape::Page;

/// Read some HTML from stdin and print the extracted page as JSON.
#[derive(FromArgs)]
struct Cli {
    /// print compact JSON on a single line.
    #[argh(switch)]
    compact: bool,

    /// only print the body text.
    #[argh(switch)]
    text: bool,
}

fn print(cli: &Cli, page: &Page) {
    if cli.text {
        println!("{}", page.text);
    } else if cli.compact {
        println!("{}", serde_json::to_string(page).unwrap());
    } else {
        println!("{}", serde_json::to_string_pretty(page).unwrap());
    }
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

    match Page::read(stdin().lock()) {
        Ok(page) => {
            print(&cli, &page);
            ExitCode::SUCCESS
        }
        Err(e) => {
            report(&e);
            if let Some(page) = e.partial_page() {
                print(&cli, page);
            }
            ExitCode::FAILURE
        }
    }
}
