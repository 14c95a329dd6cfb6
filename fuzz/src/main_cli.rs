//! Replay a crashing input: `cargo run --bin main_cli < crash-file`
use std::io::Read;

fn main() {
    let mut input = Vec::new();
    std::io::stdin().lock().read_to_end(&mut input).unwrap();
    eprintln!("replaying {} bytes", input.len());
    testcase::run(&input);
    println!("{:#?}", metascrape::Page::read(input.as_slice()).unwrap());
}
