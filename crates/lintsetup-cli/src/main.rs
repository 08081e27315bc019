//! lintsetup - interactive ESLint/Prettier setup for Node projects

use anyhow::Result;
use clap::Parser;

/// The tool takes no flags; everything is gathered interactively.
/// clap still provides --help and --version.
#[derive(Parser, Debug)]
#[command(name = "lintsetup")]
#[command(about = "Interactive setup for ESLint and Prettier in Node projects")]
#[command(version)]
struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let _args = Args::parse();

    let result = lintsetup_core::run().await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
