use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use markdownify::{Invocation, StyleOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "markdownify", version)]
#[command(about = "Convert HTML to Markdown", long_about = None)]
struct Arguments {
    /// HTML string or path to an HTML file
    #[arg(value_name = "HTML")]
    html: String,

    #[command(flatten)]
    style: StyleOptions,
}

impl Arguments {
    fn into_invocation(self) -> Invocation {
        Invocation::new(self.html, self.style)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let invocation = Arguments::parse().into_invocation();

    let markdown = match markdownify::run(&invocation) {
        Ok(markdown) => markdown,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = writeln!(io::stdout().lock(), "{markdown}") {
        eprintln!("Error writing output: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
