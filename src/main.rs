use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod favicon_gen;

#[derive(Debug, Parser)]
#[clap(
    name = "favicon-gen",
    about = "Generate a complete website favicon set from a single source image"
)]
struct Args {
    /// Path to the source image (squared PNG with transparency recommended).
    #[clap(value_name = "INPUT", default_value = "icon.png")]
    input: PathBuf,

    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "./favicons")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    favicon_gen::generate_favicons(&args.input, &args.output)
}
