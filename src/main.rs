use clap::Parser;
use seed_pattern::{generate_image, Options};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "seed-pattern",
    version,
    about = "Generate patterned images based on a seed"
)]
struct Args {
    /// Number of colors
    #[arg(long, default_value_t = 2)]
    colors: usize,

    /// Width of the image
    #[arg(long, default_value_t = 256)]
    width: u32,

    /// Height of the image
    #[arg(long, default_value_t = 256)]
    height: u32,

    /// Pattern width
    #[arg(long, default_value_t = 16)]
    pwidth: u32,

    /// Pattern height
    #[arg(long, default_value_t = 16)]
    pheight: u32,

    /// Seed for the image generator
    #[arg(long)]
    seed: Option<String>,

    /// Output file name
    #[arg(long)]
    filename: Option<PathBuf>,
}

impl From<Args> for Options {
    fn from(args: Args) -> Self {
        Options {
            colors: args.colors,
            width: args.width,
            height: args.height,
            pwidth: args.pwidth,
            pheight: args.pheight,
            seed: args.seed,
            filename: args.filename,
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    generate_image(&args.into())?;
    println!("Image generated successfully!");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Error generating image: {err:#}");
            ExitCode::FAILURE
        }
    }
}
