use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::clap::AppSettings;
use structopt::StructOpt;

use wallpaper::{Generator, Options, Palette};

/// Generates a wallpaper from a list of colors read one per line (#RRGGBB).
#[derive(StructOpt, Debug)]
#[structopt(name = "wallpaper", setting = AppSettings::TrailingVarArg)]
struct Cli {
    /// Set the width of the generated image
    #[structopt(short = "w", default_value = "1366")]
    width: u32,

    /// Set the height of the generated image
    #[structopt(short = "h", default_value = "738")]
    height: u32,

    /// Set the output file
    #[structopt(short = "o", default_value = "wallpaper.png", parse(from_os_str))]
    output: PathBuf,

    /// Use only colors from the given list
    #[structopt(short = "d")]
    discrete: bool,

    /// Read colors from this file instead of standard input
    #[structopt(short = "p", long = "palette", parse(from_os_str))]
    palette: Option<PathBuf>,

    /// Seed for choosing the colors
    #[structopt(long = "seed")]
    seed: Option<u64>,

    /// List the available pictures and exit
    #[structopt(long = "list")]
    list: bool,

    /// Picture to generate, followed by its own arguments
    #[structopt(name = "PICTURE", required_unless = "list")]
    picture: Vec<String>,
}

fn read_palette(cli: &Cli) -> Result<Palette> {
    let palette = match &cli.palette {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open palette {}", path.display()))?;
            Palette::read(BufReader::new(file))?
        }
        None => Palette::read(io::stdin().lock())?,
    };
    Ok(palette)
}

fn run(cli: Cli) -> Result<()> {
    if cli.list {
        for g in Generator::ALL {
            println!("{}", g);
        }
        return Ok(());
    }
    let (name, args) = cli.picture.split_first().context("no picture specified")?;
    let generator: Generator = name.parse()?;
    let palette = read_palette(&cli)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let opts = Options {
        width: cli.width,
        height: cli.height,
        generator,
        args: args.to_vec(),
        discrete: cli.discrete,
    };
    let img = wallpaper::wallpaper(&opts, &palette, &mut rng)?;
    img.save(&cli.output)?;
    info!("done");
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<wallpaper::Error>() {
        Some(e) if e.is_usage() => 2,
        _ => 1,
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run(Cli::from_args()) {
        eprintln!("wallpaper: {:#}", err);
        process::exit(exit_code(&err));
    }
}
