#![forbid(unsafe_code)]
//! `stipple`: render a PNG as a field of points.
//!
//! Reads the image, places points with a weighted best-candidate sampler so that
//! bright regions get denser coverage, and writes the result as a `P2 <w> <h> 1`
//! text bitmap to stdout or a file. Progress goes to stderr.

mod logging;
mod source;

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use stipple::prelude::*;
use stipple::run::{DEFAULT_PROGRESS_INTERVAL, DEFAULT_TARGET_COUNT};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "stipple", version, about = "Stipple a PNG into a plain-text bitmap")]
struct Cli {
    /// Input PNG file.
    input: PathBuf,

    /// Number of points to place.
    #[arg(short, long, default_value_t = DEFAULT_TARGET_COUNT)]
    count: usize,

    /// Candidates per placement. Defaults to one third of the points placed so far.
    #[arg(short, long)]
    tries: Option<usize>,

    /// Seed for reproducible output. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,

    /// Inset from every image edge that stays empty.
    #[arg(long, default_value_t = DEFAULT_PADDING)]
    padding: i32,

    /// Stipple dark regions densely instead of bright ones.
    #[arg(long)]
    invert: bool,

    /// Report progress every this many points.
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    progress_every: usize,

    /// Output file. Defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        let tries = self.tries.map(TriesPolicy::Fixed).unwrap_or_default();
        RunConfig::new(self.count)
            .with_tries(tries)
            .with_padding(self.padding)
            .with_progress_interval(self.progress_every)
    }

    fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default()
        })
    }
}

fn main() -> ExitCode {
    logging::init_tracing();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let raster = source::load_brightness(&cli.input)?;
    let domain = raster.domain()?;
    let config = cli.run_config();
    let seed = cli.seed();
    info!("Stippling {} with seed {}.", cli.input.display(), seed);

    let runner = StippleRunner::try_new(config)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut progress = FnSink::new(|event: PlacementEvent| {
        if let PlacementEvent::Progress { placed, .. } = event {
            info!("Placed {} points", placed);
        }
    });

    let result = if cli.invert {
        runner.run_with_events(domain, &InvertedWeight(raster), &mut rng, &mut progress)?
    } else {
        runner.run_with_events(domain, &raster, &mut rng, &mut progress)?
    };

    let bitmap = Bitmap::from_points(&domain, &result.points);
    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            bitmap
                .write_p2(BufWriter::new(file))
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            bitmap
                .write_p2(BufWriter::new(stdout.lock()))
                .context("failed to write bitmap to stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_reference_run() {
        let cli = Cli::try_parse_from(["stipple", "in.png"]).unwrap();
        let config = cli.run_config();
        assert_eq!(config.target_count, 10_000);
        assert_eq!(config.tries, TriesPolicy::default());
        assert_eq!(config.padding, 5);
        assert_eq!(config.progress_interval, 100);
        assert!(cli.output.is_none());
        assert!(!cli.invert);
    }

    #[test]
    fn fixed_tries_and_seed_are_honored() {
        let cli = Cli::try_parse_from([
            "stipple",
            "in.png",
            "--count",
            "500",
            "--tries",
            "20",
            "--seed",
            "7",
            "-o",
            "out.pgm",
        ])
        .unwrap();
        let config = cli.run_config();
        assert_eq!(config.target_count, 500);
        assert_eq!(config.tries, TriesPolicy::Fixed(20));
        assert_eq!(cli.seed(), 7);
        assert_eq!(cli.output, Some(PathBuf::from("out.pgm")));
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["stipple"]).is_err());
    }

    #[test]
    fn run_writes_bitmap_file() {
        let dir = std::env::temp_dir();
        let id = std::process::id();
        let input = dir.join(format!("stipple-cli-in-{id}.png"));
        let output = dir.join(format!("stipple-cli-out-{id}.pgm"));
        image::RgbaImage::from_pixel(40, 30, image::Rgba([200, 200, 200, 255]))
            .save(&input)
            .unwrap();

        let input_arg = input.to_string_lossy().into_owned();
        let output_arg = output.to_string_lossy().into_owned();
        let cli = Cli::try_parse_from([
            "stipple",
            input_arg.as_str(),
            "--count",
            "60",
            "--seed",
            "3",
            "--output",
            output_arg.as_str(),
        ])
        .unwrap();
        run(cli).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        let _ = std::fs::remove_file(&input);
        let _ = std::fs::remove_file(&output);

        let bitmap = Bitmap::parse_p2(&text).unwrap();
        assert_eq!(bitmap.size(), (40, 30));
        assert!(bitmap.count_set() <= 60);
        assert!(bitmap.count_set() > 50);
    }

    #[test]
    fn run_fails_for_missing_input() {
        let cli = Cli::try_parse_from(["stipple", "/no/such/image.png"]).unwrap();
        assert!(run(cli).is_err());
    }
}
