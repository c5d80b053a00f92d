use clap::Parser;
use myomorph::AppConfig;
use myomorph::capture;
use myomorph::creature::{AnchorSizing, Detail, Population, describe, rng};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for reproducible populations (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Requested organism count (one fewer is generated)
    #[arg(long)]
    organisms: Option<usize>,

    /// Maximum anchors per organism (at least 2)
    #[arg(long)]
    anchors_limit: Option<usize>,

    /// Maximum requested muscles per organism (at least 1)
    #[arg(long)]
    muscles_limit: Option<usize>,

    /// Organism sizes are sampled below this
    #[arg(long)]
    size_limit: Option<f32>,

    /// Derive anchor size from weight instead of sampling it
    #[arg(long)]
    weighted_anchors: bool,

    /// Also describe every anchor and muscle
    #[arg(long)]
    verbose: bool,

    /// Write a PNG with all organisms tiled in a grid
    #[arg(long)]
    snapshot: Option<String>,

    /// Simulate the population falling inside the window and write a GIF
    #[arg(long)]
    animate: Option<String>,

    /// Number of frames to capture for --animate
    #[arg(long)]
    frames: Option<usize>,

    /// Frames per second for --animate
    #[arg(long)]
    fps: Option<u16>,
}

impl Args {
    /// Command-line flags take priority over loaded configuration
    fn apply(&self, config: &mut AppConfig) {
        if let Some(organisms) = self.organisms {
            config.population.organisms_nr = organisms;
        }
        if let Some(limit) = self.anchors_limit {
            config.population.anchors_nr_limit = limit;
        }
        if let Some(limit) = self.muscles_limit {
            config.population.muscles_nr_limit = limit;
        }
        if let Some(limit) = self.size_limit {
            config.population.size_limit = limit;
        }
        if self.weighted_anchors {
            config.population.anchor_sizing = AnchorSizing::Weighted;
        }
        if let Some(frames) = self.frames {
            config.render.frames = frames;
        }
        if let Some(fps) = self.fps {
            config.render.fps = fps;
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = AppConfig::load()?;
    args.apply(&mut config);

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Starting Myomorph (seed {})", seed);

    let detail = if args.verbose {
        Detail::Full
    } else {
        Detail::Summary
    };

    // Organisms live in local coordinates unless they are about to be animated
    let window = config.window.active_window();
    let population_config = if args.animate.is_some() {
        config.population.to_windowed_config(window)
    } else {
        config.population.to_config()
    };

    let mut rng = rng::seeded(seed);
    let population = Population::new(population_config, &mut rng)?;

    for line in describe::population_lines(&population, detail) {
        println!("{}", line);
    }

    if let Some(path) = &args.snapshot {
        let (width, height) = capture::capture_snapshot(&population, config.render.tile_margin, path)?;
        log::info!("Snapshot written to {} ({}x{})", path, width, height);
    }

    if let Some(path) = &args.animate {
        let frames = capture::capture_animation(&population, window, &config.render, path)?;
        log::info!("Animation written to {} ({} frames)", path, frames);
    }

    Ok(())
}
