use anyhow::Context;
use clap::{Parser, ValueEnum};
use hyperspace::{DisplayOptions, IntegrationMethod, Session, SimParams};
use log::info;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Method {
    Euler,
    Verlet,
    Rk4,
}

impl From<Method> for IntegrationMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Euler => IntegrationMethod::Euler,
            Method::Verlet => IntegrationMethod::Verlet,
            Method::Rk4 => IntegrationMethod::RungeKutta4,
        }
    }
}

/// Runs a world headless and logs how it evolves.
#[derive(Parser, Debug)]
struct Args {
    /// Number of spatial dimensions, 2 or more
    #[arg(short, long, default_value_t = 3)]
    dimension: usize,
    /// Preset to load instead of the opening scene, counted from 1
    #[arg(short, long)]
    preset: Option<usize>,
    #[arg(short, long, value_enum, default_value_t = Method::Euler)]
    method: Method,
    /// Frames to run
    #[arg(short, long, default_value_t = 600)]
    frames: u64,
    /// Log a summary every this many frames
    #[arg(long, default_value_t = 60)]
    log_every: u64,
    #[arg(long)]
    grav_constant: Option<f64>,
    #[arg(long)]
    density: Option<f64>,
    #[arg(long)]
    time_step: Option<f64>,
    #[arg(long)]
    steps_per_frame: Option<u32>,
    /// Seed for presets with random bodies
    #[arg(long)]
    seed: Option<u64>,
    /// Turn off merging of touching bodies
    #[arg(long)]
    no_collisions: bool,
    /// Include the coordinate axes in each frame
    #[arg(long)]
    axes: bool,
}

fn params_from(args: &Args) -> anyhow::Result<SimParams> {
    let mut params = SimParams::default();
    if let Some(g) = args.grav_constant {
        params.set_grav_constant(g)?;
    }
    if let Some(density) = args.density {
        params.set_default_density(density)?;
    }
    if let Some(dt) = args.time_step {
        params.set_time_step(dt)?;
    }
    if let Some(steps) = args.steps_per_frame {
        params.set_steps_per_frame(steps)?;
    }
    if let Some(seed) = args.seed {
        params.set_seed(seed);
    }
    Ok(params)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut session = Session::new(args.dimension, params_from(&args)?)
        .with_context(|| format!("cannot simulate {} dimensions", args.dimension))?;
    if let Some(preset) = args.preset {
        if !session.load_preset(preset) {
            anyhow::bail!("no preset {preset} for {} dimensions", args.dimension);
        }
    }
    session.set_integration_method(args.method.into());
    session.set_collision_enabled(!args.no_collisions);
    session.set_options(DisplayOptions {
        axes: args.axes,
        ..DisplayOptions::default()
    });

    let start_energy = session.total_energy();
    info!(
        "Running {} frames with {} bodies, energy {start_energy:.6}",
        args.frames,
        session.body_count()
    );

    let log_every = args.log_every.max(1);
    for frame in 1..=args.frames {
        let items = session.tick()?;
        if frame % log_every == 0 {
            info!(
                "Frame {frame}: {} bodies, {} draw items, energy {:.6}, {}",
                session.body_count(),
                items.len(),
                session.total_energy(),
                session.elapsed_time()
            );
        }
    }

    let end_energy = session.total_energy();
    info!(
        "Done after {}: energy drifted by {:.6}",
        session.elapsed_time(),
        end_energy - start_energy
    );
    Ok(())
}
