//! town: runs the agent-city simulation headless and writes CSV output.
//!
//! Without `--config` it simulates the reference town (four houses, two
//! restaurants, two parks, four residents) for one day.  Progress is logged
//! once per simulated hour; set `RUST_LOG=debug` to see every reservation.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use ac_core::Tick;
use ac_output::{CsvWriter, SimOutputObserver};
use ac_sim::{Both, ScenarioConfig, SimObserver, TickSummary};

/// Headless agent-city run.
#[derive(Parser, Debug)]
#[command(name = "town")]
#[command(about = "Simulate townspeople competing for beds, tables and benches")]
struct Args {
    /// TOML scenario file; the reference town when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of ticks to simulate (overrides the scenario)
    #[arg(long)]
    ticks: Option<u64>,

    /// Random seed (overrides the scenario)
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory for CSV files
    #[arg(long, default_value = "output/town")]
    out: PathBuf,
}

// ── Progress observer ─────────────────────────────────────────────────────────

/// Logs one line per simulated hour and remembers the busiest moment.
struct Hourly {
    ticks_per_hour: u64,
    peak_occupied:  usize,
    peak_tick:      Tick,
}

impl Hourly {
    fn new(ticks_per_hour: u32) -> Self {
        Self {
            ticks_per_hour: u64::from(ticks_per_hour.max(1)),
            peak_occupied:  0,
            peak_tick:      Tick::ZERO,
        }
    }
}

impl SimObserver for Hourly {
    fn on_tick_end(&mut self, s: &TickSummary) {
        if s.occupied > self.peak_occupied {
            self.peak_occupied = s.occupied;
            self.peak_tick = s.tick;
        }
        if s.tick.0.is_multiple_of(self.ticks_per_hour) {
            tracing::info!(
                day = s.day,
                hour = s.hour,
                period = %s.time_of_day,
                active = s.active,
                using = s.using,
                idle = s.idle,
                occupied = s.occupied,
                "progress"
            );
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    // 1. Scenario.
    let mut scenario = match &args.config {
        Some(path) => ScenarioConfig::load(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => ScenarioConfig::standard(),
    };
    if let Some(ticks) = args.ticks {
        scenario.sim.total_ticks = ticks;
    }
    if let Some(seed) = args.seed {
        scenario.sim.seed = seed;
    }

    // 2. Build.
    let mut sim = scenario.build().context("building simulation")?;
    println!("=== town: agent-city simulation ===");
    println!(
        "Agents: {}  |  Buildings: {}  |  Ticks: {}  |  Seed: {}",
        sim.agents.len(),
        sim.world.directories().len(),
        sim.config.total_ticks,
        sim.config.seed
    );
    for (kind, count) in sim.world.building_counts() {
        println!("  {kind:<12} x{count}");
    }
    println!("Start: {}", sim.clock);
    println!();

    // 3. Output.
    let writer = CsvWriter::new(&args.out)
        .with_context(|| format!("opening output directory {}", args.out.display()))?;
    let output = SimOutputObserver::new(writer, &sim.config);
    let mut obs = Both(output, Hourly::new(sim.config.ticks_per_hour));

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.0.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!();
    println!("Simulation complete in {:.3} s, now {}", elapsed.as_secs_f64(), sim.clock);
    println!(
        "Peak occupancy: {} slots at tick {}",
        obs.1.peak_occupied, obs.1.peak_tick
    );
    println!("Output written to {}", args.out.display());
    println!();

    println!(
        "{:<10} {:<18} {:<8} {:>7} {:>7} {:>7}  {}",
        "Agent", "Action", "Urgent", "energy", "hunger", "social", "Position"
    );
    println!("{}", "-".repeat(78));
    for s in sim.statuses() {
        let need = |n: &str| s.need(n).map_or_else(|| "-".to_owned(), |v| format!("{v:.1}"));
        println!(
            "{:<10} {:<18} {:<8} {:>7} {:>7} {:>7}  {}",
            s.name,
            s.action,
            s.most_urgent_need,
            need("energy"),
            need("hunger"),
            need("social"),
            s.position,
        );
    }

    println!();
    println!("{:<12} {:>9} {:>9} {:>9}", "Building", "Count", "In use", "Capacity");
    println!("{}", "-".repeat(42));
    for row in sim.occupancy() {
        println!(
            "{:<12} {:>9} {:>9} {:>9}",
            row.kind, row.buildings, row.occupants, row.capacity
        );
    }

    Ok(())
}
