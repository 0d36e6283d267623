use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;

use parking_lot_sim::parking::{self, FeeModel, FloorLayout, LotConfig, ScanOrder};

#[derive(Parser)]
#[command(name = "parking_lot_sim")]
#[command(about = "Parking lot simulation with pluggable parking and payment strategies")]
struct Cli {
    /// Floor layout as LEVEL=SIZE:COUNT[,SIZE:COUNT...]; repeat for more floors.
    /// Defaults to two compact spots on floor 1 and two large spots on floor 2.
    #[arg(long = "floor", value_name = "LAYOUT")]
    floors: Vec<FloorLayout>,

    /// Spot selection: lower or upper level first
    #[arg(long, default_value = "lower")]
    strategy: ScanOrder,

    /// Fee model: flat (per started day) or hourly (per started hour)
    #[arg(long, default_value = "flat")]
    payment: FeeModel,

    /// Override the fee model's default rate
    #[arg(long)]
    rate: Option<f64>,

    /// Number of random arrivals to simulate; 0 runs the scripted demo
    #[arg(long, default_value = "0")]
    arrivals: usize,

    /// Seed for the random run
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Longest stay of a vehicle in the random run, in hours
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u32).range(1..))]
    max_stay_hours: u32,
}

impl Cli {
    fn lot_config(&self) -> LotConfig {
        let floors = if self.floors.is_empty() {
            LotConfig::demo_layout()
        } else {
            self.floors.clone()
        };
        LotConfig {
            floors,
            scan_order: self.strategy,
            fee_model: self.payment,
            rate: self.rate,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,parking_lot_sim=info"),
    )
    .init();

    let cli = Cli::parse();
    let mut lot = cli.lot_config().build()?;

    println!("Running parking lot simulation in headless mode...");
    println!(
        "Parking strategy: {}, payment strategy: {}",
        lot.parking_strategy_name(),
        lot.payment_strategy_name()
    );
    println!();

    let summary = if cli.arrivals == 0 {
        parking::run_demo(&mut lot).context("Demo scenario failed")?
    } else {
        let summary = parking::run_random(
            &mut lot,
            cli.arrivals,
            cli.seed,
            cli.max_stay_hours,
            Utc::now(),
        )
        .context("Random scenario failed")?;
        println!("=== Final State ===");
        lot.print_state();
        summary
    };

    println!("=== Totals ===");
    println!("Arrivals: {}", summary.arrivals);
    println!("Parked: {}", summary.parked);
    println!("Turned away: {}", summary.turned_away);
    println!("Departed: {}", summary.departed);
    println!("Revenue: {:.2}", summary.revenue);

    Ok(())
}
