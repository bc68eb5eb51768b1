use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use spacha::generator::{card, CardStyle};

const OUTPUT_FILE: &str = "./spacha.png";

#[derive(Parser, Debug)]
#[command(version, about = "Render a super-chat style thank-you card as a PNG")]
struct Args {
    /// Supporter display name
    name: String,
    /// Donation amount (base-10 integer)
    #[arg(allow_hyphen_values = true)]
    amount: String,
    /// Message shown on the card
    #[arg(allow_hyphen_values = true)]
    message: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let amount: u64 = args
        .amount
        .parse()
        .with_context(|| format!("invalid amount {:?}", args.amount))?;

    let canvas = card::render(&args.name, amount, &args.message, &CardStyle::default())?;
    card::write_png(&canvas, std::path::Path::new(OUTPUT_FILE))?;

    info!("card written for amount {amount}");
    println!("wrote {OUTPUT_FILE}");
    Ok(())
}
