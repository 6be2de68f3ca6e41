use clap::Parser;
use seistime::{time_zone, timestamp_to_date};

/// Convert a unix timestamp in seconds to a datetime
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// seconds since 1970-01-01T00:00:00 UTC
    #[arg(allow_negative_numbers = true)]
    timestamp: i64,

    /// IANA time zone to report the datetime in. Defaults to the system time
    /// zone
    #[arg(long)]
    tz: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let tz = time_zone(args.tz.as_deref())?;
    println!("{}", timestamp_to_date(args.timestamp, &tz)?);
    Ok(())
}
