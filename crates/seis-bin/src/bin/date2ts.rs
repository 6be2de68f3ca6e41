use clap::Parser;
use seistime::{date_to_timestamp, time_zone};

/// Convert a datetime to a unix timestamp in seconds
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// datetime to convert, formatted like 2015-02-13T18:59:12
    date: String,

    /// IANA time zone of the datetime. Defaults to the system time zone
    #[arg(long)]
    tz: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let tz = time_zone(args.tz.as_deref())?;
    println!("{}", date_to_timestamp(&args.date, &tz)?);
    Ok(())
}
