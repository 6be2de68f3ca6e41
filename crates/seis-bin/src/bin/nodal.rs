use clap::Parser;
use focmec::{NodalPlane, principal_axes};
use seis_bin::print_components;

/// Get the strike, dip and rake of the auxiliary plane, the moment tensor and
/// the principal axes of a double couple given its first nodal plane
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "example: nodal 321 69 -173"
)]
struct Args {
    /// strike of the first nodal plane in degrees
    #[arg(allow_negative_numbers = true)]
    strike: f64,

    /// dip of the first nodal plane in degrees
    #[arg(allow_negative_numbers = true)]
    dip: f64,

    /// rake (slip) of the first nodal plane in degrees
    #[arg(allow_negative_numbers = true)]
    rake: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let np1 = NodalPlane::new(args.strike, args.dip, args.rake);
    let np2 = np1.auxiliary()?;
    let tensor = np1.to_tensor();
    let axes = principal_axes(&tensor)?;

    println!("MOMENT TENSOR:");
    print_components(&tensor);
    println!();
    println!("PRINCIPAL AXES:");
    print!("{axes}");
    println!();
    println!("DOUBLE COUPLE:");
    println!("NP1: {np1}");
    println!("NP2: {np2}");

    Ok(())
}
