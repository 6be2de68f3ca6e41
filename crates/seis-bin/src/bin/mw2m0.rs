use clap::Parser;
use focmec::magnitude::{Units, mw_to_moment, radiated_energy};

/// Convert moment magnitude Mw to seismic moment and radiated energy
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// moment magnitude
    #[arg(allow_negative_numbers = true)]
    mw: f64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let m0 = Units::DyneCm.to_newton_meter(mw_to_moment(args.mw));
    println!("Mw = {:.2}", args.mw);
    println!("M0 = {m0:.3e} N.m");
    println!("Es = {:.3e} J", radiated_energy(m0));
}
