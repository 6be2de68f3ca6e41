use anyhow::ensure;
use clap::Parser;
use focmec::magnitude::{Units, moment_to_mw, radiated_energy};

/// Convert seismic moment M0 to moment magnitude Mw and radiated energy
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// seismic moment, in N.m unless --dyne is given
    m0: f64,

    /// M0 is given in dyne.cm
    #[arg(long, default_value_t = false)]
    dyne: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    ensure!(args.m0 > 0.0, "seismic moment must be positive, got {}", args.m0);
    let units = if args.dyne {
        Units::DyneCm
    } else {
        Units::NewtonMeter
    };
    let nm = units.to_newton_meter(args.m0);
    let dyne_cm = units.to_dyne_cm(args.m0);
    println!("M0 = {nm:.3e} N.m ({dyne_cm:.3e} dyne.cm)");
    println!("Mw = {:.2}", moment_to_mw(dyne_cm));
    println!("Es = {:.3e} J", radiated_energy(nm));
    Ok(())
}
