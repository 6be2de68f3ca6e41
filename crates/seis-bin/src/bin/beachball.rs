use anyhow::bail;
use clap::Parser;
use focmec::{Beachball, MomentTensor, NodalPlane, nodal_planes};

/// Draw a text beachball of a focal mechanism given either strike, dip and
/// rake or the six components of the moment tensor
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "example:\n  \
        beachball --fm 200 26 56\n  \
        beachball --fm -3.26 1.96 1.30 -0.0679 -0.603 -0.203"
)]
struct Args {
    /// Nodal plane (strike dip rake) or moment tensor (Mrr Mtt Mpp Mrt Mrp
    /// Mtp)
    #[arg(
        long,
        num_args = 3..=6,
        required = true,
        allow_negative_numbers = true
    )]
    fm: Vec<f64>,

    /// Radius of the beachball in rows
    #[arg(short, long, default_value_t = 10)]
    radius: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let vals = args.fm.as_slice();
    let (tensor, np1, np2) = if let &[strike, dip, rake] = vals {
        println!("Draw beachball from nodal plane");
        let np1 = NodalPlane::new(strike, dip, rake);
        (np1.to_tensor(), np1, np1.auxiliary()?)
    } else if let Some(tensor) = MomentTensor::from_slice(vals) {
        println!("Draw beachball from moment tensor");
        let (np1, np2) = nodal_planes(&tensor)?;
        (tensor, np1, np2)
    } else {
        bail!(
            "--fm takes 3 (strike dip rake) or 6 (moment tensor) values, \
             got {}",
            vals.len()
        );
    };
    println!("NP1: {np1}");
    println!("NP2: {np2}");
    println!();
    print!("{}", Beachball::new(args.radius).render(&tensor));
    Ok(())
}
