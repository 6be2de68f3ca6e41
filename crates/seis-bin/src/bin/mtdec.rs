use clap::Parser;
use focmec::{MomentTensor, magnitude};
use seis_bin::{Source, TensorInput, print_components};

/// Estimate the DC, CLVD and ISO parts of a moment tensor
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "example:\n  \
        mtdec -m -3.26 1.96 1.30 -0.0679 -0.603 -0.203\n  \
        mtdec -c CMTSOLUTION"
)]
struct Args {
    #[command(flatten)]
    input: TensorInput,

    /// Write the percentages as JSON for use by other programs
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let (tensor, source) = args.input.load()?;
    let dec = tensor.decompose()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dec)?);
        return Ok(());
    }

    if let Source::Cmt(cmt) = &source {
        if let Some(name) = &cmt.event_name {
            println!("event name: {name}");
        }
        println!(
            "region: {}, origin: {}",
            cmt.hypocenter.region, cmt.hypocenter.origin
        );
        let m0 = tensor.scalar_moment();
        println!(
            "M0 = {m0:.3e} dyne.cm, Mw = {:.2}",
            magnitude::moment_to_mw(m0)
        );
    }
    println!("Moment tensor:");
    print_components(&tensor);
    println!();
    print!("{tensor}");

    let eig = tensor.eigen();
    let iso = eig.isotropic;
    println!("\nIsotropic part of the moment tensor:");
    print!("{}", MomentTensor::new(iso, iso, iso, 0.0, 0.0, 0.0));

    let [d1, d2, d3] = eig.deviatoric;
    println!("\nDeviatoric eigenvalues:");
    println!("{d1:14.6e}{d2:14.6e}{d3:14.6e}");
    println!();
    print!("{dec}");

    Ok(())
}
