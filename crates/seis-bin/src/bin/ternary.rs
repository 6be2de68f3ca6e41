use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, Parser};
use focmec::{
    CmtSolution, Mechanism, MomentTensor, TernaryPoint, load_tensors,
    principal_axes, sdr_to_tensor,
};

/// Place focal mechanisms on the ternary diagram of Frohlich and Apperson
/// (1992) and classify them as strike-slip, normal, reverse or odd
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "example:\n  \
        ternary --mt -0.379 -1.030 1.410 0.891 -0.052 -4.910",
    group(
        ArgGroup::new("input")
            .required(true)
            .args(["cmtfile", "mt", "np", "infile"])
    )
)]
struct Args {
    /// A file in the CMTSOLUTION format from the Global CMT catalog
    #[arg(short, long)]
    cmtfile: Option<PathBuf>,

    /// The moment tensor in the order Mrr Mtt Mpp Mrt Mrp Mtp
    #[arg(
        long,
        num_args = 6,
        allow_negative_numbers = true,
        value_names = ["Mrr", "Mtt", "Mpp", "Mrt", "Mrp", "Mtp"]
    )]
    mt: Option<Vec<f64>>,

    /// A nodal plane as strike dip rake
    #[arg(
        long,
        num_args = 3,
        allow_negative_numbers = true,
        value_names = ["strike", "dip", "rake"]
    )]
    np: Option<Vec<f64>>,

    /// A file with one moment tensor per line, as six whitespace separated
    /// columns. Lines starting with # are ignored
    #[arg(short, long)]
    infile: Option<PathBuf>,

    /// Print the principal axes of each mechanism
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Args {
    fn tensors(&self) -> anyhow::Result<Vec<MomentTensor>> {
        if let Some(path) = &self.cmtfile {
            let cmt = CmtSolution::load(path)
                .with_context(|| format!("loading {}", path.display()))?;
            Ok(vec![cmt.tensor])
        } else if let Some(path) = &self.infile {
            Ok(load_tensors(path)
                .with_context(|| format!("loading {}", path.display()))?)
        } else if let Some(&[strike, dip, rake]) = self.np.as_deref() {
            Ok(vec![sdr_to_tensor(strike, dip, rake)])
        } else {
            let vals = self.mt.as_deref().unwrap_or_default();
            let tensor = MomentTensor::from_slice(vals)
                .context("expected 6 moment tensor components")?;
            Ok(vec![tensor])
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let tensors = args.tensors()?;
    log::info!("classifying {} mechanisms", tensors.len());
    for (i, tensor) in tensors.iter().enumerate() {
        let axes = match principal_axes(tensor) {
            Ok(axes) => axes,
            Err(e) => {
                log::warn!("skipping mechanism {}: {e}", i + 1);
                println!("{:5} undefined ({e})", i + 1);
                continue;
            }
        };
        if args.verbose {
            print!("{axes}");
        }
        let class = Mechanism::classify(&axes);
        let point = TernaryPoint::new(&axes);
        println!("{:5} {class:<12} {point}", i + 1);
    }
    Ok(())
}
