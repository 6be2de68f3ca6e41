//! Shared command-line pieces for the seismology binaries

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use focmec::{CmtSolution, MomentTensor};

/// A moment tensor given either directly or through a CMTSOLUTION file
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TensorInput {
    /// Read the tensor from a file in the CMTSOLUTION format of the Global CMT
    /// catalog
    #[arg(short, long)]
    pub cmtfile: Option<PathBuf>,

    /// Give the moment tensor in the order Mrr Mtt Mpp Mrt Mrp Mtp
    #[arg(
        short,
        long,
        num_args = 6,
        allow_negative_numbers = true,
        value_names = ["Mrr", "Mtt", "Mpp", "Mrt", "Mrp", "Mtp"]
    )]
    pub moment_tensor: Option<Vec<f64>>,
}

/// Where a tensor came from, so callers can report the event metadata
pub enum Source {
    Cmt(Box<CmtSolution>),
    Components,
}

impl TensorInput {
    pub fn load(&self) -> anyhow::Result<(MomentTensor, Source)> {
        if let Some(path) = &self.cmtfile {
            let cmt = CmtSolution::load(path)
                .with_context(|| format!("loading {}", path.display()))?;
            log::info!(
                "loaded event {} from {}",
                cmt.event_name.as_deref().unwrap_or("<unnamed>"),
                path.display()
            );
            return Ok((cmt.tensor, Source::Cmt(Box::new(cmt))));
        }
        let vals = self.moment_tensor.as_deref().unwrap_or_default();
        let tensor = MomentTensor::from_slice(vals).with_context(|| {
            format!("expected 6 moment tensor components, got {}", vals.len())
        })?;
        Ok((tensor, Source::Components))
    }
}

/// print the six components in the style of the CMTSOLUTION format
pub fn print_components(tensor: &MomentTensor) {
    let names = ["Mrr", "Mtt", "Mpp", "Mrt", "Mrp", "Mtp"];
    for (name, c) in names.iter().zip(tensor.components()) {
        println!("{name}: {c:14.6e}");
    }
}
