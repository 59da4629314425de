//! HSL adjustment commands: hue, saturation, lightness

use crate::commands::{load_image, report_saved, save_image};
use crate::{DeltaArgs, HueArgs, ImageArgs};
use anyhow::Result;
use pixfx_ops::Operation;
use tracing::trace;

fn apply(io: &ImageArgs, op: Operation, verbose: u8) -> Result<()> {
    trace!(input = %io.input.display(), op = %op, "adjust::run");
    let input = load_image(&io.input)?;
    if verbose > 0 {
        println!("Adjust: {}", op);
    }
    let result = op.apply(&input)?;
    save_image(&io.output, &result)?;
    report_saved(&io.output, &result, verbose);
    Ok(())
}

pub fn run_hue(args: HueArgs, verbose: u8) -> Result<()> {
    apply(&args.io, Operation::Hue(args.delta), verbose)
}

pub fn run_saturation(args: DeltaArgs, verbose: u8) -> Result<()> {
    apply(&args.io, Operation::Saturation(args.delta), verbose)
}

pub fn run_lightness(args: DeltaArgs, verbose: u8) -> Result<()> {
    apply(&args.io, Operation::Lightness(args.delta), verbose)
}
