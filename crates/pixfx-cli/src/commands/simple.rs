//! Parameterless operations: grayscale, invert, sepia, bw

use crate::ImageArgs;
use crate::commands::{load_image, report_saved, save_image};
use anyhow::Result;
use pixfx_ops::Operation;
use tracing::trace;

pub fn run(args: ImageArgs, op: Operation, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), op = %op, "simple::run");
    let input = load_image(&args.input)?;
    if verbose > 0 {
        println!("Loaded: {} ({}x{})", args.input.display(), input.width(), input.height());
        println!("Operation: {}", op);
    }

    let result = op.apply(&input)?;

    save_image(&args.output, &result)?;
    report_saved(&args.output, &result, verbose);
    Ok(())
}
