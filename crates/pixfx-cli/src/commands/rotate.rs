//! Rotate command - clockwise quarter turns

use crate::RotateArgs;
use crate::commands::{load_image, report_saved, save_image};
use anyhow::Result;
use pixfx_ops::transform::rotate_cw_times;
use tracing::trace;

pub fn run(args: RotateArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.io.input.display(), times = args.times, "rotate::run");
    let input = load_image(&args.io.input)?;
    if verbose > 0 {
        println!("Size: {}x{}", input.width(), input.height());
        println!("Rotation: {} x 90° clockwise", args.times % 4);
    }

    let result = rotate_cw_times(&input, args.times);

    save_image(&args.io.output, &result)?;
    report_saved(&args.io.output, &result, verbose);
    Ok(())
}
