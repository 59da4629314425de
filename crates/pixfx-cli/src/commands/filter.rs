//! Filter command - warm tint, vignette, grain

use crate::FilterArgs;
use crate::commands::{load_image, load_overlay, report_saved, save_image};
use anyhow::Result;
use pixfx_ops::FilterPipeline;
use tracing::{debug, trace};

pub fn run(args: FilterArgs, verbose: u8) -> Result<()> {
    trace!(
        input = %args.io.input.display(),
        halo = %args.halo.display(),
        grain = %args.grain.display(),
        "filter::run"
    );

    // Overlays first: a missing resource fails before any decoding work.
    let halo = load_overlay(&args.halo)?;
    let grain = load_overlay(&args.grain)?;
    let input = load_image(&args.io.input)?;
    debug!(
        halo = ?halo.dimensions(),
        grain = ?grain.dimensions(),
        image = ?input.dimensions(),
        "filter inputs loaded"
    );

    if verbose > 0 {
        println!("Halo:  {} ({}x{})", args.halo.display(), halo.width(), halo.height());
        println!("Grain: {} ({}x{})", args.grain.display(), grain.width(), grain.height());
    }

    let result = FilterPipeline::with_defaults(&halo, &grain).apply(&input);

    save_image(&args.io.output, &result)?;
    report_saved(&args.io.output, &result, verbose);
    Ok(())
}
