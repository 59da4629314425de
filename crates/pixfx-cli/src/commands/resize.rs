//! Resize command - nearest-neighbor scaling

use crate::ResizeArgs;
use crate::commands::{load_image, report_saved, save_image};
use anyhow::{Result, bail};
use pixfx_ops::resize::{fit_dimensions, resize_nearest};
use tracing::trace;

/// Resolves the output size from the requested width/height.
///
/// A missing dimension follows the aspect ratio of the source.
fn target_size(
    src: (u32, u32),
    width: Option<u32>,
    height: Option<u32>,
    fit: bool,
) -> Result<(u32, u32)> {
    let (sw, sh) = src;
    let scaled = |num: u32, den: u32, other: u32| -> u32 {
        ((other as u64 * num as u64 + den as u64 / 2) / den as u64).max(1) as u32
    };
    let size = match (width, height) {
        (Some(w), Some(h)) if fit => fit_dimensions(sw, sh, w, h),
        (Some(w), Some(h)) => (w, h),
        (Some(w), None) => (w, scaled(w, sw, sh)),
        (None, Some(h)) => (scaled(h, sh, sw), h),
        (None, None) => bail!("Specify --width and/or --height"),
    };
    if size.0 == 0 || size.1 == 0 {
        bail!("Target size must be non-zero, got {}x{}", size.0, size.1);
    }
    Ok(size)
}

pub fn run(args: ResizeArgs, verbose: u8) -> Result<()> {
    trace!(
        input = %args.io.input.display(),
        width = ?args.width,
        height = ?args.height,
        "resize::run"
    );
    let input = load_image(&args.io.input)?;
    let (w, h) = target_size(input.dimensions(), args.width, args.height, args.fit)?;

    if verbose > 0 {
        println!("Resize: {}x{} -> {}x{}", input.width(), input.height(), w, h);
    }

    let result = resize_nearest(&input, w, h)?;

    save_image(&args.io.output, &result)?;
    report_saved(&args.io.output, &result, verbose);
    Ok(())
}
