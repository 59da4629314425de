//! Batch processing of independent rasters using Rayon.
//!
//! Every operation in this crate is a pure sweep over one raster, so a batch
//! of images parallelizes at the image level with no shared mutable state.
//! Work runs on the global Rayon pool; size it with
//! `rayon::ThreadPoolBuilder` before calling in.
//!
//! # Example
//!
//! ```rust
//! use pixfx_core::{Raster, Rgb};
//! use pixfx_ops::{Operation, parallel};
//!
//! let batch = vec![
//!     Raster::filled(4, 4, Rgb::gray(10)).unwrap(),
//!     Raster::filled(2, 8, Rgb::gray(200)).unwrap(),
//! ];
//! let results = parallel::apply_batch(&batch, &Operation::Invert);
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[1].as_ref().unwrap().pixel(0, 0), Rgb::gray(55));
//! ```

use crate::OpsResult;
use crate::operation::Operation;
use pixfx_core::Raster;
use rayon::prelude::*;
use tracing::debug;

/// Applies `op` to every raster in parallel.
///
/// Results keep the order of `inputs`; one failure does not stop the rest.
pub fn apply_batch(inputs: &[Raster], op: &Operation) -> Vec<OpsResult<Raster>> {
    debug!(count = inputs.len(), op = %op, "parallel::apply_batch");
    inputs.par_iter().map(|img| op.apply(img)).collect()
}

/// Applies a chain of operations to every raster in parallel.
///
/// Each raster passes through `ops` in order; the first failing step ends
/// that raster's chain.
pub fn apply_chain_batch(inputs: &[Raster], ops: &[Operation]) -> Vec<OpsResult<Raster>> {
    debug!(count = inputs.len(), steps = ops.len(), "parallel::apply_chain_batch");
    inputs.par_iter().map(|img| Operation::apply_chain(ops, img)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpsError;
    use pixfx_core::Rgb;

    fn batch() -> Vec<Raster> {
        (1..=6)
            .map(|i| {
                Raster::from_fn(i * 3, i + 1, |x, y| {
                    Rgb::new((x * 9) as u8, (y * 17) as u8, i as u8)
                })
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_apply_batch_matches_sequential() {
        let inputs = batch();
        let op = Operation::Sepia;
        let results = apply_batch(&inputs, &op);
        for (img, out) in inputs.iter().zip(results) {
            assert_eq!(out.unwrap(), op.apply(img).unwrap());
        }
    }

    #[test]
    fn test_apply_batch_reports_errors_per_item() {
        let inputs = batch();
        let results = apply_batch(&inputs, &Operation::Lightness(f64::NAN));
        assert_eq!(results.len(), inputs.len());
        assert!(
            results
                .iter()
                .all(|r| matches!(r, Err(OpsError::OutOfRange(_))))
        );
    }

    #[test]
    fn test_chain_batch() {
        let inputs = batch();
        let ops = [Operation::Rotate, Operation::Rotate, Operation::Rotate, Operation::Rotate];
        let results = apply_chain_batch(&inputs, &ops);
        for (img, out) in inputs.iter().zip(results) {
            assert_eq!(&out.unwrap(), img);
        }
        let empty = apply_chain_batch(&inputs, &[]);
        assert_eq!(empty[0].as_ref().unwrap(), &inputs[0]);
    }
}
