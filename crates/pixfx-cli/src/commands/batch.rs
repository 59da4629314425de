//! Batch processing command

use crate::BatchArgs;
use anyhow::{Result, bail};
use pixfx_ops::Operation;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

/// Parses `NAME` / `NAME=VALUE` operation strings.
fn parse_ops(specs: &[String]) -> Result<Vec<Operation>> {
    specs
        .iter()
        .map(|s| s.parse::<Operation>().map_err(Into::into))
        .collect()
}

/// Output path: `<output_dir>/<stem>.<ext>`, keeping the input extension
/// unless a format is forced.
fn output_path(input: &Path, output_dir: &Path, format: Option<&str>) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let ext = format.unwrap_or_else(|| {
        input
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("png")
    });
    output_dir.join(format!("{}.{}", stem, ext.trim_start_matches('.')))
}

pub fn run(args: BatchArgs, verbose: u8) -> Result<()> {
    trace!(pattern = %args.input, ops = ?args.ops, "batch::run");

    // Reject bad operations before touching any file
    let ops = parse_ops(&args.ops)?;

    let files: Vec<PathBuf> = glob::glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        bail!("No files match pattern: {}", args.input);
    }

    info!(files = files.len(), pattern = %args.input, ops = ops.len(), "Starting batch processing");

    if verbose > 0 {
        println!("Found {} files matching '{}'", files.len(), args.input);
    }

    std::fs::create_dir_all(&args.output_dir)?;

    let results: Vec<Result<()>> = files
        .par_iter()
        .map(|input| process_file(input, &args.output_dir, &ops, args.format.as_deref(), verbose))
        .collect();

    let mut success = 0;
    let mut failed = 0;
    for r in results {
        match r {
            Ok(()) => success += 1,
            Err(e) => {
                failed += 1;
                eprintln!("Error: {:#}", e);
            }
        }
    }

    info!(success, failed, "Batch processing complete");
    println!("Processed: {} success, {} failed", success, failed);

    if failed > 0 {
        bail!("{} files failed", failed);
    }
    Ok(())
}

fn process_file(
    input: &Path,
    output_dir: &Path,
    ops: &[Operation],
    format: Option<&str>,
    verbose: u8,
) -> Result<()> {
    let output = output_path(input, output_dir, format);
    if verbose > 0 {
        println!("Processing {} -> {}", input.display(), output.display());
    }

    let image = super::load_image(input)?;
    let result = Operation::apply_chain(ops, &image)?;
    debug!(input = %input.display(), steps = ops.len(), "chain applied");

    super::save_image(&output, &result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ops() {
        let ops = parse_ops(&["sepia".into(), "hue=30".into(), "rotate".into()]).unwrap();
        assert_eq!(ops, vec![Operation::Sepia, Operation::Hue(30), Operation::Rotate]);
        assert!(parse_ops(&["blur".into()]).is_err());
    }

    #[test]
    fn test_output_path() {
        let out = Path::new("out");
        assert_eq!(output_path(Path::new("shots/a.jpg"), out, None), out.join("a.jpg"));
        assert_eq!(output_path(Path::new("shots/a.jpg"), out, Some("png")), out.join("a.png"));
        assert_eq!(output_path(Path::new("shots/a.jpg"), out, Some(".png")), out.join("a.png"));
    }
}
