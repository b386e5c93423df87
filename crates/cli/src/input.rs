use anyhow::{anyhow, Context, Result};
use drawgeom::Point2;
use polars::prelude::*;
use std::path::Path;

/// Read columns `x` and `y` of a CSV file as points, in row order.
///
/// Missing or null cells are an error naming the row.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point2<f64>>> {
    let path = path.as_ref();
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading columns x, y from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    tracing::debug!(rows = df.height(), path = %path.display(), "read_points");
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point2::new(x, y)),
            _ => Err(anyhow!("row {row} of {} has an empty x or y", path.display())),
        })
        .collect()
}
