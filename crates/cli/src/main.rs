mod input;
mod provenance;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use drawgeom::hull::{monotone_chain_hull, quadrant_filter_hull};
use drawgeom::polyline::{extract_fractional, PolyLine2};
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "drawgeom")]
#[command(about = "Convex hulls and arc-length polyline queries on CSV point data")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algo {
    Quadrant,
    Monotone,
}

impl Algo {
    fn as_str(self) -> &'static str {
        match self {
            Algo::Quadrant => "quadrant",
            Algo::Monotone => "monotone",
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Convex hull of the x,y points in a CSV file, written as JSON
    Hull {
        #[arg(long)]
        input: String,
        #[arg(long, value_enum, default_value_t = Algo::Quadrant)]
        algo: Algo,
        #[arg(long)]
        out: String,
    },
    /// Point and heading at an arc-length position along the CSV polyline
    Locate {
        #[arg(long)]
        input: String,
        #[arg(long, allow_hyphen_values = true)]
        position: f64,
        /// Extend the end segments beyond [0, length]
        #[arg(long)]
        extended: bool,
    },
    /// Sub-line between two positions, written as a tab-separated table
    Extract {
        #[arg(long)]
        input: String,
        #[arg(long)]
        start: f64,
        #[arg(long)]
        end: f64,
        /// Interpret start/end as fractions of the total length
        #[arg(long)]
        fractional: bool,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Debug, Serialize)]
struct HullOut {
    algo: &'static str,
    input_points: usize,
    vertices: Vec<[f64; 2]>,
}

#[derive(Debug, Serialize)]
struct LocateOut {
    position: f64,
    x: f64,
    y: f64,
    dir_z: f64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { input, algo, out } => hull(&input, algo, &out),
        Action::Locate {
            input,
            position,
            extended,
        } => {
            let loc = locate(&input, position, extended)?;
            println!("{}", serde_json::to_string_pretty(&loc)?);
            Ok(())
        }
        Action::Extract {
            input,
            start,
            end,
            fractional,
            out,
        } => extract(&input, start, end, fractional, &out),
        Action::Report => report(),
    }
}

fn ensure_parent(out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

fn read_line(input: &str) -> Result<PolyLine2> {
    let pts = input::read_points(input)?;
    PolyLine2::new(pts).with_context(|| format!("building polyline from {input}"))
}

fn hull(input: &str, algo: Algo, out: &str) -> Result<()> {
    tracing::info!(input, algo = algo.as_str(), out, "hull");
    let pts = input::read_points(input)?;
    let poly = match algo {
        Algo::Quadrant => quadrant_filter_hull(&pts),
        Algo::Monotone => monotone_chain_hull(&pts),
    }
    .with_context(|| format!("hull of {} points from {input}", pts.len()))?;
    tracing::info!(points = pts.len(), vertices = poly.size(), "hull_done");

    let doc = HullOut {
        algo: algo.as_str(),
        input_points: pts.len(),
        vertices: poly.points().iter().map(|p| [p.x, p.y]).collect(),
    };
    let out_path = Path::new(out);
    ensure_parent(out_path)?;
    std::fs::write(out_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {out}"))?;
    let params = serde_json::json!({ "algo": algo.as_str() });
    write_sidecar(out_path, Payload::new(params).with_input(input))?;
    Ok(())
}

fn locate(input: &str, position: f64, extended: bool) -> Result<LocateOut> {
    tracing::info!(input, position, extended, "locate");
    let line = read_line(input)?;
    let ray = if extended {
        line.location_extended(position)?
    } else {
        line.location(position)?
    };
    Ok(LocateOut {
        position,
        x: ray.point.x,
        y: ray.point.y,
        dir_z: ray.dir_z(),
    })
}

fn extract(input: &str, start: f64, end: f64, fractional: bool, out: &str) -> Result<()> {
    tracing::info!(input, start, end, fractional, out, "extract");
    let line = read_line(input)?;
    let sub = if fractional {
        extract_fractional(&line, start, end)?
    } else {
        line.extract(start, end)?
    };
    tracing::info!(points = sub.size(), length = sub.length(), "extract_done");

    let out_path = Path::new(out);
    ensure_parent(out_path)?;
    std::fs::write(out_path, sub.to_table()).with_context(|| format!("writing {out}"))?;
    let params = serde_json::json!({
        "start": start,
        "end": end,
        "fractional": fractional,
        "source_length": line.length(),
    });
    write_sidecar(out_path, Payload::new(params).with_input(input))?;
    Ok(())
}

fn report() -> Result<()> {
    let mut obj = provenance::build_info();
    obj["params"] = serde_json::json!({});
    obj["outputs"] = serde_json::json!([]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    fn write_csv(dir: &Path, name: &str, body: &str) -> String {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn hull_writes_vertices_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = write_csv(dir.path(), "pts.csv", "x,y\n0,0\n4,0\n4,4\n0,4\n2,2\n");
        for algo in [Algo::Quadrant, Algo::Monotone] {
            let out = dir.path().join(format!("{}.json", algo.as_str()));
            hull(&input, algo, out.to_str().unwrap()).unwrap();
            let doc: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
            assert_eq!(doc["input_points"], 5);
            assert_eq!(doc["vertices"].as_array().unwrap().len(), 4);
            let prov = dir.path().join(format!("{}.provenance.json", algo.as_str()));
            assert!(prov.exists());
        }
    }

    #[test]
    fn hull_of_collinear_points_fails() {
        let dir = tempdir().unwrap();
        let input = write_csv(dir.path(), "line.csv", "x,y\n0,0\n1,1\n2,2\n");
        let out = dir.path().join("h.json");
        assert!(hull(&input, Algo::Quadrant, out.to_str().unwrap()).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn locate_and_extract_on_csv_line() {
        let dir = tempdir().unwrap();
        let input = write_csv(dir.path(), "ell.csv", "x,y\n0,0\n3,0\n3,4\n");
        let loc = locate(&input, 5.0, false).unwrap();
        assert_eq!((loc.x, loc.y), (3.0, 2.0));
        assert!((loc.dir_z - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!(locate(&input, 8.0, false).is_err());
        let ext = locate(&input, 8.0, true).unwrap();
        assert_eq!((ext.x, ext.y), (3.0, 5.0));

        let out = dir.path().join("sub").join("part.tsv");
        extract(&input, 1.0, 5.0, false, out.to_str().unwrap()).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "1\t0\n3\t0\n3\t2\n");
        assert!(dir.path().join("sub").join("part.provenance.json").exists());
    }
}
