mod parse;
mod report;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use serde_json::json;
use stereonet::fit::{fit_cone, fit_girdle};
use stereonet::net::net_grid;
use stereonet::projection::{Projection, ProjectionKind};
use stereonet::sample::{sample_fisher, sample_uniform};
use stereonet::{CircleCfg, NetCfg, Vector, VectorSet};
use tracing_subscriber::fmt::SubscriberBuilder;

use report::{with_provenance, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Stereonet geometry: attitudes, fits, samples and projections as JSON")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    EqualAngle,
    EqualArea,
    Orthographic,
}

impl From<Kind> for ProjectionKind {
    fn from(k: Kind) -> Self {
        match k {
            Kind::EqualAngle => ProjectionKind::EqualAngle,
            Kind::EqualArea => ProjectionKind::EqualArea,
            Kind::Orthographic => ProjectionKind::Orthographic,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Trend/plunge of direction cosines given as x,y,z
    Attitude {
        #[arg(long = "dcos", required = true, allow_hyphen_values = true)]
        dcos: Vec<String>,
    },
    /// Fit a girdle (default) or a small circle to lines and plane poles
    Fit {
        #[arg(long = "line")]
        lines: Vec<String>,
        #[arg(long = "plane")]
        planes: Vec<String>,
        #[arg(long)]
        small_circle: bool,
    },
    /// Sample von Mises-Fisher (default) or uniform directions
    Sample {
        #[arg(long, default_value_t = 0.0)]
        trend: f64,
        #[arg(long, default_value_t = 90.0)]
        plunge: f64,
        #[arg(long, default_value_t = 20.0)]
        kappa: f64,
        #[arg(long, default_value_t = 100)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        uniform: bool,
    },
    /// Project lines and plane poles as points, planes as great circles
    Project {
        #[arg(long, value_enum, default_value_t = Kind::EqualArea)]
        kind: Kind,
        /// azimuth/plunge/rake of the oblique frame
        #[arg(long, allow_hyphen_values = true)]
        rotation: Option<String>,
        #[arg(long = "line")]
        lines: Vec<String>,
        #[arg(long = "plane")]
        planes: Vec<String>,
    },
    /// Projected reference net polylines
    Net {
        #[arg(long, value_enum, default_value_t = Kind::EqualArea)]
        kind: Kind,
        #[arg(long, allow_hyphen_values = true)]
        rotation: Option<String>,
        #[arg(long, default_value_t = 10.0)]
        spacing: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize)]
struct AttitudeRow {
    trend: f64,
    plunge: f64,
}

#[derive(Serialize)]
struct FitResult {
    dcos: [f64; 3],
    trend: f64,
    plunge: f64,
    /// Degrees; only for small-circle fits.
    #[serde(skip_serializing_if = "Option::is_none")]
    half_angle: Option<f64>,
}

#[derive(Serialize)]
struct Projected {
    points: Vec<[f64; 2]>,
    great_circles: Vec<Vec<[f64; 2]>>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let doc = match cmd.action {
        Action::Attitude { dcos } => attitude(dcos)?,
        Action::Fit {
            lines,
            planes,
            small_circle,
        } => fit(lines, planes, small_circle)?,
        Action::Sample {
            trend,
            plunge,
            kappa,
            n,
            seed,
            uniform,
        } => sample(trend, plunge, kappa, n, seed, uniform)?,
        Action::Project {
            kind,
            rotation,
            lines,
            planes,
        } => project(kind, rotation, lines, planes)?,
        Action::Net {
            kind,
            rotation,
            spacing,
        } => net(kind, rotation, spacing)?,
        Action::Report => report_only(),
    };
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn rows(set: &VectorSet) -> Vec<AttitudeRow> {
    set.attitude()
        .into_iter()
        .map(|(trend, plunge)| AttitudeRow { trend, plunge })
        .collect()
}

fn collect_data(lines: &[String], planes: &[String]) -> Result<VectorSet> {
    let mut set = VectorSet::default();
    for raw in lines {
        set.push(parse::line(raw)?);
    }
    for raw in planes {
        set.push(parse::plane(raw)?);
    }
    Ok(set)
}

fn projection(kind: Kind, rotation: Option<&str>) -> Result<Projection> {
    let rotation = rotation.map(parse::rotation).transpose()?;
    Ok(Projection::new(kind.into(), rotation))
}

fn attitude(dcos: Vec<String>) -> Result<serde_json::Value> {
    tracing::info!(count = dcos.len(), "attitude");
    let set = dcos
        .iter()
        .map(|raw| parse::dcos(raw))
        .collect::<Result<VectorSet>>()?;
    Ok(with_provenance(
        serde_json::to_value(rows(&set))?,
        Payload::new(json!({ "dcos": dcos })),
    ))
}

fn fit(lines: Vec<String>, planes: Vec<String>, small_circle: bool) -> Result<serde_json::Value> {
    tracing::info!(lines = lines.len(), planes = planes.len(), small_circle, "fit");
    let data = collect_data(&lines, &planes)?;
    if data.len() < 3 {
        bail!("need at least 3 measurements for a meaningful fit, got {}", data.len());
    }
    let (axis, half_angle) = if small_circle {
        let cone = fit_cone(&data);
        (cone.axis, Some(cone.half_angle.to_degrees()))
    } else {
        (fit_girdle(&data), None)
    };
    let (trend, plunge) = axis.attitude();
    tracing::debug!(trend, plunge, ?half_angle, "fitted axis");
    let result = FitResult {
        dcos: [axis.x(), axis.y(), axis.z()],
        trend,
        plunge,
        half_angle,
    };
    Ok(with_provenance(
        serde_json::to_value(result)?,
        Payload::new(json!({ "lines": lines, "planes": planes, "small_circle": small_circle })),
    ))
}

fn sample(
    trend: f64,
    plunge: f64,
    kappa: f64,
    n: usize,
    seed: u64,
    uniform: bool,
) -> Result<serde_json::Value> {
    tracing::info!(trend, plunge, kappa, n, seed, uniform, "sample");
    let mut rng = StdRng::seed_from_u64(seed);
    let set = if uniform {
        sample_uniform(&mut rng, n)
    } else {
        let mean = Vector::try_from_attitude(trend, plunge)?;
        sample_fisher(&mut rng, mean, kappa, n)?
    };
    Ok(with_provenance(
        serde_json::to_value(rows(&set))?,
        Payload::new(json!({
            "trend": trend, "plunge": plunge, "kappa": kappa,
            "n": n, "seed": seed, "uniform": uniform
        })),
    ))
}

fn project(
    kind: Kind,
    rotation: Option<String>,
    lines: Vec<String>,
    planes: Vec<String>,
) -> Result<serde_json::Value> {
    tracing::info!(?kind, ?rotation, lines = lines.len(), planes = planes.len(), "project");
    let proj = projection(kind, rotation.as_deref())?;
    let points = collect_data(&lines, &planes)?;
    let poles = collect_data(&[], &planes)?;
    let cfg = CircleCfg::default();
    let circles: Vec<Vec<Vector>> = poles.great_circles(cfg.step).collect();
    let great_circles = proj.project_lines(&circles, &cfg);
    tracing::debug!(segments = great_circles.len(), "projected great circles");
    let result = Projected {
        points: proj.project_points(&points),
        great_circles,
    };
    Ok(with_provenance(
        serde_json::to_value(result)?,
        Payload::new(json!({
            "kind": format!("{kind:?}"), "rotation": rotation,
            "lines": lines, "planes": planes
        })),
    ))
}

fn net(kind: Kind, rotation: Option<String>, spacing: f64) -> Result<serde_json::Value> {
    tracing::info!(?kind, ?rotation, spacing, "net");
    if !(spacing.is_finite() && spacing > 0.0) {
        bail!("spacing must be a positive number of degrees, got {spacing}");
    }
    let proj = projection(kind, rotation.as_deref())?;
    let grid = net_grid(&NetCfg {
        gc_spacing: spacing,
        sc_spacing: spacing,
        ..NetCfg::default()
    });
    let circles: Vec<Vec<Vector>> = grid.circles().cloned().collect();
    let polylines = proj.project_lines(&circles, &CircleCfg::default());
    tracing::debug!(circles = circles.len(), polylines = polylines.len(), "net");
    let cardinals: Vec<_> = proj
        .cardinal_points()
        .into_iter()
        .map(|c| json!({ "label": c.label.to_string(), "position": c.position }))
        .collect();
    Ok(with_provenance(
        json!({ "polylines": polylines, "cardinal_points": cardinals }),
        Payload::new(json!({
            "kind": format!("{kind:?}"), "rotation": rotation, "spacing": spacing
        })),
    ))
}

fn report_only() -> serde_json::Value {
    with_provenance(json!(null), Payload::new(json!({})))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sample_is_reproducible() {
        let a = sample(30.0, 40.0, 50.0, 5, 7, false).unwrap();
        let b = sample(30.0, 40.0, 50.0, 5, 7, false).unwrap();
        assert_eq!(a["result"], b["result"]);
        assert_eq!(a["result"].as_array().unwrap().len(), 5);
        let uniform = sample(0.0, 90.0, 20.0, 3, 1, true).unwrap();
        assert_eq!(uniform["result"].as_array().unwrap().len(), 3);
        assert_eq!(uniform["params"]["seed"], 1);
    }

    #[test]
    fn sample_rejects_bad_params() {
        assert!(sample(0.0, 90.0, -1.0, 3, 0, false).is_err());
        assert!(sample(0.0, 120.0, 10.0, 3, 0, false).is_err());
    }
}
