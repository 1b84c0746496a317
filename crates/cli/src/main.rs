use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use locus::geom::Point;
use locus::random::{random_chain, ChainCfg, ReplayToken};
use locus::scene::Scene;
use locus::solver::SolveCfg;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod scene_file;

use scene_file::{NamedScene, SceneFile, SolveReport};

#[derive(Parser)]
#[command(name = "locus")]
#[command(about = "Compute geometric freedoms for constrained 2D points")]
struct Cmd {
    /// Log solver passes and anchors at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a scene file and print (or write) the freedoms as JSON
    Solve {
        #[arg(long)]
        input: PathBuf,
        /// Write the report here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Leave stalled constraints unresolved instead of anchoring objects
        #[arg(long)]
        no_self_anchor: bool,
        #[arg(long)]
        max_anchors: Option<usize>,
    },
    /// Check every constraint against the objects' current positions
    Validate {
        #[arg(long)]
        input: PathBuf,
    },
    /// Solve the built-in four-point linkage
    Demo,
    /// Write a reproducible random chain scene
    Random {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 8)]
        len: usize,
        #[arg(long, default_value_t = 0)]
        extra_links: usize,
        /// Omit the fixed constraint on the first point
        #[arg(long)]
        unanchored: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Solve {
            input,
            out,
            no_self_anchor,
            max_anchors,
        } => {
            let cfg = SolveCfg {
                self_anchor: !no_self_anchor,
                max_anchors,
            };
            solve(&input, out.as_deref(), cfg)
        }
        Action::Validate { input } => validate(&input),
        Action::Demo => demo(),
        Action::Random {
            seed,
            index,
            len,
            extra_links,
            unanchored,
            out,
        } => {
            let cfg = ChainCfg {
                len,
                extra_links,
                anchored: !unanchored,
                ..ChainCfg::default()
            };
            random(cfg, ReplayToken { seed, index }, &out)
        }
        Action::Report => report(),
    }
}

fn solve(input: &Path, out: Option<&Path>, cfg: SolveCfg) -> Result<()> {
    tracing::info!(input = %input.display(), ?cfg, "solve");
    let named = SceneFile::load(input)?.build()?;
    let sol = named
        .scene
        .solve(cfg)
        .with_context(|| format!("solving {}", input.display()))?;
    let report = SolveReport::new(&named, &sol);
    tracing::info!(
        resolved = report.freedoms.len(),
        anchored = report.anchored.len(),
        unresolved = report.unresolved.len(),
        "solved"
    );
    let body = serde_json::to_string_pretty(&report)?;
    match out {
        None => println!("{body}"),
        Some(out) => {
            if let Some(parent) = out.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(out, body).with_context(|| format!("writing {}", out.display()))?;
            let params = serde_json::json!({
                "input": input.to_string_lossy(),
                "self_anchor": cfg.self_anchor,
                "max_anchors": cfg.max_anchors,
            });
            provenance::write_sidecar(out, provenance::Payload::new("solve", params))?;
        }
    }
    Ok(())
}

fn validate(input: &Path) -> Result<()> {
    let file = SceneFile::load(input)?;
    let named = file.build()?;
    let results = named.scene.validate()?;
    let rows: Vec<_> = file
        .constraints
        .iter()
        .zip(results)
        .map(|(c, ok)| serde_json::json!({ "constraint": c, "satisfied": ok }))
        .collect();
    let failing = rows.iter().filter(|r| r["satisfied"] == false).count();
    tracing::info!(constraints = rows.len(), failing, "validate");
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

/// Four points: one pinned at the origin, a 10-unit arm, and a triangle hanging off it.
fn demo_scene() -> Result<NamedScene> {
    let mut scene = Scene::new();
    let v1 = scene.add_point(30.0, 30.0);
    let v2 = scene.add_point(50.0, 50.0);
    let v3 = scene.add_point(75.0, 75.0);
    let v4 = scene.add_point(50.0, 75.0);
    scene.fix(&v1, Point::new(0.0, 0.0))?;
    scene.distance(&v2, &v1, 10.0)?;
    scene.distance(&v3, &v2, 40.0)?;
    scene.distance(&v4, &v3, 20.0)?;
    scene.distance(&v4, &v2, 20.0)?;
    let names = [v1, v2, v3, v4]
        .iter()
        .zip(["v1", "v2", "v3", "v4"])
        .filter_map(|(p, n)| p.id.map(|id| (id, n.to_string())))
        .collect();
    Ok(NamedScene { scene, names })
}

fn demo() -> Result<()> {
    let named = demo_scene()?;
    let sol = named.scene.solve(SolveCfg::default())?;
    println!(
        "{}",
        serde_json::to_string_pretty(&SolveReport::new(&named, &sol))?
    );
    Ok(())
}

fn random(cfg: ChainCfg, tok: ReplayToken, out: &Path) -> Result<()> {
    tracing::info!(?cfg, seed = tok.seed, index = tok.index, out = %out.display(), "random");
    let scene = random_chain(cfg, tok)?;
    SceneFile::from_scene(&scene).save(out)?;
    let params = serde_json::json!({
        "seed": tok.seed,
        "index": tok.index,
        "len": cfg.len,
        "extra_links": cfg.extra_links,
        "anchored": cfg.anchored,
    });
    provenance::write_sidecar(out, provenance::Payload::new("random", params))?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::block("report", serde_json::json!({}), Vec::new());
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
