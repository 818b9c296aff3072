use anyhow::Result;
use clap::{Parser, Subcommand};
use maxima2d::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points_io;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "2D maxima finder and point-cloud generator")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Read a point file and print its maximal points
    Find {
        /// Point file (`x y` per line), or `-` for stdin
        #[arg(long)]
        input: String,
        /// Write the maxima here as a point file instead of pretty-printing
        #[arg(long)]
        out: Option<String>,
        /// Emit a JSON array of [x, y] pairs
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Generate a reproducible random point cloud
    Gen {
        #[arg(long)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = -1_000)]
        coord_min: i64,
        #[arg(long, default_value_t = 1_000)]
        coord_max: i64,
        /// Output point file; stdout if omitted
        #[arg(long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Find { input, out, json } => find(input, out, json),
        Action::Gen {
            count,
            seed,
            coord_min,
            coord_max,
            out,
        } => gen(count, seed, coord_min, coord_max, out),
    }
}

fn find(input: String, out: Option<String>, json: bool) -> Result<()> {
    let points = points_io::read_points(&input)?;
    tracing::info!(input, n = points.len(), "find");
    let mut maxima = maximal_points(&points);
    // Present left to right; the solver itself promises no order.
    maxima.sort_unstable_by_key(|p| (p.x, p.y));
    tracing::info!(maxima = maxima.len(), "done");

    if json {
        let doc = points_io::points_json(&maxima);
        match out {
            Some(path) => std::fs::write(&path, serde_json::to_vec_pretty(&doc)?)?,
            None => println!("{}", serde_json::to_string_pretty(&doc)?),
        }
    } else {
        match out {
            Some(path) => points_io::write_points(path, &maxima)?,
            None => println!("{}", points_io::present(&maxima)),
        }
    }
    Ok(())
}

fn gen(count: usize, seed: u64, coord_min: i64, coord_max: i64, out: Option<String>) -> Result<()> {
    tracing::info!(count, seed, coord_min, coord_max, "gen");
    let cfg = CloudCfg {
        count,
        coord_min,
        coord_max,
    };
    let points = draw_point_cloud(cfg, ReplayToken { seed, index: 0 });
    match out {
        Some(path) => points_io::write_points(path, &points)?,
        None => print!("{}", points_io::points_text(&points)),
    }
    Ok(())
}
