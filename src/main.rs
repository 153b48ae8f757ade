use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use kmeans3d::{ClusterEngine, Point3, ViewTransform};

/// One glyph per cluster, mirroring the six-color palette of the canvas
/// rendering this replaces (k is capped at 6)
const GLYPHS: [char; 6] = ['o', 'x', '+', '*', '%', '@'];

/// Logical canvas the projection targets; the ASCII grid is scaled down
/// from it
const CANVAS: f64 = 600.0;

const GRID_W: usize = 72;
const GRID_H: usize = 36;

#[derive(Parser)]
#[command(name = "kmeans3d")]
#[command(about = "Step through K-Means clustering on random 3D points")]
struct Args {
    /// Number of data points to sample
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    points: u32,

    /// Number of clusters
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(2..=6))]
    k: u32,

    /// PRNG seed for point and centroid sampling
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop after this many assign/update rounds even without convergence
    #[arg(long, default_value_t = 50)]
    max_steps: u32,

    /// Initial view yaw in radians
    #[arg(long, default_value_t = 0.6)]
    yaw: f64,

    /// Initial view pitch in radians
    #[arg(long, default_value_t = 0.35)]
    pitch: f64,

    /// Emit the final state as JSON instead of the ASCII view
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    points: &'a [Point3],
    centroids: &'a [Point3],
    assignments: &'a [Option<usize>],
    steps: u32,
    converged: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut engine = ClusterEngine::new(args.points as usize, args.k as usize, args.seed);
    println!(
        "=== kmeans3d: {} points, k = {}, seed = {} ===\n",
        engine.len(),
        engine.k(),
        args.seed
    );

    let mut steps = 0;
    let mut converged = false;
    while steps < args.max_steps {
        steps += 1;
        engine.assign_step()?;
        let changed = engine.update_step()?;
        println!(
            "step {:>2}: assigned {} points, centroids {}",
            steps,
            engine.len(),
            if changed { "moved" } else { "stable" }
        );
        if !changed {
            converged = true;
            break;
        }
    }

    if converged {
        println!("\n✓ Converged after {} steps\n", steps);
    } else {
        println!("\n✗ No convergence within {} steps\n", args.max_steps);
    }

    if args.json {
        let snapshot = Snapshot {
            points: engine.points(),
            centroids: engine.centroids(),
            assignments: engine.assignments(),
            steps,
            converged,
        };
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let mut view = ViewTransform::new(CANVAS / 2.0, CANVAS / 2.0);
    view.adjust_rotation(args.yaw, args.pitch);
    render(&engine, &view);

    for j in 0..engine.k() {
        let members = engine
            .assignments()
            .iter()
            .filter(|a| **a == Some(j))
            .count();
        println!(
            "  cluster {} ({}): {} points, centroid ({:+.3}, {:+.3}, {:+.3})",
            j,
            GLYPHS[j],
            members,
            engine.centroids()[j].x,
            engine.centroids()[j].y,
            engine.centroids()[j].z
        );
    }

    Ok(())
}

/// Draw the projected state as an ASCII grid: lowercase glyphs for points,
/// digits for centroids (drawn last so they stay visible)
fn render(engine: &ClusterEngine, view: &ViewTransform) {
    let mut grid = [[' '; GRID_W]; GRID_H];

    for (p, assignment) in engine.points().iter().zip(engine.assignments()) {
        let glyph = match assignment {
            Some(j) => GLYPHS[*j],
            None => '.',
        };
        plot(&mut grid, view, p, glyph);
    }

    for (j, c) in engine.centroids().iter().enumerate() {
        let digit = char::from_digit(j as u32, 10).unwrap_or('?');
        plot(&mut grid, view, c, digit);
    }

    for row in &grid {
        println!("{}", row.iter().collect::<String>());
    }
    println!();
}

fn plot(grid: &mut [[char; GRID_W]; GRID_H], view: &ViewTransform, p: &Point3, glyph: char) {
    let (sx, sy) = view.project(p);
    let col = (sx / CANVAS * GRID_W as f64) as isize;
    let row = (sy / CANVAS * GRID_H as f64) as isize;
    if (0..GRID_W as isize).contains(&col) && (0..GRID_H as isize).contains(&row) {
        grid[row as usize][col as usize] = glyph;
    }
}
