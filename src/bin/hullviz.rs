//! Terminal front end for the hull visualizer.
//!
//! Collects points from the command line or a seeded random source, then
//! computes the hull at once, prints every trace step, plays the trace back
//! on a timer, or writes the trace as JSON.

use std::thread;
use std::time::Duration;

use clap::{ArgGroup, Parser};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use hullviz::algorithms::Algorithm;
use hullviz::data::Point;
use hullviz::render;
use hullviz::session::{Session, SessionConfig};
use hullviz::Error;

#[derive(Parser)]
#[command(name = "hullviz")]
#[command(about = "Step through convex hull algorithms in the terminal", long_about = None)]
#[command(group(ArgGroup::new("mode").args(["instant", "steps", "play", "json"])))]
struct Cli {
  /// monotone-chain or graham-scan
  #[arg(short, long, default_value = "monotone-chain")]
  algorithm: Algorithm,

  /// Point as "x,y". May be repeated.
  #[arg(short, long = "point", allow_hyphen_values = true)]
  points: Vec<Point>,

  /// Number of random points to add
  #[arg(short, long, default_value = "0")]
  count: usize,

  /// Width of the area random points are drawn from
  #[arg(long, default_value = "640")]
  width: u32,

  /// Height of the area random points are drawn from
  #[arg(long, default_value = "480")]
  height: u32,

  /// Seed for random points; picked at random when missing
  #[arg(long)]
  seed: Option<u64>,

  /// Delay between steps during playback, in milliseconds
  #[arg(long, default_value = "500")]
  speed_ms: u64,

  /// Compute the hull in one go (default)
  #[arg(long)]
  instant: bool,

  /// Print every step of the trace
  #[arg(long)]
  steps: bool,

  /// Play the trace back with a delay between steps
  #[arg(long)]
  play: bool,

  /// Write the trace as JSON
  #[arg(long)]
  json: bool,

  /// Width of the drawing in characters
  #[arg(long, default_value = "60")]
  cols: usize,

  /// Height of the drawing in characters
  #[arg(long, default_value = "20")]
  rows: usize,
}

fn main() -> Result<(), Error> {
  env_logger::init();
  let cli = Cli::parse();

  let mut session = Session::with_config(SessionConfig {
    algorithm: cli.algorithm,
    speed: Duration::from_millis(cli.speed_ms),
  });
  session.add_points(cli.points.iter().copied());
  if cli.count > 0 {
    let mut rng = match cli.seed {
      Some(seed) => SmallRng::seed_from_u64(seed),
      None => SmallRng::from_entropy(),
    };
    session.add_random_points(cli.count, cli.width, cli.height, &mut rng);
  }
  log::debug!("{:?}", session);

  if cli.json {
    session.build_trace();
    if let Some(trace) = session.trace() {
      let json =
        serde_json::to_string_pretty(trace).map_err(|err| Error::Serialization(err.to_string()))?;
      println!("{}", json);
    }
  } else if cli.steps {
    session.build_trace();
    for _ in 0..session.total_steps() {
      session.step_forward();
      println!("{}", render::frame(&session, cli.cols, cli.rows));
    }
  } else if cli.play {
    session.play();
    print!("{}", render::frame(&session, cli.cols, cli.rows));
    while session.is_playing() {
      thread::sleep(session.speed());
      if session.advance() {
        // Clear the screen and home the cursor.
        print!("\x1b[2J\x1b[H");
        print!("{}", render::frame(&session, cli.cols, cli.rows));
      }
    }
  } else {
    session.compute_instant();
    print!("{}", render::frame(&session, cli.cols, cli.rows));
    if session.is_finished() {
      let hull: Vec<String> = session.hull().iter().map(Point::to_string).collect();
      println!("Hull: {}", hull.join(" "));
    }
  }
  Ok(())
}
