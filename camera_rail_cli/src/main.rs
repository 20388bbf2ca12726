use camera_rail::{
    follow::{CameraFollower, FrameStats},
    geometry::Point3,
    io::{parse_waypoints_csv, read_to_string, read_waypoints_csv, write_config_json, write_poses_csv},
    scroll_progress,
    spline::{evaluate, tangent},
    CameraRail, RailConfig, RailError,
};
use clap::{Parser, Subcommand};
use std::fs::File;

fn init_logging() {
    if let Ok(path) = std::env::var("CAMERA_RAIL_LOG") {
        match File::create(&path) {
            Ok(file) => {
                env_logger::Builder::from_default_env()
                    .target(env_logger::Target::Pipe(Box::new(file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Failed to create log file {}: {}", path, e);
                env_logger::Builder::from_default_env().init();
            }
        }
    } else {
        env_logger::Builder::from_default_env().init();
    }
}

fn print_point(label: &str, p: Point3) {
    println!("{}: {:.3},{:.3},{:.3}", label, p.x, p.y, p.z);
}

fn fail(message: String) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}

fn load_config(path: Option<&str>) -> RailConfig {
    match path {
        Some(path) => match RailConfig::load(path) {
            Ok(config) => config,
            Err(e) => fail(format!("Error reading {}: {}", path, e)),
        },
        None => RailConfig::default(),
    }
}

fn build_rail(config: &RailConfig, waypoints: Option<&str>) -> CameraRail {
    let rail = match waypoints {
        Some(path) => match read_waypoints_csv(path) {
            Ok(pts) => CameraRail::new(pts),
            Err(e) => fail(format!("Error reading {}: {}", path, e)),
        },
        None => config.rail(),
    };
    rail.unwrap_or_else(|e: RailError| fail(format!("Error: {}", e)))
}

fn read_controls(path: &str) -> std::io::Result<[Point3; 4]> {
    let contents = read_to_string(path)?;
    let pts = parse_waypoints_csv(&contents)?;
    pts.try_into().map_err(|pts: Vec<Point3>| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("expected 4 control points, found {}", pts.len()),
        )
    })
}

/// Command line driver for the camera rail engine.
#[derive(Parser)]
#[command(name = "camera_rail_cli", version)]
struct Cli {
    /// JSON rail configuration (waypoints and damping)
    #[arg(long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the camera position and look-at target at progress t.
    Pose {
        t: f64,
        /// CSV file of x,y,z waypoints overriding the configured path.
        #[arg(long)]
        waypoints: Option<String>,
    },
    /// Write evenly spaced poses along the rail to a CSV file.
    Sample {
        steps: usize,
        output: String,
        #[arg(long)]
        waypoints: Option<String>,
    },
    /// Evaluate one spline segment from a CSV file of four control points.
    Evaluate {
        controls: String,
        t: f64,
        /// Print the unit tangent instead of the curve point.
        #[arg(long)]
        tangent: bool,
    },
    /// Simulate the damped camera chasing the pose at progress t.
    Follow {
        t: f64,
        frames: usize,
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f64,
        #[arg(long)]
        damping: Option<f64>,
        #[arg(long)]
        waypoints: Option<String>,
    },
    /// Convert a document scroll offset to rail progress.
    Progress {
        scroll_top: f64,
        scroll_height: f64,
        viewport_height: f64,
    },
    /// Write a default rail configuration file.
    InitConfig { output: String },
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());
    match cli.command {
        Commands::Pose { t, waypoints } => {
            let rail = build_rail(&config, waypoints.as_deref());
            let pose = rail.pose(t);
            print_point("position", pose.position);
            print_point("target", pose.target);
        }
        Commands::Sample {
            steps,
            output,
            waypoints,
        } => {
            let rail = build_rail(&config, waypoints.as_deref());
            let poses = rail.sample(steps);
            match write_poses_csv(&output, &poses) {
                Ok(()) => println!("Wrote {} poses to {}", poses.len(), output),
                Err(e) => eprintln!("Error writing {}: {}", output, e),
            }
        }
        Commands::Evaluate {
            controls,
            t,
            tangent: want_tangent,
        } => match read_controls(&controls) {
            Ok([p0, p1, p2, p3]) => {
                if want_tangent {
                    print_point("tangent", tangent(p0, p1, p2, p3, t));
                } else {
                    print_point("point", evaluate(p0, p1, p2, p3, t));
                }
            }
            Err(e) => eprintln!("Error reading {}: {}", controls, e),
        },
        Commands::Follow {
            t,
            frames,
            dt,
            damping,
            waypoints,
        } => {
            let rail = build_rail(&config, waypoints.as_deref());
            let goal = rail.pose(t);
            let mut follower =
                CameraFollower::new(rail.pose(0.0), damping.unwrap_or(config.damping));
            let mut stats = FrameStats::default();
            for _ in 0..frames {
                follower.update(&goal, dt);
                stats.record(dt);
            }
            log::debug!("followed rail for {} frames of {}s", frames, dt);
            print_point("camera", follower.position);
            print_point("look-at", follower.look_at);
        }
        Commands::Progress {
            scroll_top,
            scroll_height,
            viewport_height,
        } => {
            let p = scroll_progress(scroll_top, scroll_height, viewport_height);
            println!("Progress: {:.3}", p);
        }
        Commands::InitConfig { output } => match write_config_json(&output, &config) {
            Ok(()) => println!("Wrote config to {}", output),
            Err(e) => eprintln!("Error writing {}: {}", output, e),
        },
    }
}
