//! File input and output helpers for rail data.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};

use crate::geometry::Point3;
use crate::rail::Pose;

pub mod project;

pub use project::{read_config_json, write_config_json, RailConfig};

/// Reads a file to string.
pub fn read_to_string(path: &str) -> io::Result<String> {
    let mut buffer = String::new();
    File::open(path)?.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Writes a string to a file, replacing any existing contents.
pub fn write_string(path: &str, contents: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())
}

/// Reads a file into a vector of lines.
pub fn read_lines(path: &str) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    BufReader::new(file).lines().collect()
}

fn parse_field(value: &str, line: usize) -> io::Result<f64> {
    let v = value.trim().parse::<f64>().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("line {}: {}", line, e),
        )
    })?;
    if !v.is_finite() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("line {}: coordinate must be finite, got {}", line, value.trim()),
        ));
    }
    Ok(v)
}

/// Parses `x,y,z` lines into waypoints. Blank lines are skipped.
pub fn parse_waypoints_csv(contents: &str) -> io::Result<Vec<Point3>> {
    let mut pts = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() != 3 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: expected x,y,z", idx + 1),
            ));
        }
        let x = parse_field(parts[0], idx + 1)?;
        let y = parse_field(parts[1], idx + 1)?;
        let z = parse_field(parts[2], idx + 1)?;
        pts.push(Point3::new(x, y, z));
    }
    Ok(pts)
}

/// Reads a CSV file of `x,y,z` waypoints.
pub fn read_waypoints_csv(path: &str) -> io::Result<Vec<Point3>> {
    let lines = read_lines(path)?;
    parse_waypoints_csv(&lines.join("\n"))
}

/// Writes waypoints as `x,y,z` lines.
pub fn write_waypoints_csv(path: &str, points: &[Point3]) -> io::Result<()> {
    let mut file = File::create(path)?;
    for p in points {
        writeln!(file, "{},{},{}", p.x, p.y, p.z)?;
    }
    Ok(())
}

/// Writes poses as `px,py,pz,tx,ty,tz` lines.
pub fn write_poses_csv(path: &str, poses: &[Pose]) -> io::Result<()> {
    let mut file = File::create(path)?;
    for pose in poses {
        let p = pose.position;
        let t = pose.target;
        writeln!(file, "{},{},{},{},{},{}", p.x, p.y, p.z, t.x, t.y, t.z)?;
    }
    Ok(())
}
