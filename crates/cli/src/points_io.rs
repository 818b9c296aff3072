//! Reading, writing, and presenting point files.
//!
//! Text format: one point per line as `x y` (whitespace separated, `#`
//! starts a comment, blank lines skipped). The presenter prints
//! `(x, y) (x, y) ...`; JSON output is an array of `[x, y]` pairs.

use anyhow::{bail, Context, Result};
use maxima2d::Point;
use serde_json::{json, Value};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Parse the text point format.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(xs), Some(ys), None) = (fields.next(), fields.next(), fields.next()) else {
            bail!("line {}: expected `x y`, got {raw:?}", lineno + 1);
        };
        let x: i64 = xs
            .parse()
            .with_context(|| format!("line {}: bad x {xs:?}", lineno + 1))?;
        let y: i64 = ys
            .parse()
            .with_context(|| format!("line {}: bad y {ys:?}", lineno + 1))?;
        points.push(Point::new(x, y));
    }
    Ok(points)
}

/// Read points from a file path, or from stdin when `path` is `-`.
pub fn read_points(path: &str) -> Result<Vec<Point>> {
    let text = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {path}"))?
    };
    parse_points(&text)
}

/// Serialize points back into the text format.
pub fn points_text(points: &[Point]) -> String {
    let mut out = String::new();
    for p in points {
        out.push_str(&format!("{} {}\n", p.x, p.y));
    }
    out
}

/// Write points in the text format, creating parent directories as needed.
pub fn write_points<P: AsRef<Path>>(path: P, points: &[Point]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(path, points_text(points)).with_context(|| format!("writing {}", path.display()))
}

/// Human-readable presenter: `(x, y) (x, y) ...`.
pub fn present(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("({}, {})", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// JSON presenter: `[[x, y], ...]`.
pub fn points_json(points: &[Point]) -> Value {
    json!(points.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_skips_comments_and_blanks() {
        let text = "# header\n1 8\n\n  2 5  # trailing\n-3 -9\n";
        let pts = parse_points(text).unwrap();
        assert_eq!(pts, vec![Point::new(1, 8), Point::new(2, 5), Point::new(-3, -9)]);
    }

    #[test]
    fn parse_rejects_malformed_lines() {
        assert!(parse_points("1\n").is_err());
        assert!(parse_points("1 2 3\n").is_err());
        assert!(parse_points("a b\n").is_err());
    }

    #[test]
    fn text_round_trip_through_a_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts/cloud.txt");
        let pts = vec![Point::new(i64::MIN, 0), Point::new(7, i64::MAX)];
        write_points(&path, &pts).unwrap();
        let back = read_points(path.to_str().unwrap()).unwrap();
        assert_eq!(back, pts);
    }

    #[test]
    fn presenters() {
        let pts = vec![Point::new(3, 9), Point::new(8, 4)];
        assert_eq!(present(&pts), "(3, 9) (8, 4)");
        assert_eq!(points_json(&pts).to_string(), "[[3,9],[8,4]]");
    }
}
