// Copyright (C) 2014 Samuel de Sousa, 2025 Jeremy J. Carroll. See LICENSE for details.

//! Point-list input and text output.
//!
//! A point list is plain text with one point per line and comma separated
//! coordinates. Only the first two coordinates are used.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::errors::{Error, Result};
use crate::geometry::Point;

/// Parse a point list. Blank lines are skipped.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
        if tokens.len() < 2 {
            return Err(Error::MalformedLine {
                line: line_number,
                expected: 2,
                found: tokens.len(),
            });
        }
        let coordinate = |token: &str| {
            token.parse::<f32>().map_err(|_| Error::InvalidNumber {
                line: line_number,
                token: token.to_string(),
            })
        };
        points.push(Point::new(coordinate(tokens[0])?, coordinate(tokens[1])?));
    }
    Ok(points)
}

/// Read a point list from `path`.
///
/// A missing file yields an empty list rather than an error.
pub fn read_points(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "Point list not found, using no points");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(Error::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let points = parse_points(&text)?;
    debug!(path = %path.display(), points = points.len(), "Point list read");
    Ok(points)
}

/// Write `text` to `path`, replacing any existing file.
pub fn write_text(path: impl AsRef<Path>, text: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, text).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
