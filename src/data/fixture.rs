// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plain-text trajectory tables for exchanging fixtures with external reference tools
//! (e.g. the MILCA `MIxnyn` program).
//!
//! One line per time step, whitespace separated: action components first, then
//! observation components. The format carries no timestamps; they are re-assigned as
//! `1..=N` on reading. Blank lines and lines starting with `#` are ignored.

use std::io::{BufRead, Write};

use crate::data::path::{SensationActionPair, SensorimotorPath};
use crate::error::{InfoError, Result};

/// Write `path` as a whitespace-separated table.
pub fn write_table<W: Write>(mut writer: W, path: &SensorimotorPath) -> Result<()> {
    for pair in path {
        let mut first = true;
        for v in pair.action.iter().chain(pair.observation.iter()) {
            if !first {
                write!(writer, " ")?;
            }
            write!(writer, "{v}")?;
            first = false;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a table written by [`write_table`] (or by an external tool using the same layout).
pub fn read_table<R: BufRead>(reader: R, action_dim: usize, observation_dim: usize) -> Result<SensorimotorPath> {
    let width = action_dim + observation_dim;
    if width == 0 {
        return Err(InfoError::InvalidParameter(
            "a table needs at least one action or observation column".to_string(),
        ));
    }

    let mut path = SensorimotorPath::new();
    let mut t: i64 = 0;
    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let mut row = Vec::with_capacity(width);
        for field in trimmed.split_whitespace() {
            let v: f64 = field.parse().map_err(|_| InfoError::Parse {
                line: line_idx + 1,
                message: format!("cannot parse '{field}' as a number"),
            })?;
            row.push(v);
        }
        if row.len() != width {
            return Err(InfoError::Parse {
                line: line_idx + 1,
                message: format!("expected {width} columns, found {}", row.len()),
            });
        }
        let observation = row.split_off(action_dim);
        t += 1;
        path.push(SensationActionPair::new(observation, row, t))?;
    }
    Ok(path)
}
