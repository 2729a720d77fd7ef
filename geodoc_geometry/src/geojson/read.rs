use super::{parse_feature, parse_geojson_value};
use crate::{GeoFeature, GeoJson};
use anyhow::{Context, Result, anyhow};
use geodoc_core::{
	io::read_all,
	json::{decode, decode_slice},
};
use log::debug;
use std::{
	io::{BufRead, Read},
	path::Path,
};

pub fn read_geojson(mut reader: impl Read) -> Result<GeoJson> {
	let mut buffer = String::new();
	reader.read_to_string(&mut buffer).context("Failed to read GeoJSON")?;
	parse_geojson_value(&decode(&buffer)?)
}

pub fn read_geojson_file(path: &Path) -> Result<GeoJson> {
	let bytes = read_all(path)?;
	parse_geojson_value(&decode_slice(&bytes)?).with_context(|| format!("Failed to parse {path:?}"))
}

fn process_line(line: std::io::Result<String>, index: usize) -> Result<Option<GeoFeature>> {
	match line {
		Ok(line) if line.trim().is_empty() => Ok(None),
		Ok(line) => decode(&line)
			.and_then(|value| parse_feature(&value))
			.map(Some)
			.map_err(|e| anyhow!("line {}: {e:#}", index + 1)),
		Err(e) => Err(anyhow!("line {}: {e}", index + 1)),
	}
}

/// Reads newline-delimited GeoJSON: one feature per line, blank lines skipped.
///
/// Errors are yielded per line and do not stop the iteration.
pub fn read_ndgeojson_iter(reader: impl BufRead) -> impl Iterator<Item = Result<GeoFeature>> {
	reader
		.lines()
		.enumerate()
		.inspect(|(index, _)| {
			if (index + 1) % 10_000 == 0 {
				debug!("read {} lines of newline-delimited GeoJSON", index + 1);
			}
		})
		.filter_map(|(index, line)| process_line(line, index).transpose())
}
