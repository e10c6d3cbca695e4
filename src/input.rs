//! Set input: JSON set collections, plain list files and precomputed
//! intersection files.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use anyhow::{Context, Result, anyhow, bail};

use indexmap::IndexMap;
use log::{debug, info};
use serde::Deserialize;

use crate::upset::IntersectionRecord;

/// Named sets in caller order. Index `i` of `names` labels index `i` of
/// `sets`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetCollection {
    names: Vec<String>,
    sets: Vec<Vec<String>>,
}

/// Accepted JSON layouts for a set collection.
#[derive(Deserialize)]
#[serde(untagged)]
enum SetsJson {
    /// `{"A": ["x", "y"], "B": [...]}`, key order preserved
    Map(IndexMap<String, Vec<String>>),
    /// `[{"name": "A", "elements": ["x", "y"]}, ...]`
    List(Vec<NamedSetJson>),
}

#[derive(Deserialize)]
struct NamedSetJson {
    name: String,
    elements: Vec<String>,
}

/// One record of a precomputed intersection file.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyRecordJson {
    set: String,
    names: Vec<String>,
    set_indices: String,
}

impl SetCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a set; names must be non-empty and unique.
    pub fn push(&mut self, name: impl Into<String>, elements: Vec<String>) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            bail!("Set name must not be empty");
        }
        if self.names.contains(&name) {
            bail!("Duplicate set name '{}'", name);
        }
        self.names.push(name);
        self.sets.push(elements);
        Ok(())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn sets(&self) -> &[Vec<String>] {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Load a JSON set collection file.
    pub fn from_json_file(path: &str) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("Failed to open sets file {}", path))?;
        Self::from_json_reader(BufReader::new(file))
            .with_context(|| format!("Failed to read sets file {}", path))
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let parsed: SetsJson = serde_json::from_reader(reader)
            .map_err(|e| anyhow!("Invalid set collection JSON: {}", e))?;

        let mut collection = SetCollection::new();
        match parsed {
            SetsJson::Map(map) => {
                for (name, elements) in map {
                    collection.push(name, elements)?;
                }
            }
            SetsJson::List(list) => {
                for set in list {
                    collection.push(set.name, set.elements)?;
                }
            }
        }
        collection.require_non_empty()?;
        info!("Loaded {} sets", collection.len());
        Ok(collection)
    }

    /// Load sets from `NAME=PATH` specs, one element per line in each file.
    pub fn from_list_specs<S: AsRef<str>>(specs: &[S]) -> Result<Self> {
        let mut collection = SetCollection::new();
        for spec in specs {
            let (name, path) = parse_list_spec(spec.as_ref())?;
            let file = File::open(path)
                .with_context(|| format!("Failed to open list file {} for set '{}'", path, name))?;
            let elements = read_list(BufReader::new(file))
                .with_context(|| format!("Failed to read list file {}", path))?;
            debug!("Set '{}': {} elements from {}", name, elements.len(), path);
            collection.push(name, elements)?;
        }
        collection.require_non_empty()?;
        info!("Loaded {} sets from list files", collection.len());
        Ok(collection)
    }

    fn require_non_empty(&self) -> Result<()> {
        if self.is_empty() {
            bail!("No sets given");
        }
        Ok(())
    }
}

/// Split `NAME=PATH`.
pub fn parse_list_spec(spec: &str) -> Result<(&str, &str)> {
    match spec.split_once('=') {
        Some((name, path)) if !name.trim().is_empty() && !path.trim().is_empty() => {
            Ok((name.trim(), path.trim()))
        }
        _ => bail!("Invalid set spec '{}': expected NAME=PATH", spec),
    }
}

/// One element per line; blank lines and `#` comments are skipped.
pub fn read_list<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut elements = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        elements.push(trimmed.to_string());
    }
    Ok(elements)
}

/// Load precomputed intersections (`[{set, names, setIndices}]`).
///
/// Records come back in file order.
pub fn read_intersections(path: &str) -> Result<Vec<IntersectionRecord<String>>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open intersections file {}", path))?;
    read_intersections_from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to read intersections file {}", path))
}

pub fn read_intersections_from_reader<R: Read>(
    reader: R,
) -> Result<Vec<IntersectionRecord<String>>> {
    let raw: Vec<LegacyRecordJson> = serde_json::from_reader(reader)
        .map_err(|e| anyhow!("Invalid intersections JSON: {}", e))?;

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(raw.len());
    for (i, item) in raw.into_iter().enumerate() {
        let record = IntersectionRecord::from_legacy(&item.set, item.names, &item.set_indices)
            .map_err(|e| anyhow!("Intersection {} ('{}'): {}", i, item.set, e))?;
        if !seen.insert(record.key.clone()) {
            bail!("Intersection {} repeats combination '{}'", i, item.set);
        }
        records.push(record);
    }
    Ok(records)
}
