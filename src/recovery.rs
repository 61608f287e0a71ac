//! Whole-network snapshots as JSON lines.
//!
//! The first line is a header record; every following line holds one synset,
//! in network order.

use std::{
    borrow::Cow,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    errors::WordNetError,
    graph::{Synset, WordNet},
};

pub const DUMP_FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum DumpRecord<'a> {
    Header {
        version: u32,
        incremental_id: Option<String>,
    },
    Synset(Cow<'a, Synset>),
}

pub fn dump_network_to_path<P: AsRef<Path>>(
    network: &WordNet,
    path: P,
) -> Result<(), WordNetError> {
    let file =
        File::create(path.as_ref()).map_err(|e| WordNetError::invalid_input(e.to_string()))?;
    let mut writer = BufWriter::new(file);
    dump_network_to_writer(network, &mut writer)?;
    writer
        .flush()
        .map_err(|e| WordNetError::invalid_input(e.to_string()))
}

pub fn dump_network_to_writer<W: Write>(
    network: &WordNet,
    mut writer: W,
) -> Result<(), WordNetError> {
    write_record(
        &mut writer,
        &DumpRecord::Header {
            version: DUMP_FORMAT_VERSION,
            incremental_id: network.last_incremental_id().map(str::to_string),
        },
    )?;
    for synset in network.synsets() {
        write_record(&mut writer, &DumpRecord::Synset(Cow::Borrowed(synset)))?;
    }
    debug!(synsets = network.len(), "dumped network");
    Ok(())
}

pub fn load_network_from_path<P: AsRef<Path>>(path: P) -> Result<WordNet, WordNetError> {
    let file =
        File::open(path.as_ref()).map_err(|e| WordNetError::invalid_input(e.to_string()))?;
    load_network_from_reader(BufReader::new(file))
}

pub fn load_network_from_reader<R: BufRead>(reader: R) -> Result<WordNet, WordNetError> {
    let mut network = WordNet::new();
    let mut incremental_id = None;
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| WordNetError::invalid_input(e.to_string()))?;
        if line.trim().is_empty() {
            continue;
        }
        let record: DumpRecord = serde_json::from_str(&line).map_err(|e| {
            WordNetError::invalid_input(format!("line {}: {e}", line_no + 1))
        })?;
        match record {
            DumpRecord::Header {
                version,
                incremental_id: last,
            } => {
                if version != DUMP_FORMAT_VERSION {
                    return Err(WordNetError::invalid_input(format!(
                        "unsupported dump version {version}"
                    )));
                }
                incremental_id = last;
            }
            DumpRecord::Synset(synset) => {
                network.add_synset(synset.into_owned(), true);
            }
        }
    }
    network.restore_incremental_id(incremental_id);
    debug!(synsets = network.len(), "loaded network");
    Ok(network)
}

fn write_record<W: Write>(writer: &mut W, record: &DumpRecord<'_>) -> Result<(), WordNetError> {
    serde_json::to_writer(&mut *writer, record)
        .map_err(|e| WordNetError::invalid_input(e.to_string()))?;
    writer
        .write_all(b"\n")
        .map_err(|e| WordNetError::invalid_input(e.to_string()))
}
