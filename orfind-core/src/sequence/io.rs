use std::fs::File;
use std::io::Read;
use std::path::Path;

use bio::io::fasta;

use crate::types::OrfindError;

/// One record of a FASTA file.
///
/// Bases are upper-cased on read; validation against the DNA alphabet
/// happens when the record is turned into a [`super::Sequence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub description: Option<String>,
    pub bases: String,
}

/// Read every record from a FASTA stream using rust-bio
pub fn read_fasta<R: Read>(reader: R) -> Result<Vec<FastaRecord>, OrfindError> {
    let reader = fasta::Reader::new(reader);
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| OrfindError::ParseError(e.to_string()))?;
        let bases = String::from_utf8(record.seq().to_ascii_uppercase())
            .map_err(|e| OrfindError::ParseError(format!("{}: {}", record.id(), e)))?;
        records.push(FastaRecord {
            id: record.id().to_string(),
            description: record.desc().map(String::from),
            bases,
        });
    }

    Ok(records)
}

/// Read every record from a FASTA file
pub fn read_fasta_file(path: impl AsRef<Path>) -> Result<Vec<FastaRecord>, OrfindError> {
    let file = File::open(path)?;
    read_fasta(file)
}
