//! Reading protein sequences from FASTA files.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

/// The residues accepted in an input sequence, in either case.
const AMINO_ACIDS: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";

/// Reads named protein sequences from a FASTA file, or from every `.fasta`
/// file in a directory, in order of file name.
///
/// The name of a record is its id followed by its description, if any.
/// When two records share a name, the later residues replace the earlier
/// ones and the sequence keeps its first position.
///
/// # Errors
///
/// * If the path does not exist.
/// * If a file is not a `.fasta` or `.fa` file, in any case.
/// * If a file cannot be read as a FASTA file.
/// * If any record has an empty name.
/// * If any record contains a residue other than the 20 amino acids.
pub fn read(path: &Path) -> Result<Vec<(String, String)>, String> {
    let files = fasta_files(path)?;

    let mut sequences: Vec<(String, String)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for file in files {
        ftlog::info!("Reading FASTA file from {file:?}.");

        let records = bio::io::fasta::Reader::from_file(&file)
            .map_err(|e| format!("Failed to open {file:?}: {e}"))?
            .records();

        for record in records {
            let record = record.map_err(|e| format!("Failed to read a record from {file:?}: {e}"))?;

            let name = match record.desc() {
                Some(desc) if !desc.is_empty() => format!("{} {desc}", record.id()),
                _ => record.id().to_string(),
            };
            if name.is_empty() {
                return Err(format!("Empty name for record {} in {file:?}.", sequences.len()));
            }

            if let Some(&c) = record.seq().iter().find(|&&c| !is_amino_acid(c)) {
                return Err(format!(
                    "Record {name:?} in {file:?} contains {:?}, which is not one of {}.",
                    c as char,
                    String::from_utf8_lossy(AMINO_ACIDS)
                ));
            }
            let residues = String::from_utf8_lossy(record.seq()).into_owned();

            if let Some(&i) = positions.get(&name) {
                ftlog::warn!("Record {name:?} appears more than once. Keeping the last one.");
                sequences[i].1 = residues;
            } else {
                positions.insert(name.clone(), sequences.len());
                sequences.push((name, residues));
            }
        }
    }

    ftlog::info!("Read {} sequences.", sequences.len());
    Ok(sequences)
}

/// Whether `c` is one of the 20 amino acids, in either case.
fn is_amino_acid(c: u8) -> bool {
    AMINO_ACIDS.contains(&c.to_ascii_uppercase())
}

/// Whether `path` names a FASTA file.
fn has_fasta_extension(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("fasta") || ext.eq_ignore_ascii_case("fa"))
}

/// The FASTA files to read for an input path.
fn fasta_files(path: &Path) -> Result<Vec<PathBuf>, String> {
    if !path.exists() {
        return Err(format!("Path {path:?} does not exist!"));
    }

    if path.is_dir() {
        let mut files = std::fs::read_dir(path)
            .map_err(|e| format!("Failed to list {path:?}: {e}"))?
            .map(|entry| entry.map(|e| e.path()).map_err(|e| e.to_string()))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|p| p.is_file() && has_fasta_extension(p))
            .collect::<Vec<_>>();
        files.sort();
        ftlog::info!("Found {} FASTA files in {path:?}.", files.len());
        Ok(files)
    } else if has_fasta_extension(path) {
        Ok(vec![path.to_path_buf()])
    } else {
        Err(format!("Path {path:?} does not have the `.fasta` extension!"))
    }
}
