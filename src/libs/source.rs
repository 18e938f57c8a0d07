use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252, WINDOWS_1258};
use log::{debug, info};
use thiserror::Error;

use super::dataset::{Dataset, CATEGORY_COLUMN};

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("CSV not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Could not read CSV at {}. Tried: {}", .path.display(), .tried.join(" | "))]
    Unreadable { path: PathBuf, tried: Vec<String> },

    #[error("{0}")]
    SchemaInvalid(String),
}

impl SourceError {
    pub fn kind(&self) -> &'static str {
        match self {
            SourceError::NotFound(_) => "load_not_found",
            SourceError::Unreadable { .. } => "load_unreadable",
            SourceError::SchemaInvalid(_) => "load_bad_schema",
        }
    }
}

/// Where the product table comes from. Loading is blocking and all-or-nothing.
pub trait DataSource: Send + Sync {
    fn load(&self) -> Result<Dataset, SourceError>;

    fn location(&self) -> String;
}

#[derive(Clone, Copy)]
enum TextEncoding {
    Utf8,
    Utf8Sig,
    Legacy(&'static Encoding),
}

impl TextEncoding {
    fn label(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf8Sig => "utf-8-sig",
            TextEncoding::Legacy(encoding) => encoding.name(),
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<String, String> {
        // Plain utf-8 tolerates a leading BOM as well.
        let (encoding, bytes) = match self {
            TextEncoding::Utf8 | TextEncoding::Utf8Sig => {
                (UTF_8, bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes))
            }
            TextEncoding::Legacy(encoding) => (*encoding, bytes),
        };

        encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
            .ok_or_else(|| format!("invalid {} byte sequence", self.label()))
    }
}

fn encodings() -> [TextEncoding; 4] {
    [
        TextEncoding::Utf8,
        TextEncoding::Utf8Sig,
        TextEncoding::Legacy(WINDOWS_1258),
        TextEncoding::Legacy(WINDOWS_1252),
    ]
}

pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for CsvSource {
    fn load(&self) -> Result<Dataset, SourceError> {
        if !self.path.exists() {
            return Err(SourceError::NotFound(self.path.clone()));
        }

        info!("Loading CSV from {} ...", self.path.display());

        let bytes = fs::read(&self.path).map_err(|e| SourceError::Unreadable {
            path: self.path.clone(),
            tried: vec![e.to_string()],
        })?;

        let (columns, records) = read_table(&self.path, &bytes)?;

        Dataset::new(columns, records).map_err(|_| {
            SourceError::SchemaInvalid(format!(
                "CSV must have a '{CATEGORY_COLUMN}' column (case-sensitive)."
            ))
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

type Table = (Vec<String>, Vec<Vec<String>>);

fn read_table(path: &Path, bytes: &[u8]) -> Result<Table, SourceError> {
    let mut tried = Vec::new();

    for encoding in encodings() {
        match encoding.decode(bytes).and_then(|text| parse_csv(&text)) {
            Ok(table) => {
                debug!("Decoded {} as {}", path.display(), encoding.label());
                return Ok(table);
            }
            Err(e) => {
                debug!("Decoding {} as {} failed: {}", path.display(), encoding.label(), e);
                tried.push(format!("{}: {}", encoding.label(), e));
            }
        }
    }

    Err(SourceError::Unreadable {
        path: path.to_path_buf(),
        tried,
    })
}

fn parse_csv(text: &str) -> Result<Table, String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns = reader
        .headers()
        .map_err(|e| e.to_string())?
        .iter()
        .map(|column| column.to_string())
        .collect::<Vec<String>>();

    if columns.is_empty() {
        return Err("no columns to parse from file".to_string());
    }

    // Short lines are kept as they are, lines with extra fields are rejected.
    let records = reader
        .records()
        .enumerate()
        .map(|(index, record)| {
            let record = record.map_err(|e| e.to_string())?;
            if record.len() > columns.len() {
                return Err(format!(
                    "expected {} fields in data line {}, saw {}",
                    columns.len(),
                    index + 1,
                    record.len()
                ));
            }
            Ok(record.iter().map(|field| field.to_string()).collect())
        })
        .collect::<Result<Vec<Vec<String>>, String>>()?;

    Ok((columns, records))
}
