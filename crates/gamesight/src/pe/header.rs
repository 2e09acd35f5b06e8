//! PE header validation and machine type extraction
//!
//! Reads three fixed locations of a candidate file:
//!
//! ```text
//! 0x00          "MZ"
//! 0x3C          e_lfanew (u32 LE) ──┐
//! e_lfanew      "PE\0\0"  ◄─────────┘
//! e_lfanew + 4  Machine (u16 LE)
//! ```
//!
//! Malformed and truncated files are ordinary input here, so every failure
//! comes back as a [`HeaderError`] rather than a panic.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::trace;

use super::layout::{coff, dos};
use super::machine::Architecture;

/// Reason a file was rejected as a PE image
#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("cannot open: {0}")]
    CannotOpen(#[source] io::Error),

    #[error("missing MZ signature")]
    MissingMzSignature,

    #[error("bad header offset: {0:#x}")]
    BadHeaderOffset(u32),

    #[error("invalid signature")]
    InvalidSignature,

    /// File ends before the field at this offset. A file cut off right
    /// after `PE\0\0` lands here instead of being read as zero-filled.
    #[error("truncated header at offset {0:#x}")]
    Truncated(u64),

    #[error("read failed: {0}")]
    Read(#[source] io::Error),
}

/// Fields extracted from a structurally valid PE image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeHeader {
    /// Offset of the PE signature (e_lfanew)
    pub pe_offset: u32,
    /// Raw COFF machine value
    pub machine_type: u16,
    pub architecture: Architecture,
}

/// Caller-facing analysis record.
///
/// Invalid input is reported with `valid == false`, machine type 0 and an
/// error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeAnalysis {
    pub valid: bool,
    pub architecture: Architecture,
    pub machine_type: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PeAnalysis {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            architecture: Architecture::Unknown,
            machine_type: 0,
            error: Some(reason.into()),
        }
    }
}

impl From<PeHeader> for PeAnalysis {
    fn from(header: PeHeader) -> Self {
        Self {
            valid: true,
            architecture: header.architecture,
            machine_type: header.machine_type,
            error: None,
        }
    }
}

impl From<Result<PeHeader, HeaderError>> for PeAnalysis {
    fn from(result: Result<PeHeader, HeaderError>) -> Self {
        match result {
            Ok(header) => header.into(),
            Err(e) => Self::invalid(e.to_string()),
        }
    }
}

/// Read exactly `buf.len()` bytes at `offset`, mapping a short read to `on_eof`
fn read_at<R: Read + Seek>(
    reader: &mut R,
    offset: u64,
    buf: &mut [u8],
    on_eof: HeaderError,
) -> Result<(), HeaderError> {
    reader
        .seek(SeekFrom::Start(offset))
        .map_err(HeaderError::Read)?;
    match reader.read_exact(buf) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(on_eof),
        Err(e) => Err(HeaderError::Read(e)),
    }
}

/// Parse the PE header from any seekable byte source
pub fn parse_pe_header<R: Read + Seek>(reader: &mut R) -> Result<PeHeader, HeaderError> {
    let mut magic = [0u8; 2];
    read_at(
        reader,
        dos::MAGIC_OFFSET,
        &mut magic,
        HeaderError::MissingMzSignature,
    )?;
    if &magic != dos::MAGIC {
        return Err(HeaderError::MissingMzSignature);
    }

    let mut lfanew = [0u8; 4];
    read_at(
        reader,
        dos::E_LFANEW_OFFSET,
        &mut lfanew,
        HeaderError::Truncated(dos::E_LFANEW_OFFSET),
    )?;
    let pe_offset = u32::from_le_bytes(lfanew);
    if !(dos::MIN_E_LFANEW..=dos::MAX_E_LFANEW).contains(&pe_offset) {
        return Err(HeaderError::BadHeaderOffset(pe_offset));
    }

    let mut signature = [0u8; 4];
    read_at(
        reader,
        u64::from(pe_offset),
        &mut signature,
        HeaderError::InvalidSignature,
    )?;
    if &signature != coff::SIGNATURE {
        return Err(HeaderError::InvalidSignature);
    }

    let machine_offset = u64::from(pe_offset) + coff::MACHINE_OFFSET;
    let mut machine = [0u8; 2];
    read_at(
        reader,
        machine_offset,
        &mut machine,
        HeaderError::Truncated(machine_offset),
    )?;
    let machine_type = u16::from_le_bytes(machine);

    Ok(PeHeader {
        pe_offset,
        machine_type,
        architecture: Architecture::from_machine(machine_type),
    })
}

/// Open `path` and parse its PE header.
///
/// The file handle is dropped before returning on every path.
pub fn read_pe_header<P: AsRef<Path>>(path: P) -> Result<PeHeader, HeaderError> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(HeaderError::CannotOpen)?;
    let result = parse_pe_header(&mut file);
    match &result {
        Ok(header) => trace!(
            "{}: machine=0x{:04X} ({})",
            path.display(),
            header.machine_type,
            header.architecture
        ),
        Err(e) => trace!("{}: not a PE image: {}", path.display(), e),
    }
    result
}

/// Analyze an executable and flatten the outcome into a [`PeAnalysis`]
pub fn analyze_executable<P: AsRef<Path>>(path: P) -> PeAnalysis {
    read_pe_header(path).into()
}
