//! Synthetic PE images for tests

use std::fs;
use std::io;
use std::path::Path;

use super::layout::{coff, dos, machine};

/// Builds the smallest byte image the header parser will look at
#[derive(Debug, Clone)]
pub struct PeImageBuilder {
    dos_magic: [u8; 2],
    e_lfanew: u32,
    signature: [u8; 4],
    machine: u16,
    truncate_to: Option<usize>,
}

impl Default for PeImageBuilder {
    fn default() -> Self {
        Self {
            dos_magic: *dos::MAGIC,
            e_lfanew: 0x80,
            signature: *coff::SIGNATURE,
            machine: machine::I386,
            truncate_to: None,
        }
    }
}

impl PeImageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn i386() -> Self {
        Self::new().machine(machine::I386)
    }

    pub fn amd64() -> Self {
        Self::new().machine(machine::AMD64)
    }

    pub fn machine(mut self, machine: u16) -> Self {
        self.machine = machine;
        self
    }

    pub fn e_lfanew(mut self, offset: u32) -> Self {
        self.e_lfanew = offset;
        self
    }

    pub fn dos_magic(mut self, magic: [u8; 2]) -> Self {
        self.dos_magic = magic;
        self
    }

    pub fn signature(mut self, signature: [u8; 4]) -> Self {
        self.signature = signature;
        self
    }

    pub fn truncate(mut self, len: usize) -> Self {
        self.truncate_to = Some(len);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let pe_start = self.e_lfanew as usize;
        let machine_end = pe_start + coff::MACHINE_OFFSET as usize + 2;
        let mut bytes = vec![0u8; machine_end.max(dos::E_LFANEW_OFFSET as usize + 4)];

        bytes[pe_start..pe_start + 4].copy_from_slice(&self.signature);
        bytes[pe_start + 4..machine_end].copy_from_slice(&self.machine.to_le_bytes());

        let lfanew_at = dos::E_LFANEW_OFFSET as usize;
        bytes[lfanew_at..lfanew_at + 4].copy_from_slice(&self.e_lfanew.to_le_bytes());
        bytes[0..2].copy_from_slice(&self.dos_magic);

        if let Some(len) = self.truncate_to {
            bytes.truncate(len);
        }
        bytes
    }

    /// Write the image, creating parent directories as needed
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.build())
    }

    /// Write the image and pad the file (sparsely) to `size` bytes
    pub fn write_sized<P: AsRef<Path>>(&self, path: P, size: u64) -> io::Result<()> {
        let path = path.as_ref();
        self.write_to(path)?;
        let file = fs::OpenOptions::new().write(true).open(path)?;
        file.set_len(size)?;
        Ok(())
    }
}
