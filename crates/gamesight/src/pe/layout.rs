//! Byte layout constants for the Windows PE container
//!
//! Only the handful of fields needed to classify a binary are described here.
//! Offsets are in bytes from the start of the file unless stated otherwise.

/// Legacy DOS header fields
pub mod dos {
    /// `MZ` magic at the very start of the file
    pub const MAGIC: &[u8; 2] = b"MZ";
    pub const MAGIC_OFFSET: u64 = 0;

    /// e_lfanew: u32 LE pointer to the PE signature
    pub const E_LFANEW_OFFSET: u64 = 0x3C;

    /// Smallest accepted e_lfanew (size of the DOS header itself)
    pub const MIN_E_LFANEW: u32 = 64;
    /// Largest accepted e_lfanew.
    ///
    /// Real linkers place the PE header well below this; anything larger is
    /// treated as corrupt or hostile input.
    pub const MAX_E_LFANEW: u32 = 1024;
}

/// PE signature and COFF file header fields (relative to e_lfanew)
pub mod coff {
    /// `PE\0\0`
    pub const SIGNATURE: &[u8; 4] = b"PE\0\0";
    pub const SIGNATURE_LEN: u64 = 4;

    /// Machine field immediately follows the signature
    pub const MACHINE_OFFSET: u64 = SIGNATURE_LEN;
}

/// IMAGE_FILE_MACHINE_* values
pub mod machine {
    pub const I386: u16 = 0x014c;
    pub const AMD64: u16 = 0x8664;
}
