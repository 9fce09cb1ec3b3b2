use std::fs::File;
use std::path::Path;

use bstr::ByteSlice;

use crate::toolchain::diagnostics::{Cause, Error, ErrorCode};

enum SourceBufferKind<'a> {
    File { buffer: mmap_rs::Mmap },
    Decoded { string: String },
    Memory { string: &'a str },
}

// Keeps source and a file name in the same object, so they provide the same lifetimes.
pub struct SourceBuffer<'a> {
    kind: SourceBufferKind<'a>,
    file_name: String,
}

impl<'a> SourceBuffer<'a> {
    /// Maps the file at `file_path` into memory. Invalid utf-8 sequences are replaced with
    /// U+FFFD, so the buffer is always scannable.
    pub fn new_from_file(file_path: &Path) -> Result<SourceBuffer<'static>, Error> {
        let io_error = |source: std::io::Error| {
            Error::input(ErrorCode::FileNotFound, Cause::Io { path: file_path.into(), source })
        };
        let map_error = |source: mmap_rs::Error| {
            Error::input(ErrorCode::FileNotFound, Cause::Map { path: file_path.into(), source })
        };

        let file = File::open(file_path).map_err(io_error)?;
        let len = file.metadata().map_err(io_error)?.len();
        let file_name = file_path.display().to_string();

        // Zero-length mappings are rejected by the OS.
        if len == 0 {
            return Ok(SourceBuffer { kind: SourceBufferKind::Memory { string: "" }, file_name });
        }

        let size = usize::try_from(len).map_err(|_| {
            io_error(std::io::Error::new(std::io::ErrorKind::InvalidInput, "file too large to map"))
        })?;
        let buffer = unsafe {
            mmap_rs::MmapOptions::new(size).map_err(map_error)?.with_file(&file, 0).map()
        }
        .map_err(map_error)?;

        let kind = match buffer.as_slice().to_str() {
            Ok(_) => SourceBufferKind::File { buffer },
            Err(_) => {
                SourceBufferKind::Decoded { string: buffer.as_slice().to_str_lossy().into_owned() }
            }
        };
        Ok(SourceBuffer { kind, file_name })
    }

    pub fn new_from_string(string: &'a str, name: &str) -> SourceBuffer<'a> {
        SourceBuffer { kind: SourceBufferKind::Memory { string }, file_name: String::from(name) }
    }

    /// Decodes arbitrary bytes, replacing invalid utf-8 sequences with U+FFFD.
    pub fn new_from_bytes(bytes: &[u8], name: &str) -> SourceBuffer<'static> {
        let string = bytes.to_str_lossy().into_owned();
        SourceBuffer { kind: SourceBufferKind::Decoded { string }, file_name: String::from(name) }
    }

    pub fn code(&self) -> &str {
        match &self.kind {
            // Mapped buffers are only kept when they validated as utf-8 at construction.
            SourceBufferKind::File { buffer } => unsafe {
                std::str::from_utf8_unchecked(buffer.as_slice())
            },
            SourceBufferKind::Decoded { string } => string.as_str(),
            SourceBufferKind::Memory { string } => string,
        }
    }

    pub fn file_name(&self) -> &str {
        self.file_name.as_str()
    }
}
