use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};
use std::mem;

use crate::error::DecodeError;

/// A growable in-memory byte buffer receiving a rendered document.
///
/// The buffer is write-only until `finish` rewinds it into a read-only
/// `SvgDocument`.  Both are owned values: the bytes are released when they go
/// out of scope, whatever the exit path.
#[derive(Debug, Default)]
pub struct SvgBuffer {
    cursor: Cursor<Vec<u8>>,
}

impl SvgBuffer {
    pub fn new() -> SvgBuffer {
        SvgBuffer::default()
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.cursor.get_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.get_ref().is_empty()
    }

    /// Rewinds the buffer so that it can be read from the start.
    pub fn finish(mut self) -> io::Result<SvgDocument> {
        let mut cursor = mem::take(&mut self.cursor);
        cursor.seek(SeekFrom::Start(0))?;
        Ok(SvgDocument { cursor })
    }
}

impl Write for SvgBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.cursor.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.cursor.flush()
    }
}

impl Drop for SvgBuffer {
    fn drop(&mut self) {
        if !self.is_empty() {
            trace!("Releasing unfinished buffer of {} bytes", self.len());
        }
    }
}

/// A rendered document, rewound and ready to be read.
#[derive(Debug)]
pub struct SvgDocument {
    cursor: Cursor<Vec<u8>>,
}

impl SvgDocument {
    /// The raw bytes of the document.
    pub fn as_bytes(&self) -> &[u8] {
        self.cursor.get_ref()
    }

    /// Reads the whole document and decodes it as UTF-8 text.
    pub fn decode(mut self) -> Result<String, DecodeError> {
        let mut bytes = Vec::with_capacity(self.as_bytes().len());
        self.cursor.read_to_end(&mut bytes)?;
        Ok(String::from_utf8(bytes)?)
    }
}

impl Drop for SvgDocument {
    fn drop(&mut self) {
        trace!("Releasing document of {} bytes", self.as_bytes().len());
    }
}
