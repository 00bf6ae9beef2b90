/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple forward reader over an in-memory byte stream
//!
//! Header parsers use it to pull single bytes, newline terminated
//! header lines and the raw pixel payload that follows.

/// Longest header line accepted, terminator included
pub const MAX_HEADER_LINE: usize = 64;

/// Reasons a header line could not be read
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LineError {
    /// Stream ended before a `\n` was seen
    UnexpectedEof,
    /// An ASCII NUL appeared before the terminator
    NulByte,
    /// No terminator within the first `limit` bytes
    TooLong(usize)
}

/// An encapsulation of a byte stream reader
///
/// The reader never reads past the end of the stream,
/// methods that could do so return `None` or an error instead.
pub struct ZByteReader<'a> {
    stream:   &'a [u8],
    position: usize
}

impl<'a> ZByteReader<'a> {
    /// Create a new instance of the byte stream
    pub const fn new(buf: &'a [u8]) -> ZByteReader<'a> {
        ZByteReader {
            stream:   buf,
            position: 0
        }
    }

    /// Bytes left in the stream
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.position)
    }

    #[inline]
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }

    /// Read a single byte, or `None` at the end of the stream
    #[inline]
    pub fn get_u8(&mut self) -> Option<u8> {
        let byte = *self.stream.get(self.position)?;
        self.position += 1;
        Some(byte)
    }

    /// Return a reference to the next `num` bytes and advance past them
    ///
    /// Returns `None` without moving if fewer than `num` bytes are left.
    pub fn get_as_ref(&mut self, num: usize) -> Option<&'a [u8]> {
        let end = self.position.checked_add(num)?;
        let slice = self.stream.get(self.position..end)?;
        self.position = end;
        Some(slice)
    }

    /// Read one header line terminated by `\n`.
    ///
    /// The returned slice excludes the terminator. The scan stops after `limit`
    /// bytes, a line whose terminator is not among them is rejected, as is a
    /// line containing an ASCII NUL.
    ///
    /// On error the reader position is unspecified, callers are expected to
    /// abandon the stream.
    pub fn read_line(&mut self, limit: usize) -> Result<&'a [u8], LineError> {
        let start = self.position;

        for scanned in 0..limit {
            let byte = self.get_u8().ok_or(LineError::UnexpectedEof)?;

            match byte {
                b'\n' => return Ok(&self.stream[start..start + scanned]),
                0 => return Err(LineError::NulByte),
                _ => ()
            }
        }
        Err(LineError::TooLong(limit))
    }
}

#[cfg(test)]
mod tests {
    use crate::bytestream::{LineError, ZByteReader, MAX_HEADER_LINE};

    #[test]
    fn read_lines_and_payload() {
        let mut reader = ZByteReader::new(b"P5\n2 1\n255\n\x01\x02");

        assert_eq!(reader.read_line(MAX_HEADER_LINE), Ok(&b"P5"[..]));
        assert_eq!(reader.read_line(MAX_HEADER_LINE), Ok(&b"2 1"[..]));
        assert_eq!(reader.read_line(MAX_HEADER_LINE), Ok(&b"255"[..]));
        assert_eq!(reader.remaining(), 2);
        assert_eq!(reader.get_as_ref(3), None);
        assert_eq!(reader.get_as_ref(2), Some(&[1_u8, 2][..]));
        assert!(reader.eof());
        assert_eq!(reader.get_u8(), None);
    }

    #[test]
    fn nul_byte_is_rejected() {
        let mut reader = ZByteReader::new(b"12\x00 3\n");
        assert_eq!(reader.read_line(MAX_HEADER_LINE), Err(LineError::NulByte));
    }

    #[test]
    fn missing_terminator() {
        let mut reader = ZByteReader::new(b"123");
        assert_eq!(reader.read_line(MAX_HEADER_LINE), Err(LineError::UnexpectedEof));

        let long = [b'1'; 100];
        let mut reader = ZByteReader::new(&long);
        assert_eq!(
            reader.read_line(MAX_HEADER_LINE),
            Err(LineError::TooLong(MAX_HEADER_LINE))
        );
    }

    #[test]
    fn line_of_exactly_limit_bytes() {
        // 63 digits and the terminator fill the scan window
        let mut data = vec![b'7'; MAX_HEADER_LINE - 1];
        data.push(b'\n');

        let mut reader = ZByteReader::new(&data);
        let line = reader.read_line(MAX_HEADER_LINE).unwrap();
        assert_eq!(line.len(), MAX_HEADER_LINE - 1);
    }
}
