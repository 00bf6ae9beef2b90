/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Read the whole file into memory
pub fn read_file(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut fd = BufReader::new(File::open(path)?);
    let mut buf = Vec::with_capacity(1 << 20);

    fd.read_to_end(&mut buf)?;
    Ok(buf)
}

/// Create or truncate `path` and write `bytes` to it
pub fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;

    let mut buf_writer = BufWriter::new(file);
    buf_writer.write_all(bytes)?;
    buf_writer.flush()
}
