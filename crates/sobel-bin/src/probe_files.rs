/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use sobel_core::options::DecoderOptions;
use sobel_ppm::PPMDecoder;

use crate::errors::SobelBinErrors;
use crate::file_io::read_file;
use crate::serde::{HeaderInfo, Metadata};

/// Read only the header of a file
pub fn probe_file(path: &Path) -> Result<HeaderInfo, SobelBinErrors> {
    let data = read_file(path).map_err(|e| SobelBinErrors::ReadInput(path.to_path_buf(), e))?;
    // limits lifted, only headers are read
    let mut decoder = PPMDecoder::new_with_options(DecoderOptions::new_unbounded(), &data);

    decoder.read_headers()?;

    match (
        decoder.get_dimensions(),
        decoder.get_chroma(),
        decoder.get_colorspace()
    ) {
        (Some((width, height)), Some(chroma), Some(colorspace)) => Ok(HeaderInfo {
            width,
            height,
            chroma,
            colorspace
        }),
        _ => Err(SobelBinErrors::GenericString(format!(
            "Headers of {path:?} could not be read"
        )))
    }
}

/// Probe input files, extract metadata, and print to standard output.
pub fn probe_input_files(args: &ArgMatches) -> Result<(), SobelBinErrors> {
    for in_file in args.get_many::<PathBuf>("in").into_iter().flatten() {
        let metadata = probe_file(in_file)?;
        let real_metadata = Metadata::new(in_file, metadata);

        let json = serde_json::to_string_pretty(&real_metadata)
            .map_err(|e| SobelBinErrors::GenericString(e.to_string()))?;

        println!("{json}");
    }
    Ok(())
}
