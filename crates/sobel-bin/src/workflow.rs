/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{stdin, BufRead};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::ArgMatches;
use log::{debug, info};
use sobel_core::colorspace::ColorSpace;
use sobel_core::options::DecoderOptions;
use sobel_core::raster::RasterBuffer;
use sobel_imageprocs::grayscale::luma_raster;
use sobel_imageprocs::sobel::SobelEngine;
use sobel_ppm::{PPMDecoder, PPMEncoder};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::SobelBinErrors;
use crate::file_io::{read_file, write_file};

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), SobelBinErrors> {
    info!("Creating workflows from input");

    let inputs: Vec<&PathBuf> = args.get_many::<PathBuf>("in").into_iter().flatten().collect();
    let outputs: Vec<&PathBuf> = args.get_many::<PathBuf>("out").into_iter().flatten().collect();

    if inputs.len() != outputs.len() {
        return Err(SobelBinErrors::GenericString(format!(
            "Got {} input files but {} output files",
            inputs.len(),
            outputs.len()
        )));
    }

    for (in_file, out_file) in inputs.into_iter().zip(outputs) {
        verify_file_paths(in_file, out_file, cmd_opts.override_files)?;
        run_file(in_file, out_file, cmd_opts)?;
    }
    Ok(())
}

/// Decode `in_file`, detect its edges and write them to `out_file`
pub(crate) fn run_file(
    in_file: &Path, out_file: &Path, cmd_opts: &CmdOptions
) -> Result<(), SobelBinErrors> {
    let start = Instant::now();

    let data =
        read_file(in_file).map_err(|e| SobelBinErrors::ReadInput(in_file.to_path_buf(), e))?;

    let source = decode_grayscale(&data, cmd_opts.decoder_options)?;
    debug!(
        "Decoded {:?}, {}x{} with chroma {}",
        in_file,
        source.width(),
        source.height(),
        source.chroma()
    );

    let engine = SobelEngine::new(cmd_opts.sobel_options);
    let edges = engine.apply(&source)?;

    let bytes = PPMEncoder::new(&edges).encode_to_vec()?;

    write_file(out_file, &bytes)
        .map_err(|e| SobelBinErrors::WriteOutput(out_file.to_path_buf(), e))?;

    info!(
        "Wrote {:?}, {}x{} chroma {} in {:?}",
        out_file,
        edges.width(),
        edges.height(),
        edges.chroma(),
        start.elapsed()
    );
    Ok(())
}

/// Decode a P5 image, or a P6 image converted to luma
fn decode_grayscale(data: &[u8], options: DecoderOptions) -> Result<RasterBuffer, SobelBinErrors> {
    let mut decoder = PPMDecoder::new_with_options(options, data);
    decoder.read_headers()?;

    if decoder.get_colorspace() == Some(ColorSpace::RGB) {
        let pixels = decoder.decode_raw()?;
        let (width, height) = decoder.get_dimensions().unwrap_or_default();
        let chroma = decoder.get_chroma().unwrap_or_default();

        info!("Converting RGB input to grayscale");
        return Ok(luma_raster(&pixels, width, height, chroma)?);
    }
    Ok(decoder.decode()?)
}

fn verify_file_paths(
    in_path: &Path, out_path: &Path, override_files: bool
) -> Result<(), SobelBinErrors> {
    if in_path == out_path {
        return Err(SobelBinErrors::GenericString(format!(
            "Cannot use {in_path:?} as both input and output"
        )));
    }

    if !in_path.exists() {
        return Err(SobelBinErrors::GenericString(format!(
            "Path {in_path:?}, does not exist"
        )));
    }

    if !in_path.is_file() {
        return Err(SobelBinErrors::GenericString(format!(
            "Path {in_path:?} is not a file"
        )));
    }

    if out_path.exists() {
        if override_files {
            info!("Overwriting path {:?} ", out_path);
        } else {
            println!("File {out_path:?} exists, overwrite [y/N]");
            let mut result = String::new();

            stdin()
                .lock()
                .read_line(&mut result)
                .map_err(|e| SobelBinErrors::GenericString(e.to_string()))?;

            if result.trim() != "y" {
                return Err(SobelBinErrors::GenericString(format!(
                    "Not overwriting file {out_path:?}"
                )));
            }
        }
    }
    Ok(())
}
