/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};
use sobel_core::options::DecoderOptions;
use sobel_imageprocs::sobel::SobelOptions;

use crate::cmd_parsers::{get_decoder_options, get_sobel_options};

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub decoder_options: DecoderOptions,
    pub sobel_options:   SobelOptions,
    pub override_files:  bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            decoder_options: DecoderOptions::default(),
            sobel_options:   SobelOptions::default(),
            override_files:  false
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    cmd_options.decoder_options = get_decoder_options(options);
    cmd_options.sobel_options = get_sobel_options(options);

    info!(
        "Using {} worker thread(s), overflow policy {:?}",
        cmd_options.sobel_options.get_num_threads(),
        cmd_options.sobel_options.get_overflow_policy()
    );

    if options.get_flag("all-yes") {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn;
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
