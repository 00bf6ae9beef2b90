/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use sobel_core::options::DecoderOptions;
use sobel_imageprocs::kernel::OverflowPolicy;
use sobel_imageprocs::sobel::SobelOptions;

pub mod global_options;

pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let defaults = DecoderOptions::default();

    let max_width = options
        .get_one::<usize>("max-width")
        .copied()
        .unwrap_or(defaults.get_max_width());
    let max_height = options
        .get_one::<usize>("max-height")
        .copied()
        .unwrap_or(defaults.get_max_height());
    let strict_mode = options.get_flag("strict");

    defaults
        .set_max_width(max_width)
        .set_max_height(max_height)
        .set_strict_mode(strict_mode)
}

pub fn get_sobel_options(options: &ArgMatches) -> SobelOptions {
    let mut sobel_options = SobelOptions::default();

    if let Some(threads) = options.get_one::<usize>("threads") {
        sobel_options = sobel_options.set_num_threads(*threads);
    }
    if options.get_flag("wrap") {
        sobel_options = sobel_options.set_overflow_policy(OverflowPolicy::Wrap);
    }
    sobel_options
}
