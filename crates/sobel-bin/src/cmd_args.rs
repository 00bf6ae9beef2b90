/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

pub mod help_strings;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("sobel")
        .about("Sobel edge detection for binary PGM images")
        .after_help(help_strings::EXIT_CODES_HELP)
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input file to read data from")
            .long_help(help_strings::INPUT_HELP)
            .action(ArgAction::Append)
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output to write the edges to")
            .action(ArgAction::Append)
            .value_parser(value_parser!(PathBuf))
            .required_unless_present("probe"))
        .arg(Arg::new("threads")
            .short('t')
            .long("threads")
            .help_heading("FILTER")
            .help("Number of worker threads, defaults to the available parallelism")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("wrap")
            .long("wrap")
            .action(ArgAction::SetTrue)
            .help_heading("FILTER")
            .help("Store gradient magnitudes modulo 256 instead of clamping to 255"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("DECODER")
            .help("Reject files with bytes after the pixel data"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("DECODER")
            .help("Maximum width of images to decode")
            .value_parser(value_parser!(usize))
            .default_value("131072"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("DECODER")
            .help("Maximum height of images to decode")
            .value_parser(value_parser!(usize))
            .default_value("131072"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print the header information of the input files as json and exit"))
        .arg(Arg::new("all-yes")
            .short('y')
            .long("yes")
            .action(ArgAction::SetTrue)
            .help("Overwrite existing output files without asking"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display timing and image information"))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::cmd_args::create_cmd_args;

    #[test]
    fn verify_cmd() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn pairs_of_files() {
        let matches = create_cmd_args()
            .try_get_matches_from(["sobel", "-i", "a.pgm", "-o", "b.pgm", "-i", "c.pgm", "-o", "d.pgm"])
            .unwrap();

        let inputs = matches.get_many::<PathBuf>("in").unwrap().collect::<Vec<_>>();
        assert_eq!(inputs, [&PathBuf::from("a.pgm"), &PathBuf::from("c.pgm")]);
        assert_eq!(matches.get_many::<PathBuf>("out").unwrap().count(), 2);
    }

    #[test]
    fn output_optional_when_probing() {
        assert!(create_cmd_args()
            .try_get_matches_from(["sobel", "-i", "a.pgm"])
            .is_err());
        assert!(create_cmd_args()
            .try_get_matches_from(["sobel", "-i", "a.pgm", "--probe"])
            .is_ok());
    }
}
