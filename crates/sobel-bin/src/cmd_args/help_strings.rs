pub static INPUT_HELP: &str = "Input file to read data from

The file must be a binary PGM (P5) image. Binary PPM (P6) color
images are accepted and converted to grayscale first.

Can be repeated, each input is paired with the output
given at the same position.";

pub static EXIT_CODES_HELP: &str = "Exit codes:
  0  success
  1  the input could not be read or decoded
  2  the filter failed
  3  the output could not be encoded or written";
