/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options
//!
//! This module exposes a struct for which the raster decoders
//! get shared options for decoding

/// Decoder options
///
/// Each option specifies what it guards against and its default value
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 131072
    max_width:   usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 131072
    max_height:  usize,
    /// Reject bytes found after the pixel data
    ///
    /// When set to false, trailing bytes are ignored with a warning.
    ///
    /// - Default value: false
    strict_mode: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:   1 << 17,
            max_height:  1 << 17,
            strict_mode: false
        }
    }
}

impl DecoderOptions {
    /// Create the decoder options with limits lifted,
    /// used when only probing headers.
    pub fn new_unbounded() -> DecoderOptions {
        DecoderOptions::default()
            .set_max_width(usize::MAX)
            .set_max_height(usize::MAX)
    }

    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should reject
    /// trailing bytes after the pixel data
    pub const fn get_strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    ///
    /// # Arguments
    ///
    /// * `width`:  The maximum width allowed
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    ///
    /// # Arguments
    ///
    /// * `height`: The maximum height allowed
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should reject trailing data
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::options::DecoderOptions;

    #[test]
    fn builder_sets_limits() {
        let options = DecoderOptions::default()
            .set_max_width(10)
            .set_max_height(20)
            .set_strict_mode(true);

        assert_eq!(options.get_max_width(), 10);
        assert_eq!(options.get_max_height(), 20);
        assert!(options.get_strict_mode());

        let unbounded = DecoderOptions::new_unbounded();
        assert_eq!(unbounded.get_max_width(), usize::MAX);
        assert!(!unbounded.get_strict_mode());
    }
}
