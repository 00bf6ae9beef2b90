/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image Colorspace information

/// Colorspaces understood by the raster codecs
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum ColorSpace {
    /// Grayscale colorspace, one sample per pixel
    Luma,
    /// Red, Green , Blue, interleaved
    RGB,
    /// The colorspace is unknown
    #[default]
    Unknown
}

impl ColorSpace {
    /// Number of samples stored per pixel
    pub const fn num_components(&self) -> usize {
        match self {
            Self::Luma => 1,
            Self::RGB => 3,
            Self::Unknown => 0
        }
    }

    pub const fn is_grayscale(&self) -> bool {
        matches!(self, Self::Luma)
    }
}

#[cfg(test)]
mod tests {
    use crate::colorspace::ColorSpace;

    #[test]
    fn components() {
        assert_eq!(ColorSpace::Luma.num_components(), 1);
        assert_eq!(ColorSpace::RGB.num_components(), 3);
        assert_eq!(ColorSpace::Unknown.num_components(), 0);
        assert!(ColorSpace::Luma.is_grayscale());
        assert!(!ColorSpace::RGB.is_grayscale());
    }
}
