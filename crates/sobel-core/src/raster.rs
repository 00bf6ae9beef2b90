/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An owned 8-bit grayscale raster
//!
//! Pixels are stored row-major in one contiguous buffer,
//! pixel `(row, col)` lives at `row * width + col`.
use crate::errors::RasterErrors;

/// A single channel 8 bit image
///
/// Besides the pixels it carries `chroma`, the maximum sample value
/// written into the file header. It is informational and is not used
/// to clamp stored samples.
///
/// # Invariant
/// `pixels.len() == width * height`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RasterBuffer {
    pixels: Vec<u8>,
    width:  usize,
    height: usize,
    chroma: u8
}

/// Compute `width * height`, erroring out on overflow
pub fn checked_area(width: usize, height: usize) -> Result<usize, RasterErrors> {
    width
        .checked_mul(height)
        .ok_or(RasterErrors::TooLargeDimensions(width, height))
}

impl RasterBuffer {
    /// Create a raster with no pixels and zero dimensions
    pub const fn empty() -> RasterBuffer {
        RasterBuffer {
            pixels: Vec::new(),
            width:  0,
            height: 0,
            chroma: 0
        }
    }

    /// Allocate a zero filled raster of the given dimensions
    pub fn allocate(width: usize, height: usize) -> Result<RasterBuffer, RasterErrors> {
        RasterBuffer::fill(0, width, height)
    }

    /// Create a raster where every pixel is `value`.
    ///
    /// Chroma is set to `value`
    pub fn fill(value: u8, width: usize, height: usize) -> Result<RasterBuffer, RasterErrors> {
        let size = checked_area(width, height)?;

        Ok(RasterBuffer {
            pixels: vec![value; size],
            width,
            height,
            chroma: value
        })
    }

    /// Wrap already decoded pixels
    ///
    /// # Errors
    /// If `pixels.len()` is not `width * height`
    pub fn from_raw(
        pixels: Vec<u8>, width: usize, height: usize, chroma: u8
    ) -> Result<RasterBuffer, RasterErrors> {
        let expected = checked_area(width, height)?;

        if pixels.len() != expected {
            return Err(RasterErrors::DimensionMismatch(expected, pixels.len()));
        }
        Ok(RasterBuffer {
            pixels,
            width,
            height,
            chroma
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn chroma(&self) -> u8 {
        self.chroma
    }

    pub fn set_chroma(&mut self, chroma: u8) {
        self.chroma = chroma;
    }

    /// Number of pixels stored
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True when the raster holds no pixel data
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Release the pixel buffer and zero all metadata
    pub fn reset(&mut self) {
        *self = RasterBuffer::empty();
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) out of bounds for a {}x{} raster",
            self.width,
            self.height
        );
        row * self.width + col
    }

    /// Return the pixel at `(row, col)`
    ///
    /// # Panics
    /// If the position lies outside the raster
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.pixels[self.offset(row, col)]
    }

    /// Overwrite the pixel at `(row, col)`
    ///
    /// # Panics
    /// If the position lies outside the raster
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        let offset = self.offset(row, col);
        self.pixels[offset] = value;
    }

    /// Return a whole row of pixels
    ///
    /// # Panics
    /// If `row >= height`
    #[inline]
    pub fn row(&self, row: usize) -> &[u8] {
        assert!(row < self.height, "row {row} out of bounds, height is {}", self.height);
        let start = row * self.width;
        &self.pixels[start..start + self.width]
    }

    /// Largest sample in the raster, zero for an empty raster
    pub fn max_pixel(&self) -> u8 {
        self.pixels.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::RasterErrors;
    use crate::raster::RasterBuffer;

    #[test]
    fn get_and_set() {
        let mut raster = RasterBuffer::allocate(4, 3).unwrap();
        assert_eq!(raster.len(), 12);
        assert_eq!(raster.dimensions(), (4, 3));

        raster.set(2, 3, 200);
        raster.set(0, 1, 7);

        assert_eq!(raster.get(2, 3), 200);
        assert_eq!(raster.get(0, 1), 7);
        assert_eq!(raster.pixels()[2 * 4 + 3], 200);
        assert_eq!(raster.row(0), &[0, 7, 0, 0]);
        assert_eq!(raster.max_pixel(), 200);
    }

    #[test]
    #[should_panic]
    fn column_out_of_bounds_panics() {
        let raster = RasterBuffer::allocate(4, 3).unwrap();
        // would alias into the next row with unchecked arithmetic
        raster.get(0, 4);
    }

    #[test]
    #[should_panic]
    fn row_out_of_bounds_panics() {
        let mut raster = RasterBuffer::allocate(4, 3).unwrap();
        raster.set(3, 0, 1);
    }

    #[test]
    fn from_raw_checks_length() {
        let err = RasterBuffer::from_raw(vec![0; 5], 2, 3, 0).unwrap_err();
        assert!(matches!(err, RasterErrors::DimensionMismatch(6, 5)));

        let raster = RasterBuffer::from_raw(vec![1, 2, 3, 4, 5, 6], 2, 3, 6).unwrap();
        assert_eq!(raster.get(2, 1), 6);
        assert_eq!(raster.chroma(), 6);
    }

    #[test]
    fn overflowing_dimensions() {
        let err = RasterBuffer::allocate(usize::MAX, 2).unwrap_err();
        assert!(matches!(err, RasterErrors::TooLargeDimensions(_, 2)));
    }

    #[test]
    fn reset_releases_pixels() {
        let mut raster = RasterBuffer::fill(9, 3, 3).unwrap();
        assert_eq!(raster.chroma(), 9);

        raster.reset();
        assert!(raster.is_empty());
        assert_eq!(raster, RasterBuffer::empty());
    }
}
