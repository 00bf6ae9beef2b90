/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The fixed Sobel kernels and the per pixel gradient magnitude

/// Horizontal derivative kernel
///
/// ```text
///   -1, 0, 1,
///   -2, 0, 2,
///   -1, 0, 1
/// ```
pub const SOBEL_X: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Vertical derivative kernel
///
/// ```text
///  -1,-2,-1,
///   0, 0, 0,
///   1, 2, 1
/// ```
pub const SOBEL_Y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// How a gradient magnitude above 255 is stored in an 8 bit pixel
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum OverflowPolicy {
    /// Clamp to 255
    #[default]
    Saturate,
    /// Keep the low 8 bits, i.e. the magnitude modulo 256
    Wrap
}

impl OverflowPolicy {
    #[inline]
    pub const fn store(self, magnitude: u32) -> u8 {
        match self {
            OverflowPolicy::Saturate => {
                if magnitude > 255 {
                    255
                } else {
                    magnitude as u8
                }
            }
            OverflowPolicy::Wrap => (magnitude & 0xFF) as u8
        }
    }
}

/// Compute `(gx, gy)` for a 3x3 window stored row-major
#[inline]
pub fn gradients(c: &[u8; 9]) -> (i32, i32) {
    let mut gx = 0;
    let mut gy = 0;

    for (i, pixel) in c.iter().enumerate() {
        let (row, col) = (i / 3, i % 3);
        let pixel = i32::from(*pixel);

        gx += SOBEL_X[row][col] * pixel;
        gy += SOBEL_Y[row][col] * pixel;
    }
    (gx, gy)
}

/// Calculate `ceil(sqrt(gx^2 + gy^2))` for a 3x3 window
///
/// The result lies in `0..=1443` for 8 bit input
#[inline]
pub fn magnitude(c: &[u8; 9]) -> u32 {
    let (gx, gy) = gradients(c);

    f64::from(gx * gx + gy * gy).sqrt().ceil() as u32
}
