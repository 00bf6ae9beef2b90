/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use sobel_core::raster::RasterBuffer;
use sobel_imageprocs::kernel::{OverflowPolicy, SOBEL_X, SOBEL_Y};
use sobel_imageprocs::sobel::{SobelEngine, SobelOptions};

/// Straightforward single threaded Sobel using per pixel access
fn reference_sobel(source: &RasterBuffer, policy: OverflowPolicy) -> RasterBuffer {
    let (width, height) = source.dimensions();
    let mut out = RasterBuffer::allocate(width - 2, height - 2).unwrap();
    let mut max = 0;

    for row in 1..height - 1 {
        for col in 1..width - 1 {
            let mut gx = 0;
            let mut gy = 0;

            for i in 0..3 {
                for j in 0..3 {
                    let pixel = i32::from(source.get(row + i - 1, col + j - 1));
                    gx += SOBEL_X[i][j] * pixel;
                    gy += SOBEL_Y[i][j] * pixel;
                }
            }
            let magnitude = f64::from(gx * gx + gy * gy).sqrt().ceil() as u32;
            let value = policy.store(magnitude);

            out.set(row - 1, col - 1, value);
            max = max.max(value);
        }
    }
    out.set_chroma(max);
    out
}

fn random_image(width: usize, height: usize, rng: &mut WyRand) -> RasterBuffer {
    let mut pixels = vec![0_u8; width * height];
    rng.fill(&mut pixels);
    RasterBuffer::from_raw(pixels, width, height, 255).unwrap()
}

#[test]
fn matches_reference_on_random_images() {
    let mut rng = WyRand::new_seed(7);

    for _ in 0..20 {
        let width = rng.generate_range(3_usize..64);
        let height = rng.generate_range(3_usize..64);
        let workers = rng.generate_range(1_usize..9);
        let image = random_image(width, height, &mut rng);

        for policy in [OverflowPolicy::Saturate, OverflowPolicy::Wrap] {
            let engine = SobelEngine::new(
                SobelOptions::default()
                    .set_num_threads(workers)
                    .set_overflow_policy(policy)
            );
            let edges = engine.apply(&image).unwrap();

            assert_eq!(
                edges,
                reference_sobel(&image, policy),
                "{width}x{height} with {workers} workers and {policy:?}"
            );
        }
    }
}

#[test]
fn low_contrast_gradient_keeps_low_chroma() {
    // horizontal ramp, every interior pixel sees the same gradient
    let (width, height) = (12, 9);
    let pixels = (0..height)
        .flat_map(|_| (0..width).map(|x| x as u8))
        .collect::<Vec<u8>>();
    let image = RasterBuffer::from_raw(pixels, width, height, 11).unwrap();

    let edges = sobel_imageprocs::sobel::apply(&image, 3).unwrap();

    // gx = 2 * (1 + 2 + 1)
    assert!(edges.pixels().iter().all(|x| *x == 8));
    assert_eq!(edges.chroma(), 8);
}

#[test]
fn tall_and_wide_images() {
    let mut rng = WyRand::new_seed(99);

    for (width, height) in [(3, 200), (200, 3)] {
        let image = random_image(width, height, &mut rng);
        let edges = sobel_imageprocs::sobel::apply(&image, 16).unwrap();

        assert_eq!(edges.dimensions(), (width - 2, height - 2));
        assert_eq!(edges, reference_sobel(&image, OverflowPolicy::Saturate));
    }
}
