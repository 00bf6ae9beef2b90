/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Multithreaded Sobel edge detection
//!
//! The filter produces the gradient magnitude of every interior pixel,
//! so a `W x H` source yields a `(W-2) x (H-2)` result whose chroma is
//! the largest magnitude stored.
//!
//! Border pixels are not part of the output, there is no padding.
use std::io;
use std::num::NonZeroUsize;
use std::thread;
use std::time::Instant;

use sobel_core::log::{debug, info, trace};
use sobel_core::raster::RasterBuffer;

use crate::errors::SobelErrors;
use crate::kernel::{magnitude, OverflowPolicy};
use crate::partition::{partition_rows, RowRange};

/// Options that influence how the filter runs
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SobelOptions {
    num_threads: usize,
    overflow:    OverflowPolicy
}

impl Default for SobelOptions {
    fn default() -> Self {
        SobelOptions {
            num_threads: thread::available_parallelism().map_or(1, NonZeroUsize::get),
            overflow:    OverflowPolicy::default()
        }
    }
}

impl SobelOptions {
    /// Number of worker threads the filter will try to use
    ///
    /// Defaults to the available parallelism of the machine
    pub const fn get_num_threads(&self) -> usize {
        self.num_threads
    }

    /// Set the number of worker threads
    ///
    /// The filter never uses more workers than the result has rows
    #[must_use]
    pub fn set_num_threads(mut self, threads: usize) -> Self {
        self.num_threads = threads;
        self
    }

    pub const fn get_overflow_policy(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Set how magnitudes above 255 are stored
    #[must_use]
    pub fn set_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow = policy;
        self
    }
}

/// The Sobel filter engine
///
/// # Example
/// ```
/// use sobel_core::raster::RasterBuffer;
/// use sobel_imageprocs::sobel::{SobelEngine, SobelOptions};
///
/// let mut image = RasterBuffer::allocate(6, 4).unwrap();
/// for row in 0..4 {
///     for col in 3..6 {
///         image.set(row, col, 10);
///     }
/// }
/// let engine = SobelEngine::new(SobelOptions::default().set_num_threads(2));
/// let edges = engine.apply(&image).unwrap();
///
/// assert_eq!(edges.dimensions(), (4, 2));
/// assert_eq!(edges.row(0), &[0, 40, 40, 0]);
/// assert_eq!(edges.chroma(), 40);
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct SobelEngine {
    options: SobelOptions
}

impl SobelEngine {
    pub const fn new(options: SobelOptions) -> SobelEngine {
        SobelEngine { options }
    }

    pub const fn get_options(&self) -> &SobelOptions {
        &self.options
    }

    /// Run the filter over `source` returning a new raster
    ///
    /// # Errors
    /// - [`SobelErrors::TooSmallImage`]: The source is narrower or shorter than 3 pixels
    /// - [`SobelErrors::ZeroWorkers`]: The engine was configured with zero threads
    /// - [`SobelErrors::ThreadSpawn`], [`SobelErrors::WorkerPanicked`]: A worker failed,
    ///   no partial result is returned
    pub fn apply(&self, source: &RasterBuffer) -> Result<RasterBuffer, SobelErrors> {
        let mut target = RasterBuffer::empty();
        self.apply_into(source, &mut target)?;
        Ok(target)
    }

    /// Run the filter over `source` storing the result in `target`
    ///
    /// `target` is reset before any work starts, so on error it is left empty.
    ///
    /// # Errors
    /// See [`SobelEngine::apply`]
    pub fn apply_into(
        &self, source: &RasterBuffer, target: &mut RasterBuffer
    ) -> Result<(), SobelErrors> {
        target.reset();

        let (width, height) = source.dimensions();

        if width < 3 || height < 3 {
            return Err(SobelErrors::TooSmallImage(width, height));
        }
        if self.options.num_threads == 0 {
            return Err(SobelErrors::ZeroWorkers);
        }
        let (out_width, out_height) = (width - 2, height - 2);
        let ranges = partition_rows(height, self.options.num_threads);

        if ranges.len() < self.options.num_threads {
            debug!(
                "Requested {} workers but only {} rows are available, using {}",
                self.options.num_threads,
                out_height,
                ranges.len()
            );
        }
        info!(
            "Sobel {}x{} -> {}x{} with {} worker(s)",
            width,
            height,
            out_width,
            out_height,
            ranges.len()
        );
        let start = Instant::now();

        let mut pixels = vec![0_u8; out_width * out_height];
        let policy = self.options.overflow;

        let chroma = run_workers(&ranges, &mut pixels, out_width, |range, out| {
            convolve_rows(source, out, range, policy)
        })?;

        info!(
            "Sobel finished in {} µs, chroma {}",
            start.elapsed().as_micros(),
            chroma
        );

        *target = RasterBuffer::from_raw(pixels, out_width, out_height, chroma)?;
        Ok(())
    }
}

/// Run the filter over `source` with `worker_count` threads and saturating overflow
///
/// # Errors
/// See [`SobelEngine::apply`]
pub fn apply(source: &RasterBuffer, worker_count: usize) -> Result<RasterBuffer, SobelErrors> {
    SobelEngine::new(SobelOptions::default().set_num_threads(worker_count)).apply(source)
}

/// Fill `out` with the magnitudes of the source rows in `range`
///
/// `out` holds exactly the output rows of `range`.
/// Returns the largest value written.
fn convolve_rows(
    source: &RasterBuffer, out: &mut [u8], range: RowRange, policy: OverflowPolicy
) -> u8 {
    let width = source.width();
    let out_width = width - 2;
    let mut local_max = 0;

    for (row, out_row) in (range.start_row..range.end_row).zip(out.chunks_exact_mut(out_width)) {
        let above = source.row(row - 1);
        let current = source.row(row);
        let below = source.row(row + 1);

        for (col, pixel) in (1..width - 1).zip(out_row.iter_mut()) {
            #[rustfmt::skip]
            let window = [
                above[col - 1],   above[col],   above[col + 1],
                current[col - 1], current[col], current[col + 1],
                below[col - 1],   below[col],   below[col + 1]
            ];
            let value = policy.store(magnitude(&window));

            *pixel = value;
            local_max = local_max.max(value);
        }
    }
    local_max
}

/// Hand each range its own slice of `out` and run `work` on a scoped thread per range.
///
/// Returns the maximum of the values each worker returned.
fn run_workers<F>(
    ranges: &[RowRange], out: &mut [u8], row_len: usize, work: F
) -> Result<u8, SobelErrors>
where
    F: Fn(RowRange, &mut [u8]) -> u8 + Sync
{
    run_workers_with(ranges, out, row_len, work, worker_builder)
}

/// Thread configuration for worker `index`
fn worker_builder(index: usize) -> io::Result<thread::Builder> {
    Ok(thread::Builder::new().name(format!("sobel-worker-{index}")))
}

/// [`run_workers`] with the thread configuration supplied by `builder`
///
/// Every worker that was started is joined before returning, even when
/// spawning a later one failed or an earlier one panicked.
fn run_workers_with<F, B>(
    ranges: &[RowRange], out: &mut [u8], row_len: usize, work: F, mut builder: B
) -> Result<u8, SobelErrors>
where
    F: Fn(RowRange, &mut [u8]) -> u8 + Sync,
    B: FnMut(usize) -> io::Result<thread::Builder>
{
    let work = &work;
    let mut remaining = out;

    thread::scope(|s| {
        let mut handles = Vec::with_capacity(ranges.len());
        let mut spawn_error = None;

        for (index, range) in ranges.iter().copied().enumerate() {
            let (chunk, rest) = std::mem::take(&mut remaining).split_at_mut(range.len() * row_len);
            remaining = rest;

            let spawned =
                builder(index).and_then(|b| b.spawn_scoped(s, move || work(range, chunk)));

            match spawned {
                Ok(handle) => {
                    trace!("Spawned worker {} for rows {:?}", index, range.output_rows());
                    handles.push((index, handle));
                }
                Err(err) => {
                    spawn_error = Some(err);
                    break;
                }
            }
        }

        let mut result = Ok(0);

        for (index, handle) in handles {
            match handle.join() {
                Ok(local_max) => {
                    if let Ok(max) = &mut result {
                        *max = local_max.max(*max);
                    }
                }
                Err(_) => {
                    if result.is_ok() {
                        result = Err(SobelErrors::WorkerPanicked(index));
                    }
                }
            }
        }
        if let Some(err) = spawn_error {
            return Err(SobelErrors::ThreadSpawn(err));
        }
        result
    })
}

#[cfg(test)]
mod tests {
    use nanorand::{Rng, WyRand};
    use sobel_core::errors::ErrorKind;
    use sobel_core::raster::RasterBuffer;

    use crate::errors::SobelErrors;
    use crate::kernel::OverflowPolicy;
    use crate::partition::partition_rows;
    use crate::sobel::{
        apply, run_workers, run_workers_with, worker_builder, SobelEngine, SobelOptions
    };

    fn random_image(width: usize, height: usize, seed: u64) -> RasterBuffer {
        let mut pixels = vec![0_u8; width * height];
        WyRand::new_seed(seed).fill(&mut pixels);
        RasterBuffer::from_raw(pixels, width, height, 255).unwrap()
    }

    #[test]
    fn uniform_image_has_no_edges() {
        let image = RasterBuffer::fill(100, 5, 5).unwrap();
        let edges = apply(&image, 2).unwrap();

        assert_eq!(edges.dimensions(), (3, 3));
        assert_eq!(edges.pixels(), &[0; 9]);
        assert_eq!(edges.chroma(), 0);
    }

    #[test]
    fn smallest_image() {
        let mut image = RasterBuffer::allocate(3, 3).unwrap();
        image.set(0, 2, 255);
        image.set(1, 2, 255);
        image.set(2, 2, 255);

        let edges = apply(&image, 4).unwrap();
        assert_eq!(edges.dimensions(), (1, 1));
        // gx = 4 * 255
        assert_eq!(edges.pixels(), &[255]);
        assert_eq!(edges.chroma(), 255);
    }

    #[test]
    fn same_result_for_any_worker_count() {
        let image = random_image(37, 29, 0xDEAD);
        let expected = apply(&image, 1).unwrap();

        for workers in 2..=30 {
            let edges = apply(&image, workers).unwrap();
            assert_eq!(edges, expected, "{workers} workers differ");
        }
    }

    #[test]
    fn chroma_is_largest_pixel() {
        for seed in 0..8 {
            let image = random_image(16, 11, seed);
            let edges = apply(&image, 3).unwrap();
            assert_eq!(edges.chroma(), edges.max_pixel());
        }
    }

    #[test]
    fn too_small_images() {
        for (width, height) in [(2, 10), (10, 2), (0, 0), (1, 1)] {
            let image = RasterBuffer::allocate(width, height).unwrap();
            let err = apply(&image, 1).unwrap_err();

            assert!(matches!(err, SobelErrors::TooSmallImage(w, h) if w == width && h == height));
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn zero_workers() {
        let image = RasterBuffer::allocate(4, 4).unwrap();
        let err = apply(&image, 0).unwrap_err();

        assert!(matches!(err, SobelErrors::ZeroWorkers));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn remainder_rows_are_filled() {
        // 12 output rows over 5 workers, the last worker takes 4
        let mut image = RasterBuffer::allocate(6, 14).unwrap();
        for row in 0..14 {
            for col in 3..6 {
                image.set(row, col, 50);
            }
        }
        let edges = apply(&image, 5).unwrap();

        for row in 0..12 {
            assert_eq!(edges.row(row), &[0, 200, 200, 0], "row {row}");
        }
        assert_eq!(edges.chroma(), 200);
    }

    #[test]
    fn overflow_policies() {
        let mut image = RasterBuffer::allocate(3, 3).unwrap();
        // gx = 1020, gy = 510, magnitude 1141
        for (row, col) in [(0, 2), (1, 2), (2, 1), (2, 2)] {
            image.set(row, col, 255);
        }
        let saturate = SobelEngine::new(SobelOptions::default().set_num_threads(1));
        let wrap = SobelEngine::new(
            SobelOptions::default()
                .set_num_threads(1)
                .set_overflow_policy(OverflowPolicy::Wrap)
        );

        assert_eq!(saturate.apply(&image).unwrap().pixels(), &[255]);

        let wrapped = wrap.apply(&image).unwrap();
        assert_eq!(wrapped.pixels(), &[(1141 % 256) as u8]);
        assert_eq!(wrapped.chroma(), (1141 % 256) as u8);
    }

    #[test]
    fn apply_into_reuses_target() {
        let engine = SobelEngine::new(SobelOptions::default().set_num_threads(2));
        let mut target = RasterBuffer::fill(9, 20, 20).unwrap();

        engine
            .apply_into(&RasterBuffer::fill(1, 4, 5).unwrap(), &mut target)
            .unwrap();
        assert_eq!(target.dimensions(), (2, 3));
        assert_eq!(target.chroma(), 0);

        let err = engine.apply_into(&RasterBuffer::allocate(2, 2).unwrap(), &mut target);
        assert!(err.is_err());
        assert!(target.is_empty());
        assert_eq!(target.dimensions(), (0, 0));
    }

    #[test]
    fn default_options() {
        let options = SobelOptions::default();
        assert!(options.get_num_threads() >= 1);
        assert_eq!(options.get_overflow_policy(), OverflowPolicy::Saturate);
    }

    #[test]
    fn workers_get_disjoint_slices() {
        let ranges = partition_rows(10, 3);
        let mut out = vec![0_u8; 8 * 4];

        let max = run_workers(&ranges, &mut out, 4, |range, chunk| {
            assert_eq!(chunk.len(), range.len() * 4);
            let tag = range.start_row as u8;
            chunk.fill(tag);
            tag
        })
        .unwrap();

        // ranges start at rows 1, 3 and 5 (last one takes 4 rows)
        assert_eq!(&out[..8], &[1; 8]);
        assert_eq!(&out[8..16], &[3; 8]);
        assert_eq!(&out[16..], &[5; 16]);
        assert_eq!(max, 5);
    }

    #[test]
    fn failed_spawn_joins_started_workers() {
        let ranges = partition_rows(10, 4);
        let mut out = vec![0_u8; 8 * 2];

        let result = run_workers_with(
            &ranges,
            &mut out,
            2,
            |_, chunk| {
                chunk.fill(1);
                1
            },
            |index| {
                if index == 2 {
                    return Err(std::io::Error::other("thread limit reached"));
                }
                worker_builder(index)
            }
        );
        let err = result.unwrap_err();

        assert!(matches!(err, SobelErrors::ThreadSpawn(_)));
        assert_eq!(err.kind(), ErrorKind::Concurrency);
        // workers 0 and 1 ran to completion before the error was returned
        assert_eq!(&out[..8], &[1; 8]);
        assert_eq!(&out[8..], &[0; 8]);
    }

    #[test]
    fn panicking_worker_is_reported() {
        let ranges = partition_rows(10, 4);
        let mut out = vec![0_u8; 8 * 2];

        let result = run_workers(&ranges, &mut out, 2, |range, chunk| {
            assert!(range.start_row != 3, "worker failure");
            chunk.fill(1);
            1
        });
        let err = result.unwrap_err();

        assert!(matches!(err, SobelErrors::WorkerPanicked(1)));
        assert_eq!(err.kind(), ErrorKind::Concurrency);
        // the other workers still ran to completion
        assert_eq!(&out[..4], &[1; 4]);
        assert_eq!(&out[8..], &[1; 8]);
    }
}

#[cfg(feature = "log")]
#[cfg(test)]
mod log_tests {
    use std::sync::Mutex;

    use sobel_core::log::{self, Level, LevelFilter, Log, Metadata, Record};
    use sobel_core::raster::RasterBuffer;

    use crate::sobel::apply;

    struct Capture(Mutex<Vec<(Level, String)>>);

    impl Log for Capture {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            self.0
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

    #[test]
    fn timing_and_chroma_logged_at_info() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(LevelFilter::Trace);

        apply(&RasterBuffer::fill(5, 4, 4).unwrap(), 1).unwrap();

        let records = CAPTURE.0.lock().unwrap();
        assert!(records
            .iter()
            .any(|(level, msg)| *level == Level::Info && msg.contains("µs") && msg.contains("chroma")));
    }
}
