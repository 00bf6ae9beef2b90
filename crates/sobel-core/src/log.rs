/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Logging macros used when the `log` feature is disabled.
//!
//! `trace!`, `debug!`, `info!` and `warn!` accept the same arguments as
//! the `log` crate macros and expand to nothing, so callers import them
//! from `sobel_core::log` regardless of the feature.

// #[macro_export] always places the macro at the crate root,
// the re-export below gives it a path under this module.
pub use crate::__discard_log as debug;
pub use crate::__discard_log as info;
pub use crate::__discard_log as trace;
pub use crate::__discard_log as warn;

#[doc(hidden)]
#[macro_export]
macro_rules! __discard_log {
    ($($arg:tt)+) => {};
}
