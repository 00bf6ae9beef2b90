/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use sobel_core::colorspace::ColorSpace;

/// Header values of a decoded file
#[derive(Copy, Clone, Debug)]
pub struct HeaderInfo {
    pub width:      usize,
    pub height:     usize,
    pub chroma:     u8,
    pub colorspace: ColorSpace
}

pub struct Metadata<'a> {
    file:     &'a Path,
    metadata: HeaderInfo
}

impl<'a> Metadata<'a> {
    pub fn new(file: &'a Path, metadata: HeaderInfo) -> Metadata<'a> {
        Metadata { file, metadata }
    }
}

impl Serialize for HeaderInfo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("HeaderInfo", 4)?;

        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("chroma", &self.chroma)?;
        state.serialize_field("colorspace", &self.colorspace)?;

        state.end()
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ImageMetadata", 2)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("metadata", &self.metadata)?;

        state.end()
    }
}
