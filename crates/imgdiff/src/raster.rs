use std::fmt;
use std::iter::FusedIterator;

use image::{Rgba, RgbaImage};

/// Rectangular extent of a raster: origin plus size.
///
/// Two rasters can only be diffed when their bounds are equal, origin
/// included. Same size at a different origin is still a mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Zero-origin bounds of the given size.
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Same size, moved to the origin.
    pub fn normalized(&self) -> Self {
        Self::from_size(self.width, self.height)
    }

    /// Every coordinate inside the bounds, row by row, left to right.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            bounds: *self,
            col: 0,
            row: 0,
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)?;
        if self.x != 0 || self.y != 0 {
            write!(f, " at ({}, {})", self.x, self.y)?;
        }
        Ok(())
    }
}

/// Row-major walk over a [`Bounds`], yielding absolute `(x, y)` pairs.
///
/// Coordinates are `i64` so an origin near `i32::MAX` plus a wide raster
/// never overflows. Finite and single-pass: once exhausted it keeps
/// returning `None`.
#[derive(Debug, Clone)]
pub struct Coordinates {
    bounds: Bounds,
    col: u32,
    row: u32,
}

impl Coordinates {
    fn remaining(&self) -> u64 {
        if self.bounds.width == 0 || self.row >= self.bounds.height {
            return 0;
        }
        let rows_left = (self.bounds.height - self.row) as u64;
        rows_left * self.bounds.width as u64 - self.col as u64
    }
}

impl Iterator for Coordinates {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.bounds.width == 0 || self.row >= self.bounds.height {
            return None;
        }
        let item = (
            self.bounds.x as i64 + self.col as i64,
            self.bounds.y as i64 + self.row as i64,
        );
        self.col += 1;
        if self.col == self.bounds.width {
            self.col = 0;
            self.row += 1;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Coordinates {}

/// Read access to a grid of 8-bit RGBA pixels.
pub trait Raster {
    fn bounds(&self) -> Bounds;

    /// Pixel at absolute coordinates. Panics outside [`Raster::bounds`].
    fn pixel(&self, x: i64, y: i64) -> Rgba<u8>;
}

impl Raster for RgbaImage {
    fn bounds(&self) -> Bounds {
        Bounds::from_size(self.width(), self.height())
    }

    fn pixel(&self, x: i64, y: i64) -> Rgba<u8> {
        *self.get_pixel(x as u32, y as u32)
    }
}

/// A raster placed at a non-zero origin.
#[derive(Debug, Clone)]
pub struct Offset<R> {
    x: i32,
    y: i32,
    inner: R,
}

impl<R: Raster> Offset<R> {
    /// `None` when the shifted origin does not fit in an `i32`.
    pub fn new(inner: R, x: i32, y: i32) -> Option<Self> {
        let bounds = inner.bounds();
        bounds.x.checked_add(x)?;
        bounds.y.checked_add(y)?;
        Some(Self { x, y, inner })
    }
}

impl<R: Raster> Raster for Offset<R> {
    fn bounds(&self) -> Bounds {
        let inner = self.inner.bounds();
        Bounds::new(
            inner.x + self.x,
            inner.y + self.y,
            inner.width,
            inner.height,
        )
    }

    fn pixel(&self, x: i64, y: i64) -> Rgba<u8> {
        self.inner.pixel(x - self.x as i64, y - self.y as i64)
    }
}
