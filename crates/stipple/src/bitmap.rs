//! Boolean rasters of placed points and their plain-text serialization.
//!
//! The text form is a 1-bit graymap variant: a `P2 <width> <height> 1` header line
//! followed by one `0`/`1` token per pixel in row-major order, each token followed by a
//! single space.
use std::io::Write;

use glam::IVec2;
use tracing::warn;

use crate::domain::Domain;
use crate::error::{Error, Result};

/// A grid of flags aligned to a domain origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    origin: IVec2,
    width: usize,
    height: usize,
    data: Vec<bool>,
}

impl Bitmap {
    /// Create an all-clear bitmap covering `domain`.
    pub fn new(domain: &Domain) -> Self {
        let width = domain.width() as usize;
        let height = domain.height() as usize;
        Self {
            origin: domain.min,
            width,
            height,
            data: vec![false; width * height],
        }
    }

    /// Flag every point inside `domain`. Points outside are skipped with a warning.
    pub fn from_points(domain: &Domain, points: &[IVec2]) -> Self {
        let mut bitmap = Self::new(domain);
        for &p in points {
            if !bitmap.set(p) {
                warn!("Point {} lies outside the bitmap; skipping.", p);
            }
        }
        bitmap
    }

    /// Get the size of the bitmap as `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn origin(&self) -> IVec2 {
        self.origin
    }

    #[inline]
    fn index(&self, p: IVec2) -> Option<usize> {
        let rel = p - self.origin;
        if rel.x < 0 || rel.y < 0 || rel.x as usize >= self.width || rel.y as usize >= self.height
        {
            return None;
        }
        Some(rel.x as usize + self.width * rel.y as usize)
    }

    /// Get the flag at a domain coordinate, `false` outside the bitmap.
    pub fn get(&self, p: IVec2) -> bool {
        self.index(p).is_some_and(|i| self.data[i])
    }

    /// Flag a domain coordinate. Returns `false` if it lies outside the bitmap.
    pub fn set(&mut self, p: IVec2) -> bool {
        match self.index(p) {
            Some(i) => {
                self.data[i] = true;
                true
            }
            None => false,
        }
    }

    /// Number of flagged pixels.
    pub fn count_set(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// Flagged domain coordinates in row-major order.
    pub fn points(&self) -> impl Iterator<Item = IVec2> + '_ {
        let width = self.width;
        let origin = self.origin;
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v)
            .map(move |(i, _)| origin + IVec2::new((i % width) as i32, (i / width) as i32))
    }

    /// Write the `P2 <w> <h> 1` text form.
    pub fn write_p2<W: Write>(&self, mut out: W) -> Result<()> {
        writeln!(out, "P2 {} {} 1", self.width, self.height)?;
        let mut buf = Vec::with_capacity(self.data.len() * 2);
        for &v in &self.data {
            buf.extend_from_slice(if v { b"1 " } else { b"0 " });
        }
        out.write_all(&buf)?;
        out.flush()?;
        Ok(())
    }

    pub fn to_p2_string(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_p2(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Parse the text form back into a bitmap anchored at the origin.
    pub fn parse_p2(text: &str) -> Result<Self> {
        let mut tokens = text.split_ascii_whitespace();

        match tokens.next() {
            Some("P2") => {}
            other => {
                return Err(Error::Parse(format!(
                    "expected 'P2' magic, found {other:?}"
                )))
            }
        }
        let width = parse_header_field(tokens.next(), "width")?;
        let height = parse_header_field(tokens.next(), "height")?;
        let max_value = parse_header_field(tokens.next(), "max value")?;
        if max_value != 1 {
            return Err(Error::Parse(format!(
                "expected max value 1, found {max_value}"
            )));
        }

        let pixels = width.checked_mul(height).ok_or_else(|| {
            Error::Parse(format!("pixel count overflows for {width}x{height}"))
        })?;

        // Every pixel token takes at least two bytes, so the text bounds the reservation.
        let mut data = Vec::with_capacity(pixels.min(text.len() / 2));
        for token in tokens {
            match token {
                "0" => data.push(false),
                "1" => data.push(true),
                other => return Err(Error::Parse(format!("unexpected pixel token '{other}'"))),
            }
        }
        if data.len() != pixels {
            return Err(Error::Parse(format!(
                "expected {pixels} pixels for {width}x{height}, found {}",
                data.len()
            )));
        }

        Ok(Self {
            origin: IVec2::ZERO,
            width,
            height,
            data,
        })
    }
}

fn parse_header_field(token: Option<&str>, name: &str) -> Result<usize> {
    let token = token.ok_or_else(|| Error::Parse(format!("missing {name} in header")))?;
    token
        .parse()
        .map_err(|_| Error::Parse(format!("invalid {name} '{token}' in header")))
}
