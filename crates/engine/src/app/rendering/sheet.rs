use std::path::{Path, PathBuf};

use image::ImageReader;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("failed to open sprite sheet {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode sprite sheet {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("sprite sheet buffer length {actual} does not match {width}x{height} rgba")]
    BufferMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },
}

/// A rectangular region of a sheet, in sheet pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Decoded RGBA8 sprite sheet held in memory for frame blits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSheet {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl SpriteSheet {
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, SheetError> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(SheetError::BufferMismatch {
                width,
                height,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn load(path: &Path) -> Result<Self, SheetError> {
        let reader = ImageReader::open(path).map_err(|source| SheetError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = reader.decode().map_err(|source| SheetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let image = decoded.to_rgba8();
        Self::from_rgba(image.width(), image.height(), image.into_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Sub-rectangle for a fixed-size grid cell of the sheet, by column and
    /// row. Returns `None` when the cell falls outside the sheet.
    pub fn cell(&self, col: u32, row: u32, cell_size: u32) -> Option<SheetRect> {
        let x = col.checked_mul(cell_size)?;
        let y = row.checked_mul(cell_size)?;
        if x.checked_add(cell_size)? > self.width || y.checked_add(cell_size)? > self.height {
            return None;
        }
        Some(SheetRect {
            x,
            y,
            width: cell_size,
            height: cell_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_sheet(width: u32, height: u32, color: [u8; 4]) -> SpriteSheet {
        let mut rgba = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            rgba.extend_from_slice(&color);
        }
        SpriteSheet::from_rgba(width, height, rgba).expect("valid sheet")
    }

    #[test]
    fn from_rgba_rejects_wrong_buffer_length() {
        let result = SpriteSheet::from_rgba(2, 2, vec![0u8; 15]);
        assert!(matches!(
            result,
            Err(SheetError::BufferMismatch { actual: 15, .. })
        ));
    }

    #[test]
    fn cell_indexes_columns_and_rows() {
        let sheet = solid_sheet(128, 128, [1, 2, 3, 255]);
        let rect = sheet.cell(2, 3, 32).expect("in bounds");
        assert_eq!(
            rect,
            SheetRect {
                x: 64,
                y: 96,
                width: 32,
                height: 32,
            }
        );
    }

    #[test]
    fn cell_out_of_bounds_is_none() {
        let sheet = solid_sheet(64, 32, [0, 0, 0, 255]);
        assert!(sheet.cell(2, 0, 32).is_none());
        assert!(sheet.cell(0, 1, 32).is_none());
        assert!(sheet.cell(1, 0, 32).is_some());
    }

    #[test]
    fn load_round_trips_an_encoded_png() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("strip.png");
        let mut img = image::RgbaImage::new(4, 2);
        img.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        img.put_pixel(3, 1, image::Rgba([0, 255, 0, 128]));
        img.save(&path).expect("write png");

        let sheet = SpriteSheet::load(&path).expect("load png");
        assert_eq!(sheet.width(), 4);
        assert_eq!(sheet.height(), 2);
        assert_eq!(&sheet.rgba()[0..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn load_missing_file_reports_open_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = SpriteSheet::load(&dir.path().join("nope.png"));
        assert!(matches!(result, Err(SheetError::Open { .. })));
    }
}
