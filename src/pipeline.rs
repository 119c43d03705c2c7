//! Split pipeline driver
//!
//! Loads the sheet, cuts it into its three bands, strips the background
//! of each band and writes the results as PNG files. The first failure
//! stops the run; files written before it are left in place.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use log::{debug, info};

use crate::errors::{SplitError, SplitResult};
use crate::processing::{remove_background, split_bands, Band};

/// Create the output directory and any missing parents
pub fn ensure_output_dir(output_dir: &Path) -> SplitResult<()> {
    if output_dir.is_dir() {
        return Ok(());
    }

    info!("Creating output directory {}", output_dir.display());
    fs::create_dir_all(output_dir).map_err(|source| SplitError::OutputDirectory {
        path: output_dir.to_path_buf(),
        source,
    })
}

/// Write a processed band as PNG, replacing any existing file
///
/// The image is encoded in memory first so a failed encode leaves no
/// partial file behind.
pub fn save_band(image: &RgbaImage, path: &Path) -> SplitResult<()> {
    debug!("Writing {}x{} PNG to {}", image.width(), image.height(), path.display());

    let write_failed = |source| SplitError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let mut encoded = Cursor::new(Vec::new());
    image.write_to(&mut encoded, ImageFormat::Png).map_err(write_failed)?;

    fs::write(path, encoded.into_inner())
        .map_err(|e| write_failed(image::ImageError::IoError(e)))
}

/// Run the whole split for one sheet
///
/// # Arguments
/// * `source` - Path of the composite image
/// * `output_dir` - Directory receiving the icons
/// * `on_saved` - Called after each band has been written
///
/// # Returns
/// Paths of the written files, top band first
pub fn process_image<F>(source: &Path, output_dir: &Path, mut on_saved: F) -> SplitResult<Vec<PathBuf>>
where
    F: FnMut(Band, &Path),
{
    ensure_output_dir(output_dir)?;

    info!("Opening {}", source.display());
    let sheet = image::open(source)?;
    info!("Loaded {}x{} sheet", sheet.width(), sheet.height());

    let mut written = Vec::with_capacity(Band::ALL.len());
    for (band, band_image) in split_bands(&sheet) {
        let icon = remove_background(&band_image);
        let path = output_dir.join(band.file_name());

        save_band(&icon, &path)?;
        info!("Saved {} band to {}", band, path.display());

        on_saved(band, &path);
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_ensure_output_dir_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("public").join("icons");

        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
        ensure_output_dir(&nested).unwrap();
    }

    #[test]
    fn test_ensure_output_dir_fails_under_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("taken");
        fs::write(&file, b"x").unwrap();

        let err = ensure_output_dir(&file.join("icons")).unwrap_err();
        assert!(matches!(err, SplitError::OutputDirectory { .. }));
    }

    #[test]
    fn test_missing_source_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let mut calls = 0;

        let result = process_image(&dir.path().join("missing.png"), &out, |_, _| calls += 1);
        assert!(matches!(result, Err(SplitError::ImageError(_))));
        assert_eq!(calls, 0);
        assert!(out.is_dir());
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn test_failed_encode_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("house-3d.png");

        let err = save_band(&RgbaImage::new(6, 0), &path).unwrap_err();
        assert!(matches!(err, SplitError::WriteFailed { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_short_sheet_stops_at_empty_top_band() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("short.png");
        RgbaImage::from_pixel(6, 2, Rgba([200, 200, 200, 255])).save(&source).unwrap();
        let out = dir.path().join("out");

        let mut seen = Vec::new();
        let result = process_image(&source, &out, |band, _| seen.push(band));

        assert!(matches!(result, Err(SplitError::WriteFailed { .. })));
        assert!(seen.is_empty());
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn test_write_failure_keeps_earlier_files() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("sheet.png");
        RgbaImage::from_pixel(6, 9, Rgba([200, 100, 50, 255])).save(&source).unwrap();
        let out = dir.path().join("out");
        fs::create_dir_all(out.join(Band::Middle.file_name())).unwrap();

        let mut seen = Vec::new();
        let result = process_image(&source, &out, |band, _| seen.push(band));

        assert!(matches!(result, Err(SplitError::WriteFailed { .. })));
        assert_eq!(seen, vec![Band::Top]);
        assert!(out.join(Band::Top.file_name()).is_file());
        assert!(!out.join(Band::Bottom.file_name()).exists());
    }

    #[test]
    fn test_observer_sees_bands_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("sheet.png");
        RgbaImage::from_pixel(6, 9, Rgba([200, 100, 50, 255])).save(&source).unwrap();

        let mut seen = Vec::new();
        let written = process_image(&source, dir.path(), |band, _| seen.push(band)).unwrap();

        assert_eq!(seen, vec![Band::Top, Band::Middle, Band::Bottom]);
        assert_eq!(written.len(), 3);
        assert!(written.iter().all(|p| p.is_file()));
    }
}
