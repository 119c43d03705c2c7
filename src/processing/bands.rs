//! Horizontal band layout
//!
//! The sheet holds three icons stacked vertically. Its height is divided
//! by three; the bottom band runs to the last row and so absorbs any
//! remainder.

use std::fmt;

use image::DynamicImage;
use log::debug;

use super::region::Region;

/// One of the three horizontal slices of the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Top,
    Middle,
    Bottom,
}

impl Band {
    /// All bands, top to bottom
    pub const ALL: [Band; 3] = [Band::Top, Band::Middle, Band::Bottom];

    /// Output file name for the icon held in this band
    pub fn file_name(&self) -> &'static str {
        match self {
            Band::Top => "house-3d.png",
            Band::Middle => "balloon-3d.png",
            Band::Bottom => "bell-3d.png",
        }
    }

    /// Position of the band counted from the top
    pub fn index(&self) -> u32 {
        match self {
            Band::Top => 0,
            Band::Middle => 1,
            Band::Bottom => 2,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Band::Top => "top",
            Band::Middle => "middle",
            Band::Bottom => "bottom",
        };
        write!(f, "{}", name)
    }
}

/// Compute the rows covered by each band
///
/// # Arguments
/// * `width` - Width of the sheet; every band spans it completely
/// * `height` - Height of the sheet
///
/// # Returns
/// The bands paired with their regions, top to bottom
pub fn band_regions(width: u32, height: u32) -> [(Band, Region); 3] {
    let part = height / 3;

    Band::ALL.map(|band| {
        let top = part * band.index();
        let bottom = match band {
            Band::Bottom => height,
            _ => top + part,
        };
        (band, Region::from_corners(0, top, width, bottom))
    })
}

/// Cut the sheet into its three bands
pub fn split_bands(image: &DynamicImage) -> Vec<(Band, DynamicImage)> {
    band_regions(image.width(), image.height())
        .into_iter()
        .map(|(band, region)| {
            debug!("Cropping {} band: {}", band, region);
            let cropped = image.crop_imm(region.x, region.y, region.width, region.height);
            (band, cropped)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_even_height_gives_equal_bands() {
        let regions = band_regions(300, 900);
        let heights: Vec<u32> = regions.iter().map(|(_, r)| r.height).collect();
        assert_eq!(heights, vec![300, 300, 300]);
        assert_eq!(regions[1].1.y, 300);
        assert_eq!(regions[2].1.y, 600);
        assert!(regions.iter().all(|(_, r)| r.width == 300 && r.x == 0));
    }

    #[test]
    fn test_bottom_band_takes_remainder() {
        let regions = band_regions(10, 11);
        assert_eq!(regions[0].1, Region::new(0, 0, 10, 3));
        assert_eq!(regions[1].1, Region::new(0, 3, 10, 3));
        assert_eq!(regions[2].1, Region::new(0, 6, 10, 5));
    }

    #[test]
    fn test_bands_cover_every_row_once() {
        for height in 0..20u32 {
            let regions = band_regions(4, height);
            assert_eq!(regions[0].1.y, 0);
            assert_eq!(regions[0].1.end_y(), regions[1].1.y);
            assert_eq!(regions[1].1.end_y(), regions[2].1.y);
            assert_eq!(regions[2].1.end_y(), height);
        }
    }

    #[test]
    fn test_short_image_leaves_upper_bands_empty() {
        let regions = band_regions(5, 2);
        assert!(regions[0].1.is_empty());
        assert!(regions[1].1.is_empty());
        assert_eq!(regions[2].1.height, 2);
    }

    #[test]
    fn test_file_names_follow_band_order() {
        let names: Vec<&str> = Band::ALL.iter().map(|b| b.file_name()).collect();
        assert_eq!(names, vec!["house-3d.png", "balloon-3d.png", "bell-3d.png"]);
    }

    #[test]
    fn test_split_bands_copies_band_pixels() {
        let mut sheet = RgbaImage::new(2, 6);
        for y in 0..6 {
            let shade = (y * 40) as u8;
            for x in 0..2 {
                sheet.put_pixel(x, y, Rgba([shade, shade, shade, 255]));
            }
        }

        let bands = split_bands(&DynamicImage::ImageRgba8(sheet));
        assert_eq!(bands.len(), 3);

        let (band, middle) = &bands[1];
        assert_eq!(*band, Band::Middle);
        assert_eq!(middle.height(), 2);
        let middle = middle.to_rgba8();
        assert_eq!(middle.get_pixel(0, 0), &Rgba([80, 80, 80, 255]));
        assert_eq!(middle.get_pixel(1, 1), &Rgba([120, 120, 120, 255]));
    }
}
