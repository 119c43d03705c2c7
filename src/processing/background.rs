//! Near-black background removal
//!
//! Pixels whose red, green and blue channels are all below the threshold
//! are treated as background and replaced with fully transparent white.
//! The result is then cropped to the smallest rectangle holding every
//! pixel that is not fully transparent.

use image::{DynamicImage, Rgba, RgbaImage};
use log::{debug, info};

use super::region::Region;

/// Channel value below which a pixel counts as background
pub const BACKGROUND_THRESHOLD: u8 = 50;

/// Value written in place of background pixels
const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

fn is_background(pixel: &Rgba<u8>) -> bool {
    pixel[0] < BACKGROUND_THRESHOLD
        && pixel[1] < BACKGROUND_THRESHOLD
        && pixel[2] < BACKGROUND_THRESHOLD
}

/// Convert an image to RGBA and make its near-black pixels transparent
///
/// # Arguments
/// * `image` - The image to clear
///
/// # Returns
/// An RGBA copy of the image; non-background pixels are unchanged
pub fn clear_background(image: &DynamicImage) -> RgbaImage {
    let mut rgba = image.to_rgba8();
    let mut cleared = 0u64;

    for pixel in rgba.pixels_mut() {
        if is_background(pixel) {
            *pixel = TRANSPARENT_WHITE;
            cleared += 1;
        }
    }

    debug!("Cleared {} of {} pixels", cleared, u64::from(rgba.width()) * u64::from(rgba.height()));
    rgba
}

/// Find the bounding box of all pixels with non-zero alpha
///
/// # Returns
/// The enclosing region, or `None` when every pixel is fully transparent
pub fn bounding_box(image: &RgbaImage) -> Option<Region> {
    let mut left = u32::MAX;
    let mut top = u32::MAX;
    let mut right = 0u32;
    let mut bottom = 0u32;
    let mut found = false;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        found = true;
        left = left.min(x);
        top = top.min(y);
        right = right.max(x + 1);
        bottom = bottom.max(y + 1);
    }

    if found {
        Some(Region::from_corners(left, top, right, bottom))
    } else {
        None
    }
}

/// Clear the background of an image and crop it to the visible content
///
/// When nothing visible remains the full-size transparent image is
/// returned uncropped.
pub fn remove_background(image: &DynamicImage) -> RgbaImage {
    let cleared = clear_background(image);

    match bounding_box(&cleared) {
        Some(bbox) => {
            info!("Cropping {}x{} image to {}", cleared.width(), cleared.height(), bbox);
            image::imageops::crop_imm(&cleared, bbox.x, bbox.y, bbox.width, bbox.height).to_image()
        }
        None => {
            info!("No visible content in {}x{} image, skipping crop", cleared.width(), cleared.height());
            cleared
        }
    }
}
