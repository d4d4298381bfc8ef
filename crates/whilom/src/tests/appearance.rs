use crate::appearance::{Appearance, invert_rgba};

use image::{Rgba, RgbaImage};

/// WHAT: A successful "Dark" read maps to the dark appearance
/// WHY: This is the only signal that dark mode is active
#[test]
fn given_dark_output_when_parsing_then_dark() {
    assert_eq!(
        Appearance::from_defaults_read(true, "Dark\n"),
        Appearance::Dark
    );
}

/// WHAT: A failed read maps to the light appearance
/// WHY: The global default does not exist in light mode, so the read fails
#[test]
fn given_failed_read_when_parsing_then_light() {
    assert_eq!(
        Appearance::from_defaults_read(false, ""),
        Appearance::Light
    );
}

/// WHAT: A successful read with unexpected output maps to light
/// WHY: Unknown styles must not trigger inversion
#[test]
fn given_unexpected_output_when_parsing_then_light() {
    assert_eq!(
        Appearance::from_defaults_read(true, "Auto\n"),
        Appearance::Light
    );
}

/// WHAT: Inversion flips RGB channels and preserves alpha
/// WHY: Recoloring must not change icon transparency
#[test]
fn given_pixel_when_inverted_then_rgb_flipped_alpha_kept() {
    // Given: A single semi-transparent pixel
    let mut image = RgbaImage::from_pixel(1, 1, Rgba([10, 20, 30, 128]));

    // When: Inverting for dark appearance
    invert_rgba(&mut image);

    // Then: RGB inverted, alpha untouched
    assert_eq!(image.get_pixel(0, 0), &Rgba([245, 235, 225, 128]));
}

/// WHAT: Double inversion restores the original image
/// WHY: Flipping appearance back and forth must not drift colors
#[test]
fn given_image_when_inverted_twice_then_unchanged() {
    let original = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 4]));
    let mut image = original.clone();

    invert_rgba(&mut image);
    invert_rgba(&mut image);

    assert_eq!(image, original);
}
