use image::{GrayImage, Luma, Rgb, RgbImage};
use tempfile::tempdir;

use chromaveil_core::media::Picture;
use chromaveil_core::{commands, BitDepth, ChromaveilError, ImageMode, Pixel, RevealOptions};

/// hides `secret` in the last `bits` bits of every channel of `carrier`
fn conceal(carrier: u8, secret: u8, bits: u8) -> u8 {
    let mask = u8::MAX >> (8 - bits);
    (carrier & !mask) | (secret >> (8 - bits))
}

#[test]
fn should_reveal_a_black_and_white_image_from_a_gray_png() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let secret = GrayImage::from_fn(8, 4, |x, y| Luma([if (x + y) % 2 == 0 { 255 } else { 0 }]));
    let carrier = GrayImage::from_fn(8, 4, |x, y| {
        let visible = (x * 30 + y * 7) as u8;
        Luma([conceal(visible, secret.get_pixel(x, y).0[0], 1)])
    });
    let input = temp_dir.path().join("hidden1.png");
    carrier.save(&input).expect("Failed to write carrier");

    let output = commands::reveal(&input, None, RevealOptions::default())
        .expect("Failed to reveal hidden image");

    assert_eq!(output, temp_dir.path().join("hidden1_revealed.png"));
    let revealed = Picture::from_file(&output).expect("Failed to read revealed image");
    assert_eq!(revealed.mode(), &ImageMode::Luma);
    let expected: Vec<Pixel> = secret.pixels().map(Pixel::from).collect();
    assert_eq!(revealed.pixels(), expected.as_slice());
}

#[test]
fn should_reveal_a_black_and_white_image_from_a_gray_bmp() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let carrier = GrayImage::from_fn(4, 2, |x, y| Luma([100 + (x + y * 4) as u8]));
    let input = temp_dir.path().join("hidden1.bmp");
    carrier.save(&input).expect("Failed to write carrier");

    let output = commands::reveal(&input, None, RevealOptions::default())
        .expect("Failed to reveal hidden image");

    assert_eq!(output, temp_dir.path().join("hidden1_revealed.bmp"));
    let revealed = Picture::from_file(&output).expect("Failed to read revealed image");
    assert_eq!(revealed.mode(), &ImageMode::Luma);
    let expected: Vec<Pixel> = (0..8)
        .map(|i| Pixel::Gray(if i % 2 == 0 { 0 } else { 255 }))
        .collect();
    assert_eq!(revealed.pixels(), expected.as_slice());
}

#[test]
fn should_reveal_a_color_image_from_rgb_low_bits() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let carrier = RgbImage::from_fn(5, 3, |x, y| {
        let (x, y) = (x as u8, y as u8);
        Rgb([
            conceal(200, x * 50, 3),
            conceal(13, y * 100, 3),
            conceal(255, 255, 3),
        ])
    });
    let input = temp_dir.path().join("hidden2.png");
    let output = temp_dir.path().join("secret.png");
    carrier.save(&input).expect("Failed to write carrier");

    commands::reveal(&input, Some(&output), RevealOptions::default())
        .expect("Failed to reveal hidden image");

    let revealed = Picture::from_file(&output).expect("Failed to read revealed image");
    assert_eq!(revealed.dimensions(), (5, 3));
    assert_eq!(revealed.mode(), &ImageMode::Rgb);
    for (i, p) in revealed.pixels().iter().enumerate() {
        let (x, y) = ((i % 5) as u16, (i / 5) as u16);
        let r = (x * 50 >> 5) * 255 / 7;
        let g = (y * 100 >> 5) * 255 / 7;
        assert_eq!(*p, Pixel::Rgb(r as u8, g as u8, 255), "pixel ({x}, {y})");
    }
}

#[test]
fn should_honour_custom_bit_depths() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let input = temp_dir.path().join("two_bits.png");
    GrayImage::from_pixel(2, 2, Luma([0b1010_1110]))
        .save(&input)
        .expect("Failed to write carrier");
    let options = RevealOptions::default().with_luma_bits(BitDepth::new(2).unwrap());

    let output = commands::reveal(&input, None, options).expect("Failed to reveal hidden image");

    let revealed = Picture::from_file(&output).expect("Failed to read revealed image");
    assert_eq!(revealed.pixels(), &[Pixel::Gray(170); 4]);
}

#[test]
fn should_leave_no_output_behind_when_the_format_is_not_writable() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let input = temp_dir.path().join("hidden1.png");
    let output = temp_dir.path().join("secret.gif");
    GrayImage::from_pixel(2, 2, Luma([1]))
        .save(&input)
        .expect("Failed to write carrier");

    let result = commands::reveal(&input, Some(&output), RevealOptions::default());

    assert!(matches!(result, Err(ChromaveilError::ImageEncodingError)));
    assert!(!output.exists());
}
