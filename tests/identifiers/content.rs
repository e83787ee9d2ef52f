use crate::common::{encode_image, noise_image, test_data::IMAGE_NOISE};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use iscc::codec::{self, CodecError};
use iscc::{
    content_id_image, content_id_image_from_bytes, content_id_mixed, content_id_text,
    ComponentKind, IsccError,
};

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
    tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
    exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.";

fn header_of(code: &str) -> (ComponentKind, bool) {
    ComponentKind::from_header(codec::decode(code).unwrap()[0]).unwrap()
}

#[test]
fn test_text_codes_are_well_formed() {
    let full = content_id_text(LOREM, false).unwrap();
    let partial = content_id_text(LOREM, true).unwrap();
    assert_eq!(full.len(), 13);
    assert_eq!(header_of(&full), (ComponentKind::ContentText, false));
    assert_eq!(header_of(&partial), (ComponentKind::ContentText, true));
    assert_eq!(full[2..], partial[2..]);
}

#[test]
fn test_text_is_deterministic_and_whitespace_tolerant() {
    let reflowed = LOREM.replace(' ', "\u{2003}  ");
    assert_eq!(
        content_id_text(LOREM, false).unwrap(),
        content_id_text(&reflowed, false).unwrap()
    );
}

#[test]
fn test_image_vector_and_formats() {
    let img = noise_image();
    assert_eq!(content_id_image(&img, false).unwrap(), IMAGE_NOISE);

    // PNG is lossless, so the decoded pixels are unchanged
    let bytes = encode_image(&img, ImageFormat::Png);
    assert_eq!(content_id_image_from_bytes(&bytes, false).unwrap(), IMAGE_NOISE);

    // color channels equal to the gray value give the same code
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    assert_eq!(content_id_image(&rgb, false).unwrap(), IMAGE_NOISE);
}

#[test]
fn test_image_fully_transparent_is_black() {
    let clear = DynamicImage::ImageRgba8(RgbaImage::from_pixel(40, 40, Rgba([255, 255, 255, 0])));
    assert_eq!(content_id_image(&clear, false).unwrap(), "CYCCCCCCCCCCC");
}

#[test]
fn test_image_errors() {
    assert!(matches!(
        content_id_image_from_bytes(&[0x89, b'P', b'N', b'G'], false),
        Err(IsccError::Image(_))
    ));
    let empty = DynamicImage::new_luma8(0, 0);
    assert!(matches!(
        content_id_image(&empty, false),
        Err(IsccError::EmptyInput { .. })
    ));
}

#[test]
fn test_mixed_from_generated_codes() {
    let text = content_id_text(LOREM, false).unwrap();
    let image = content_id_image(&noise_image(), false).unwrap();
    let mixed = content_id_mixed(&[text.as_str(), image.as_str()], false).unwrap();
    assert_eq!(header_of(&mixed), (ComponentKind::ContentMixed, false));

    // argument order does not matter to the majority vote
    assert_eq!(mixed, content_id_mixed(&[image, text], false).unwrap());
}

#[test]
fn test_mixed_vectors() {
    assert_eq!(content_id_mixed(&["CTiesaXaMqbbU"], false).unwrap(), "CM3kgConwFYB4");
    assert_eq!(
        content_id_mixed(&["CTiesaXaMqbbU", "CtiesaXaMqbbU"], false).unwrap(),
        "CM3QagpbkjQmN"
    );
}

#[test]
fn test_mixed_reports_offending_code() {
    let err = content_id_mixed(&["CTiesaXaMqbbU", "not-a-code"], false).unwrap_err();
    match err {
        IsccError::DecodeFailure { code, source } => {
            assert_eq!(code, "not-a-code");
            assert!(matches!(source, CodecError::InvalidLength { length: 10, .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}
