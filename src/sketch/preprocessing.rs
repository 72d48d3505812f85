use image::{DynamicImage, GrayImage, Luma};
use imageproc::filter::laplacian_filter;

/// Correct for the coordinate-system mismatch between the image source and
/// the drawing surface: flip vertically, then rotate 180 degrees.
pub fn normalize_orientation(img: &DynamicImage) -> DynamicImage {
    img.flipv().rotate180()
}

/// Convert image to grayscale
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Second-derivative edge response: Laplacian magnitude saturated to `u8`.
pub fn edge_response(img: &GrayImage) -> GrayImage {
    let laplacian = laplacian_filter(img);
    let mut out = GrayImage::new(img.width(), img.height());
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let v = laplacian.get_pixel(x, y)[0];
        *pixel = Luma([v.unsigned_abs().min(255) as u8]);
    }
    out
}

/// Binarize the edge response with a fixed cutoff: values strictly above
/// `cutoff` become 255, everything else 0.
pub fn binarize(img: &GrayImage, cutoff: u8) -> GrayImage {
    let mut out = GrayImage::new(img.width(), img.height());
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let v = img.get_pixel(x, y)[0];
        *pixel = Luma([if v > cutoff { 255 } else { 0 }]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn orientation_flip_then_rotate_mirrors_horizontally() {
        // flipv followed by rotate180 is a horizontal mirror
        let mut img = RgbImage::new(3, 2);
        img.put_pixel(0, 0, image::Rgb([255, 0, 0]));
        let normalized = normalize_orientation(&DynamicImage::ImageRgb8(img)).to_rgb8();
        assert_eq!(normalized.get_pixel(2, 0), &image::Rgb([255, 0, 0]));
    }

    #[test]
    fn binarize_uses_strict_cutoff() {
        let mut img = GrayImage::new(3, 1);
        img.put_pixel(0, 0, Luma([50]));
        img.put_pixel(1, 0, Luma([51]));
        img.put_pixel(2, 0, Luma([0]));
        let mask = binarize(&img, 50);
        assert_eq!(mask.get_pixel(0, 0)[0], 0);
        assert_eq!(mask.get_pixel(1, 0)[0], 255);
        assert_eq!(mask.get_pixel(2, 0)[0], 0);
    }

    #[test]
    fn edge_response_is_flat_on_uniform_image() {
        let img = GrayImage::from_pixel(8, 8, Luma([120]));
        let edges = edge_response(&img);
        assert!(edges.pixels().all(|p| p[0] == 0));
    }
}
