use image::imageops::{self, FilterType};
use image::{GrayImage, Luma, RgbaImage};

/// Alpha mask for a round icon: the largest circle that fits the
/// size x size square. 255 inside, 0 outside, hard edge.
pub fn circle_mask(size: u32) -> GrayImage {
    let r = size as f32 * 0.5;
    GrayImage::from_fn(size, size, |x, y| {
        // pixel center against the inscribed radius
        let dx = x as f32 + 0.5 - r;
        let dy = y as f32 + 0.5 - r;
        if dx * dx + dy * dy <= r * r {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Fill a size x size square from the source: center-crop to the largest
/// square, then resample with Lanczos3.
pub fn fit_square(img: &RgbaImage, size: u32) -> RgbaImage {
    let (w, h) = img.dimensions();
    if w == h {
        if w == size {
            return img.clone();
        }
        return imageops::resize(img, size, size, FilterType::Lanczos3);
    }
    let side = w.min(h);
    let cropped = imageops::crop_imm(img, (w - side) / 2, (h - side) / 2, side, side).to_image();
    imageops::resize(&cropped, size, size, FilterType::Lanczos3)
}

/// Round launcher icon: square fit with the circle mask as its alpha
/// channel. The mask alone decides transparency; color channels are left
/// as resampled.
pub fn make_round_icon(img: &RgbaImage, size: u32) -> RgbaImage {
    let mask = circle_mask(size);
    let mut out = fit_square(img, size);
    for (x, y, px) in out.enumerate_pixels_mut() {
        px.0[3] = mask.get_pixel(x, y).0[0];
    }
    out
}
