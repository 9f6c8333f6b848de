//! HSV <-> RGB conversion
//!
//! Both directions work on `f64` channels in the unit range. Colors with
//! other storage types are normalised first through the usual coercion
//! rules, so integral data never reaches the formulas directly.
//!
//! Alpha is copied verbatim between the 4-channel variants.
//!
//! Formulas: <https://www.rapidtables.com/convert/color/hsv-to-rgb.html> and
//! <https://www.rapidtables.com/convert/color/rgb-to-hsv.html>.

use crate::channel::{Channel, Channels, ALPHA_INDEX};
use crate::hsv::Hsv;
use crate::rgb::Rgb;

/// Threshold below which a channel difference counts as zero.
pub const EPSILON: f64 = 1e-8;

/// Convert an `f64` HSV color to RGB.
///
/// Hue is a fraction of 360 degrees. Hues below zero land in the first
/// sextant and hues of a full turn or more in the last one, so any input
/// produces a defined result.
///
/// # Example
/// ```
/// use pigment_color::{hsv_to_rgb, Hsv};
///
/// let red = hsv_to_rgb(&Hsv::<f64>::new(0.0, 1.0, 1.0));
/// assert_eq!(red.into_array(), [1.0, 0.0, 0.0]);
/// ```
pub fn hsv_to_rgb<const N: usize>(hsv: &Hsv<f64, N>) -> Rgb<f64, N> {
    let hue_degrees = hsv.h() * 360.0;
    let chroma = hsv.v() * hsv.s();
    let x = chroma * (1.0 - ((hue_degrees / 60.0) % 2.0 - 1.0).abs());
    let m = hsv.v() - chroma;

    let (r, g, b) = if hue_degrees < 60.0 {
        (chroma, x, 0.0)
    } else if hue_degrees < 120.0 {
        (x, chroma, 0.0)
    } else if hue_degrees < 180.0 {
        (0.0, chroma, x)
    } else if hue_degrees < 240.0 {
        (0.0, x, chroma)
    } else if hue_degrees < 300.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };

    let mut rgb = Rgb::<f64, N>::new(r + m, g + m, b + m);
    carry_alpha(hsv.channels(), rgb.channels_mut());
    rgb
}

/// Convert an `f64` RGB color to HSV.
///
/// Achromatic input (all channels within [`EPSILON`]) gets hue 0, and black
/// gets saturation 0, instead of dividing by zero.
pub fn rgb_to_hsv<const N: usize>(rgb: &Rgb<f64, N>) -> Hsv<f64, N> {
    let (r, g, b) = (rgb.r(), rgb.g(), rgb.b());
    let c_max = r.max(g).max(b);
    let c_min = r.min(g).min(b);
    let delta = c_max - c_min;

    let mut hue = if delta < EPSILON {
        0.0
    } else if (r - c_max).abs() < EPSILON {
        60.0 * (((g - b) / delta) % 6.0) / 360.0
    } else if (g - c_max).abs() < EPSILON {
        60.0 * ((b - r) / delta + 2.0) / 360.0
    } else {
        60.0 * ((r - g) / delta + 4.0) / 360.0
    };
    if hue < 0.0 {
        hue += 1.0;
    }

    let saturation = if c_max < EPSILON { 0.0 } else { delta / c_max };

    let mut hsv = Hsv::<f64, N>::new(hue, saturation, c_max);
    carry_alpha(rgb.channels(), hsv.channels_mut());
    hsv
}

/// Convert an HSV color of any storage type to `f64` RGB.
pub fn convert_to_rgb<T: Channel, const N: usize>(hsv: &Hsv<T, N>) -> Rgb<f64, N> {
    hsv_to_rgb(&Hsv::<f64, N>::from_hsv(hsv))
}

/// Convert an RGB color of any storage type to `f64` HSV.
pub fn convert_to_hsv<T: Channel, const N: usize>(rgb: &Rgb<T, N>) -> Hsv<f64, N> {
    rgb_to_hsv(&Rgb::<f64, N>::from_rgb(rgb))
}

fn carry_alpha<const N: usize>(from: &Channels<f64, N>, to: &mut Channels<f64, N>) {
    if let (Some(alpha), Some(slot)) = (
        from.as_slice().get(ALPHA_INDEX),
        to.as_mut_slice().get_mut(ALPHA_INDEX),
    ) {
        *slot = *alpha;
    }
}
