//! HSV color type
//!
//! Hue, saturation and value channels, optionally followed by alpha. Hue is
//! stored as a fraction of a full turn, so `h = 0.5` means 180 degrees in the
//! floating domain and `h = 128` roughly the same in the integral domain.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::channel::{Channel, Channels};
use crate::convert::convert_to_hsv;
use crate::error::ColorError;
use crate::model::{self, ColorModel};
use crate::rgb::Rgb;

/// A color in HSV space.
///
/// Mirrors [`Rgb`]: `T` picks the numeric domain and `N` is 3 (HSV) or
/// 4 (HSVA). Converting from RGB always happens in `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv<T, const N: usize = 3> {
    channels: Channels<T, N>,
}

impl<T: Channel, const N: usize> Hsv<T, N> {
    /// Create a color from hue, saturation and value of any channel type.
    ///
    /// On a 4-channel color alpha stays fully opaque.
    #[inline]
    pub fn new<S: Channel>(h: S, s: S, v: S) -> Self {
        Self::from_channels(&[h, s, v])
    }

    /// Create a color from hue, saturation, value and alpha.
    ///
    /// On a 3-channel color the alpha value is dropped.
    #[inline]
    pub fn with_alpha<S: Channel>(h: S, s: S, v: S, a: S) -> Self {
        Self::from_channels(&[h, s, v, a])
    }

    /// Create a color from an ordered array of channel values.
    ///
    /// Values pass through [`coerce()`](crate::coerce); surplus values are
    /// ignored and missing ones keep their default.
    pub fn from_channels<S: Channel, const M: usize>(values: &[S; M]) -> Self {
        Self::from_slice(values)
    }

    /// Create a color from a channel slice of any length.
    pub fn from_slice<S: Channel>(values: &[S]) -> Self {
        Self {
            channels: Channels::from_slice(values),
        }
    }

    /// Recast an HSV color of another storage type or channel count.
    ///
    /// Recasting to the same `(T, N)` is an exact copy.
    pub fn from_hsv<S: Channel, const M: usize>(other: &Hsv<S, M>) -> Self {
        Self {
            channels: Channels::from_slice(other.channels.as_slice()),
        }
    }

    /// Convert an RGB color of any storage type or channel count.
    ///
    /// The source is normalised to `f64`, converted, then recast to `(T, N)`.
    pub fn from_rgb<S: Channel, const M: usize>(rgb: &Rgb<S, M>) -> Self {
        Self::from_hsv(&convert_to_hsv(rgb))
    }

    /// Replace this color with a recast of `other`.
    pub fn assign_hsv<S: Channel, const M: usize>(&mut self, other: &Hsv<S, M>) {
        *self = Self::from_hsv(other);
    }

    /// Replace this color with the conversion of `rgb`.
    pub fn assign_rgb<S: Channel, const M: usize>(&mut self, rgb: &Rgb<S, M>) {
        *self = Self::from_rgb(rgb);
    }

    /// Hue as a fraction of 360 degrees.
    #[inline]
    pub fn h(&self) -> T {
        self.channels[0]
    }

    #[inline]
    pub fn s(&self) -> T {
        self.channels[1]
    }

    #[inline]
    pub fn v(&self) -> T {
        self.channels[2]
    }

    #[inline]
    pub fn h_mut(&mut self) -> &mut T {
        &mut self.channels[0]
    }

    #[inline]
    pub fn s_mut(&mut self) -> &mut T {
        &mut self.channels[1]
    }

    #[inline]
    pub fn v_mut(&mut self) -> &mut T {
        &mut self.channels[2]
    }

    #[inline]
    pub fn get(&self, index: usize) -> Result<T, ColorError> {
        self.channels.get(index)
    }

    #[inline]
    pub fn channels(&self) -> &Channels<T, N> {
        &self.channels
    }

    #[inline]
    pub(crate) fn channels_mut(&mut self) -> &mut Channels<T, N> {
        &mut self.channels
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.channels.into_array()
    }
}

impl<T: Channel> Hsv<T, 4> {
    #[inline]
    pub fn a(&self) -> T {
        self.channels.alpha()
    }

    #[inline]
    pub fn a_mut(&mut self) -> &mut T {
        self.channels.alpha_mut()
    }
}

impl<T: Channel, const N: usize> Default for Hsv<T, N> {
    fn default() -> Self {
        Self {
            channels: Channels::default(),
        }
    }
}

impl<T: Channel, const N: usize, S: Channel, const M: usize> From<[S; M]> for Hsv<T, N> {
    fn from(values: [S; M]) -> Self {
        Self::from_channels(&values)
    }
}

impl<T: Channel, const N: usize, S: Channel, const M: usize> From<Rgb<S, M>> for Hsv<T, N> {
    fn from(rgb: Rgb<S, M>) -> Self {
        Self::from_rgb(&rgb)
    }
}

impl<T, const N: usize> Index<usize> for Hsv<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.channels[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Hsv<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.channels[index]
    }
}

impl<T: Channel, const N: usize> ColorModel for Hsv<T, N> {
    type Value = T;

    const OPAQUE_NAME: &'static str = "HSV";
    const ALPHA_NAME: &'static str = "HSVA";
    const CHANNEL_NAMES: [&'static str; 4] = ["H", "S", "V", "A"];

    fn values(&self) -> &[T] {
        self.channels.as_slice()
    }

    fn has_alpha(&self) -> bool {
        Channels::<T, N>::HAS_ALPHA
    }
}

impl<T: Channel, const N: usize> fmt::Display for Hsv<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        model::render(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_agree() {
        let from_array = Hsv::<i32>::from_channels(&[0, 100, 255]);
        let from_args = Hsv::<i32>::new(0, 100, 255);
        let from_floats = Hsv::<i32>::from_channels(&[0.0, 0.3921568627, 1.0]);
        let from_float_args = Hsv::<i32>::new(0.0, 0.3921568627, 1.0);

        assert_eq!(from_array, from_args);
        assert_eq!(from_array, from_floats);
        assert_eq!(from_array, from_float_args);
    }

    #[test]
    fn test_from_hsv_recasts_domain() {
        let bytes = Hsv::<i32, 4>::with_alpha(34, 44, 67, 50);
        let units = Hsv::<f64, 4>::from_hsv(&bytes);
        assert!((units.a() - 0.1960784314).abs() < 1e-4);

        let back = Hsv::<i32, 4>::from_hsv(&units);
        assert_eq!(back, bytes);
    }

    #[test]
    fn test_three_to_four_default_fills_alpha() {
        let hsv = Hsv::<f32>::new(0.1f32, 0.2, 0.3);
        let hsva = Hsv::<f32, 4>::from_hsv(&hsv);
        assert_eq!(hsva.a(), 1.0);
    }

    #[test]
    fn test_from_rgb_black() {
        let hsv = Hsv::<f64>::from(Rgb::<u8>::new(0u8, 0, 0));
        assert_eq!(hsv.into_array(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_assign_rgb() {
        let mut hsv = Hsv::<f64>::default();
        hsv.assign_rgb(&Rgb::<f64>::new(0.0, 0.0, 1.0));
        assert!((hsv.h() - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(hsv.s(), 1.0);
        assert_eq!(hsv.v(), 1.0);
    }

    #[test]
    fn test_accessors_write_through() {
        let mut hsva = Hsv::<f64, 4>::default();
        *hsva.h_mut() = 0.5;
        *hsva.s_mut() = 0.25;
        *hsva.v_mut() = 0.75;
        *hsva.a_mut() = 0.0;
        assert_eq!(hsva.into_array(), [0.5, 0.25, 0.75, 0.0]);
    }

    #[test]
    fn test_display() {
        let hsva = Hsv::<f64, 4>::default();
        assert_eq!(hsva.to_string(), "HSVA\n[H: 0][S: 0][V: 0][A: 1]\n");

        let hsv = Hsv::<u8>::new(1u8, 2, 3);
        assert_eq!(format!("{hsv:.3}"), "HSV\n[H: 1][S: 2][V: 3]\n");
    }

    #[test]
    #[should_panic(expected = "HSVA has no channel 4")]
    fn test_channel_name_past_alpha_panics() {
        Hsv::<f64, 4>::default().channel_name(4);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_past_end_panics() {
        let hsv = Hsv::<i32>::new(1, 2, 3);
        let _ = hsv[3];
    }

    #[test]
    fn test_alpha_follows_channel_count() {
        assert!(!Hsv::<i64>::default().has_alpha());
        assert!(Hsv::<i64, 4>::default().has_alpha());
        assert_eq!(Hsv::<i64, 4>::default().type_name(), "HSVA");
    }
}
