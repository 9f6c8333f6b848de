//! RGB color type
//!
//! Red, green and blue channels, optionally followed by alpha.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::channel::{Channel, Channels};
use crate::convert::convert_to_rgb;
use crate::error::ColorError;
use crate::hsv::Hsv;
use crate::model::{self, ColorModel};

/// A color in RGB space.
///
/// `T` selects the numeric domain (`u8`/`i32`/... for `0..=255`,
/// `f32`/`f64` for `0.0..=1.0`). `N` is 3 for plain RGB or 4 for RGBA.
///
/// # Example
/// ```
/// use pigment_color::{Hsv, Rgb};
///
/// let red = Rgb::<u8>::new(255, 0, 0);
/// let unit = Rgb::<f64>::from_rgb(&red);
/// assert_eq!(unit.r(), 1.0);
///
/// let hsv = Hsv::<f64>::from(red);
/// assert_eq!(hsv.s(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb<T, const N: usize = 3> {
    channels: Channels<T, N>,
}

impl<T: Channel, const N: usize> Rgb<T, N> {
    /// Create a color from red, green and blue values of any channel type.
    ///
    /// On a 4-channel color alpha stays fully opaque.
    #[inline]
    pub fn new<S: Channel>(r: S, g: S, b: S) -> Self {
        Self::from_channels(&[r, g, b])
    }

    /// Create a color from red, green, blue and alpha values.
    ///
    /// On a 3-channel color the alpha value is dropped.
    #[inline]
    pub fn with_alpha<S: Channel>(r: S, g: S, b: S, a: S) -> Self {
        Self::from_channels(&[r, g, b, a])
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

    /// Recast an RGB color of another storage type or channel count.
    ///
    /// Recasting to the same `(T, N)` is an exact copy.
    pub fn from_rgb<S: Channel, const M: usize>(other: &Rgb<S, M>) -> Self {
        Self {
            channels: Channels::from_slice(other.channels.as_slice()),
        }
    }

    /// Convert an HSV color of any storage type or channel count.
    ///
    /// The source is normalised to `f64`, converted, then recast to `(T, N)`.
    pub fn from_hsv<S: Channel, const M: usize>(hsv: &Hsv<S, M>) -> Self {
        Self::from_rgb(&convert_to_rgb(hsv))
    }

    /// Replace this color with a recast of `other`.
    pub fn assign_rgb<S: Channel, const M: usize>(&mut self, other: &Rgb<S, M>) {
        *self = Self::from_rgb(other);
    }

    /// Replace this color with the conversion of `hsv`.
    pub fn assign_hsv<S: Channel, const M: usize>(&mut self, hsv: &Hsv<S, M>) {
        *self = Self::from_hsv(hsv);
    }

    #[inline]
    pub fn r(&self) -> T {
        self.channels[0]
    }

    #[inline]
    pub fn g(&self) -> T {
        self.channels[1]
    }

    #[inline]
    pub fn b(&self) -> T {
        self.channels[2]
    }

    #[inline]
    pub fn r_mut(&mut self) -> &mut T {
        &mut self.channels[0]
    }

    #[inline]
    pub fn g_mut(&mut self) -> &mut T {
        &mut self.channels[1]
    }

    #[inline]
    pub fn b_mut(&mut self) -> &mut T {
        &mut self.channels[2]
    }

    /// Bounds-checked positional read.
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

impl<T: Channel> Rgb<T, 4> {
    #[inline]
    pub fn a(&self) -> T {
        self.channels.alpha()
    }

    #[inline]
    pub fn a_mut(&mut self) -> &mut T {
        self.channels.alpha_mut()
    }
}

impl<T: Channel, const N: usize> Default for Rgb<T, N> {
    fn default() -> Self {
        Self {
            channels: Channels::default(),
        }
    }
}

impl<T: Channel, const N: usize, S: Channel, const M: usize> From<[S; M]> for Rgb<T, N> {
    fn from(values: [S; M]) -> Self {
        Self::from_channels(&values)
    }
}

impl<T: Channel, const N: usize, S: Channel, const M: usize> From<Hsv<S, M>> for Rgb<T, N> {
    fn from(hsv: Hsv<S, M>) -> Self {
        Self::from_hsv(&hsv)
    }
}

impl<T, const N: usize> Index<usize> for Rgb<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.channels[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Rgb<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.channels[index]
    }
}

impl<T: Channel, const N: usize> ColorModel for Rgb<T, N> {
    type Value = T;

    const OPAQUE_NAME: &'static str = "RGB";
    const ALPHA_NAME: &'static str = "RGBA";
    const CHANNEL_NAMES: [&'static str; 4] = ["R", "G", "B", "A"];

    fn values(&self) -> &[T] {
        self.channels.as_slice()
    }

    fn has_alpha(&self) -> bool {
        Channels::<T, N>::HAS_ALPHA
    }
}

impl<T: Channel, const N: usize> fmt::Display for Rgb<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        model::render(self, f)
    }
}
