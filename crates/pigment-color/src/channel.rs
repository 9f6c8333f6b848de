//! Channel storage and numeric-domain coercion
//!
//! Every color value in this crate stores its data in a [`Channels`]
//! container: a fixed array of 3 or 4 numbers of a single [`Channel`] type.
//! The storage type decides the *numeric domain* of the color:
//!
//! | Domain | Storage types | Channel range |
//! |--------|---------------|---------------|
//! | [`NumericDomain::Integral`] | `u8`, `u16`, `u32`, `i16`, `i32`, `i64` | `0..=255` |
//! | [`NumericDomain::Floating`] | `f32`, `f64` | `0.0..=1.0` |
//!
//! Moving values between storage types always goes through [`coerce()`],
//! which is the only place the domain rules live.

use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

use num_traits::AsPrimitive;

use crate::error::ColorError;

/// Full scale of an integral channel.
const BYTE_MAX: f64 = 255.0;

/// Position of the alpha channel in a 4-channel container.
pub const ALPHA_INDEX: usize = 3;

/// Magnitude representation of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericDomain {
    /// Byte-like values in `0..=255`
    Integral,
    /// Unit-like values in `0.0..=1.0`
    Floating,
}

/// A numeric type usable as color channel storage.
///
/// The arithmetic super-traits keep non-numeric types out at compile time:
/// a color cannot be instantiated over a type that lacks `+ - * /`.
pub trait Channel:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + 'static
{
    /// Numeric domain this storage type belongs to.
    const DOMAIN: NumericDomain;

    /// Fully opaque alpha value (255 or 1.0).
    const OPAQUE: Self;

    /// Widen to `f64`.
    fn to_f64(self) -> f64;

    /// Narrow from `f64` with `as` semantics (saturating, NaN becomes 0 for integers).
    fn from_f64(value: f64) -> Self;

    /// Widen to `i128` with `as` semantics.
    fn to_i128(self) -> i128;

    /// Narrow from `i128` with `as` semantics (wrapping for integers).
    fn from_i128(value: i128) -> Self;
}

macro_rules! channel_impl {
    ($domain:ident, $opaque:expr => $($ty:ty),* $(,)?) => {$(
        impl Channel for $ty {
            const DOMAIN: NumericDomain = NumericDomain::$domain;
            const OPAQUE: Self = $opaque;

            #[inline]
            fn to_f64(self) -> f64 {
                self.as_()
            }
            #[inline]
            fn from_f64(value: f64) -> Self {
                value.as_()
            }
            #[inline]
            fn to_i128(self) -> i128 {
                self.as_()
            }
            #[inline]
            fn from_i128(value: i128) -> Self {
                value.as_()
            }
        }
    )*};
}

channel_impl!(Integral, 255 => u8, u16, u32, i16, i32, i64);
channel_impl!(Floating, 1.0 => f32, f64);

/// Convert one channel value from storage type `S` to storage type `T`.
///
/// | source | target | rule |
/// |--------|--------|------|
/// | integral | integral | plain cast |
/// | floating | floating | plain cast |
/// | integral | floating | divide by 255 |
/// | floating | integral | multiply by 255, round to nearest |
///
/// # Example
/// ```
/// use pigment_color::coerce;
///
/// let unit: f64 = coerce(255u8);
/// assert_eq!(unit, 1.0);
///
/// let byte: i32 = coerce(0.5f64);
/// assert_eq!(byte, 128);
/// ```
#[inline]
pub fn coerce<S: Channel, T: Channel>(value: S) -> T {
    match (S::DOMAIN, T::DOMAIN) {
        (NumericDomain::Integral, NumericDomain::Integral) => T::from_i128(value.to_i128()),
        (NumericDomain::Floating, NumericDomain::Floating) => T::from_f64(value.to_f64()),
        (NumericDomain::Integral, NumericDomain::Floating) => T::from_f64(value.to_f64() / BYTE_MAX),
        (NumericDomain::Floating, NumericDomain::Integral) => {
            T::from_f64((value.to_f64() * BYTE_MAX).round())
        }
    }
}

/// Fixed-size channel storage for a color value.
///
/// `N` must be 3 (no alpha) or 4 (alpha in the last slot); any other count
/// fails to build as soon as the container is constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channels<T, const N: usize> {
    values: [T; N],
}

impl<T: Channel, const N: usize> Channels<T, N> {
    const SUPPORTED_COUNT: () = assert!(
        N == 3 || N == 4,
        "a color holds 3 channels (without alpha) or 4 channels (with alpha)"
    );

    /// Whether this container carries an alpha channel.
    pub const HAS_ALPHA: bool = N == 4;

    /// Wrap an array of values of the storage type as-is.
    #[inline]
    pub fn new(values: [T; N]) -> Self {
        let () = Self::SUPPORTED_COUNT;
        Self { values }
    }

    /// Build a container from any channel slice.
    ///
    /// Values are converted with [`coerce()`]. Only the first
    /// `min(source.len(), N)` slots are written; the rest keep their
    /// default, so a 3-value source leaves alpha fully opaque.
    pub fn from_slice<S: Channel>(source: &[S]) -> Self {
        let mut channels = Self::default();
        for (slot, value) in channels.values.iter_mut().zip(source) {
            *slot = coerce(*value);
        }
        channels
    }

    /// Bounds-checked read of a single channel.
    pub fn get(&self, index: usize) -> Result<T, ColorError> {
        self.values
            .get(index)
            .copied()
            .ok_or(ColorError::IndexOutOfRange { index, len: N })
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.values
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.values
    }
}

impl<T: Channel> Channels<T, 4> {
    /// Alpha channel value.
    #[inline]
    pub fn alpha(&self) -> T {
        self.values[ALPHA_INDEX]
    }

    /// Mutable access to the alpha channel.
    #[inline]
    pub fn alpha_mut(&mut self) -> &mut T {
        &mut self.values[ALPHA_INDEX]
    }
}

impl<T: Channel, const N: usize> Default for Channels<T, N> {
    /// All channels zero, except alpha which starts fully opaque.
    fn default() -> Self {
        let mut values = [T::default(); N];
        if N == 4 {
            if let Some(alpha) = values.get_mut(ALPHA_INDEX) {
                *alpha = T::OPAQUE;
            }
        }
        Self::new(values)
    }
}

impl<T, const N: usize> Index<usize> for Channels<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.values.get(index) {
            Some(value) => value,
            None => panic!("channel index {index} out of range for a {N}-channel color"),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for Channels<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.values.get_mut(index) {
            Some(value) => value,
            None => panic!("channel index {index} out of range for a {N}-channel color"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_table() {
        // integral -> integral
        assert_eq!(coerce::<i32, u8>(200), 200u8);
        assert_eq!(coerce::<u8, i64>(17), 17i64);
        // plain cast wraps like `as`
        assert_eq!(coerce::<i32, u8>(300), 44u8);
        assert_eq!(coerce::<i16, u16>(-1), u16::MAX);
        // floating -> floating
        assert_eq!(coerce::<f32, f64>(0.5), 0.5f64);
        // integral -> floating
        assert!((coerce::<i32, f64>(200) - 200.0 / 255.0).abs() < 1e-12);
        assert_eq!(coerce::<u8, f32>(255), 1.0f32);
        // floating -> integral rounds to nearest
        assert_eq!(coerce::<f64, i32>(0.3921568627), 100);
        assert_eq!(coerce::<f64, i32>(0.5), 128);
        assert_eq!(coerce::<f32, u8>(1.0), 255u8);
    }

    #[test]
    fn test_coerce_non_finite_floats_do_not_panic() {
        assert_eq!(coerce::<f32, i32>(f32::NAN), 0);
        assert_eq!(coerce::<f32, i32>(f32::INFINITY), i32::MAX);
        assert_eq!(coerce::<f64, u8>(-3.0), 0u8);
        assert!(coerce::<f64, f32>(f64::NAN).is_nan());
    }

    #[test]
    fn test_default_alpha_is_opaque() {
        let ints = Channels::<i32, 4>::default();
        assert_eq!(ints.as_slice(), &[0, 0, 0, 255]);
        assert_eq!(ints.alpha(), 255);

        let floats = Channels::<f64, 4>::default();
        assert_eq!(floats.as_slice(), &[0.0, 0.0, 0.0, 1.0]);

        let opaque_free = Channels::<u8, 3>::default();
        assert_eq!(opaque_free.as_slice(), &[0, 0, 0]);
    }

    #[test]
    fn test_from_slice_truncates_and_default_fills() {
        let grown = Channels::<i32, 4>::from_slice(&[1, 2, 3]);
        assert_eq!(grown.into_array(), [1, 2, 3, 255]);

        let shrunk = Channels::<i32, 3>::from_slice(&[1, 2, 3, 4]);
        assert_eq!(shrunk.into_array(), [1, 2, 3]);

        let short = Channels::<f64, 3>::from_slice::<f64>(&[0.25]);
        assert_eq!(short.into_array(), [0.25, 0.0, 0.0]);
    }

    #[test]
    fn test_get_reports_out_of_range() {
        let channels = Channels::<u8, 3>::new([10, 20, 30]);
        assert_eq!(channels.get(2), Ok(30));
        assert_eq!(
            channels.get(3),
            Err(ColorError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_has_alpha() {
        assert!(!Channels::<u8, 3>::HAS_ALPHA);
        assert!(Channels::<f64, 4>::HAS_ALPHA);
    }

    #[test]
    fn test_alpha_mut() {
        let mut channels = Channels::<f32, 4>::default();
        *channels.alpha_mut() = 0.25;
        assert_eq!(channels[3], 0.25);
    }

    #[test]
    #[should_panic(expected = "channel index 3 out of range for a 3-channel color")]
    fn test_index_out_of_range_panics() {
        let channels = Channels::<u8, 3>::default();
        let _ = channels[3];
    }
}
