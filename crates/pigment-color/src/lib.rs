//! pigment-color: generic RGB and HSV color values
//!
//! Two sibling color families, [`Rgb`] and [`Hsv`], each generic over the
//! channel storage type and the channel count:
//!
//! - the storage type picks the numeric domain: integers hold byte-like
//!   values in `0..=255`, floats hold unit values in `0.0..=1.0`
//! - the channel count is 3 (no alpha) or 4 (alpha last, fully opaque by
//!   default)
//!
//! # Quick Start
//!
//! ```
//! use pigment_color::{convert_to_rgb, Hsv, Rgb};
//!
//! // Same color, two domains
//! let bytes = Hsv::<i32>::new(0, 100, 255);
//! let units = Hsv::<f64>::from_hsv(&bytes);
//! assert_eq!(units.v(), 1.0);
//!
//! // Cross-family construction converts through f64
//! let rgb = Rgb::<u8>::from_hsv(&bytes);
//! assert_eq!(rgb.into_array(), [255, 155, 155]);
//!
//! // Or call the conversion directly
//! let exact = convert_to_rgb(&bytes);
//! assert!((exact.g() - 155.0 / 255.0).abs() < 1e-12);
//! ```
//!
//! # Coercion Rules
//!
//! Whenever channel data crosses storage types, [`coerce()`] applies:
//!
//! | source | target | rule |
//! |--------|--------|------|
//! | integral | integral | plain cast |
//! | floating | floating | plain cast |
//! | integral | floating | divide by 255 |
//! | floating | integral | multiply by 255 and round |
//!
//! When channel counts differ, only the shared leading channels are copied.
//! Going from 3 to 4 channels leaves alpha at its opaque default.
//!
//! # Alpha
//!
//! `a()` exists only on 4-channel colors; calling it on a 3-channel color
//! does not compile:
//!
//! ```compile_fail
//! use pigment_color::Rgb;
//!
//! let rgb = Rgb::<i32>::new(22, 33, 44);
//! let _ = rgb.a();
//! ```
//!
//! Positional access past the last channel is checked. [`Rgb::get`] returns
//! [`ColorError::IndexOutOfRange`] and indexing with `[]` panics.
//!
//! # Channel Counts
//!
//! Only 3 and 4 channels are supported; anything else is rejected when the
//! color is built:
//!
//! ```compile_fail
//! use pigment_color::Rgb;
//!
//! let _ = Rgb::<f64, 5>::default();
//! ```
//!
//! # Storage Types
//!
//! Channel storage must be numeric. A type without `+ - * /`, such as
//! `bool`, cannot hold channels:
//!
//! ```compile_fail
//! use pigment_color::Rgb;
//!
//! let _ = Rgb::<bool>::default();
//! ```

pub mod channel;
pub mod convert;
pub mod error;
pub mod hsv;
pub mod model;
pub mod rgb;


pub use channel::{coerce, Channel, Channels, NumericDomain};
pub use convert::{convert_to_hsv, convert_to_rgb, hsv_to_rgb, rgb_to_hsv, EPSILON};
pub use error::ColorError;
pub use hsv::Hsv;
pub use model::ColorModel;
pub use rgb::Rgb;
