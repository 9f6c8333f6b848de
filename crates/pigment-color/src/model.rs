//! Behaviour shared by the RGB and HSV color families
//!
//! [`ColorModel`] carries the naming tables of a family and gives both
//! families one text rendering:
//!
//! ```text
//! RGBA
//! [R: 22][G: 33][B: 44][A: 255]
//! ```

use std::fmt;

use crate::channel::Channel;

/// A color family (RGB or HSV) viewed as named channels.
pub trait ColorModel {
    /// Storage type of each channel.
    type Value: Channel;

    /// Family name without alpha, e.g. `"RGB"`.
    const OPAQUE_NAME: &'static str;

    /// Family name with alpha, e.g. `"RGBA"`.
    const ALPHA_NAME: &'static str;

    /// Per-channel names, alpha last.
    const CHANNEL_NAMES: [&'static str; 4];

    /// Channel values in positional order.
    fn values(&self) -> &[Self::Value];

    /// Whether the color carries an alpha channel.
    fn has_alpha(&self) -> bool {
        self.values().len() == 4
    }

    /// Type name used when rendering (`RGB`, `RGBA`, `HSV` or `HSVA`).
    fn type_name(&self) -> &'static str {
        if self.has_alpha() {
            Self::ALPHA_NAME
        } else {
            Self::OPAQUE_NAME
        }
    }

    /// Name of the channel at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a channel of this color. Asking a 3-channel
    /// color for its alpha name is a caller bug, not a recoverable error.
    fn channel_name(&self, index: usize) -> &'static str {
        let len = self.values().len();
        assert!(
            index < len,
            "{} has no channel {index} (only {len} channels)",
            self.type_name()
        );
        Self::CHANNEL_NAMES[index]
    }
}

/// Write the `"<TypeName>\n[<Name>: <value>]...\n"` form of a color.
///
/// A precision on the formatter (`{:.3}`) applies to floating channels;
/// integer channels ignore it.
pub(crate) fn render<C: ColorModel>(color: &C, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", color.type_name())?;
    for (index, value) in color.values().iter().enumerate() {
        let name = color.channel_name(index);
        match f.precision() {
            Some(precision) => write!(f, "[{name}: {value:.precision$}]")?,
            None => write!(f, "[{name}: {value}]")?,
        }
    }
    writeln!(f)
}
