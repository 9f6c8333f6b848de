//! One-off conversion of user supplied channel values
//!
//! Values are given as text, e.g. `"0, 100, 255"` or `"0.5,1,1,0.25"`.
//! Three values build a plain color, four values a color with alpha.

use std::fmt::{self, Write};

use pigment_color::{convert_to_hsv, convert_to_rgb, Channel, Hsv, Rgb};

use super::printer::Printer;
use crate::error::AppError;

/// Color family of the input values
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Family {
    Rgb,
    Hsv,
}

/// Channel values parsed from text, in their numeric domain
#[derive(Debug, Clone, PartialEq)]
pub enum Values {
    /// Byte-like values (0..=255)
    Integral(Vec<i32>),
    /// Unit values (0.0..=1.0)
    Floating(Vec<f64>),
}

impl Values {
    /// Parse a comma separated list of 3 or 4 values
    pub fn parse(text: &str, floating: bool) -> Result<Self, AppError> {
        let text = text.trim();
        // a single trailing comma is tolerated, any other empty field is not
        let text = text.strip_suffix(',').unwrap_or(text);
        if text.is_empty() {
            return Err(AppError::InvalidValues("no values given".to_string()));
        }

        let parts: Vec<&str> = text.split(',').map(str::trim).collect();
        if let Some(position) = parts.iter().position(|part| part.is_empty()) {
            return Err(AppError::InvalidValues(format!(
                "value {} is empty",
                position + 1
            )));
        }
        if parts.len() != 3 && parts.len() != 4 {
            return Err(AppError::InvalidValues(format!(
                "expected 3 or 4 values, got {}",
                parts.len()
            )));
        }

        if floating {
            parts
                .iter()
                .map(|part| {
                    part.parse::<f64>()
                        .map_err(|e| AppError::InvalidValues(format!("{part:?}: {e}")))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Values::Floating)
        } else {
            parts
                .iter()
                .map(|part| {
                    part.parse::<i32>()
                        .map_err(|e| AppError::InvalidValues(format!("{part:?}: {e}")))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Values::Integral)
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Values::Integral(values) => values.len(),
            Values::Floating(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the color described by `values` and render it next to its conversion
pub fn describe(family: Family, values: &Values, precision: Option<usize>) -> String {
    let mut out = String::new();
    let mut p = Printer::new(&mut out, precision);
    // Writing into a String cannot fail
    let _ = match (values, values.len()) {
        (Values::Integral(v), 4) => write_conversion::<i32, _, 4>(&mut p, family, v),
        (Values::Integral(v), _) => write_conversion::<i32, _, 3>(&mut p, family, v),
        (Values::Floating(v), 4) => write_conversion::<f64, _, 4>(&mut p, family, v),
        (Values::Floating(v), _) => write_conversion::<f64, _, 3>(&mut p, family, v),
    };
    out
}

fn write_conversion<T: Channel, W: Write, const N: usize>(
    p: &mut Printer<'_, W>,
    family: Family,
    values: &[T],
) -> fmt::Result {
    tracing::debug!(?family, channels = N, "Converting values");
    match family {
        Family::Rgb => {
            let rgb = Rgb::<T, N>::from_slice(values);
            p.value(&rgb)?;
            p.line("to:")?;
            p.value(&Hsv::<T, N>::from_rgb(&rgb))?;
            p.value(&convert_to_hsv(&rgb))
        }
        Family::Hsv => {
            let hsv = Hsv::<T, N>::from_slice(values);
            p.value(&hsv)?;
            p.line("to:")?;
            p.value(&Rgb::<T, N>::from_hsv(&hsv))?;
            p.value(&convert_to_rgb(&hsv))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integral() {
        let values = Values::parse("0, 100,255", false).unwrap();
        assert_eq!(values, Values::Integral(vec![0, 100, 255]));
    }

    #[test]
    fn test_parse_floating_with_alpha() {
        let values = Values::parse("0.5,1,1,0.25", true).unwrap();
        assert_eq!(values, Values::Floating(vec![0.5, 1.0, 1.0, 0.25]));
        assert_eq!(values.len(), 4);
    }

    #[test]
    fn test_parse_rejects_wrong_count() {
        let result = Values::parse("1,2", false);
        match result {
            Err(AppError::InvalidValues(message)) => {
                assert_eq!(message, "expected 3 or 4 values, got 2");
            }
            other => panic!("Expected InvalidValues, got {other:?}"),
        }
        assert!(Values::parse("1,2,3,4,5", true).is_err());
    }

    #[test]
    fn test_parse_rejects_empty_field() {
        // a missing field must not shift alpha into the blue slot
        match Values::parse("255,,0,128", false) {
            Err(AppError::InvalidValues(message)) => assert_eq!(message, "value 2 is empty"),
            other => panic!("Expected InvalidValues, got {other:?}"),
        }
        assert!(Values::parse(",1,2,3", true).is_err());
        assert!(Values::parse("1,2,3,,", false).is_err());
        assert!(matches!(
            Values::parse("  ", false),
            Err(AppError::InvalidValues(_))
        ));
    }

    #[test]
    fn test_parse_allows_trailing_comma() {
        let values = Values::parse("1, 2, 3,", false).unwrap();
        assert_eq!(values, Values::Integral(vec![1, 2, 3]));
    }

    #[test]
    fn test_parse_rejects_fraction_in_integral_mode() {
        assert!(matches!(
            Values::parse("0.5,1,1", false),
            Err(AppError::InvalidValues(_))
        ));
    }

    #[test]
    fn test_describe_hsv_to_rgb() {
        let values = Values::parse("0,255,255", false).unwrap();
        let output = describe(Family::Hsv, &values, None);
        assert_eq!(
            output,
            "HSV\n[H: 0][S: 255][V: 255]\nto:\nRGB\n[R: 255][G: 0][B: 0]\nRGB\n[R: 1][G: 0][B: 0]\n"
        );
    }

    #[test]
    fn test_describe_rgba_keeps_alpha() {
        let values = Values::parse("0,0,1,0.5", true).unwrap();
        let output = describe(Family::Rgb, &values, Some(3));
        assert!(output.starts_with("RGBA\n[R: 0.000][G: 0.000][B: 1.000][A: 0.500]\nto:\n"));
        assert!(output.contains("HSVA\n[H: 0.667][S: 1.000][V: 1.000][A: 0.500]\n"));
    }
}
