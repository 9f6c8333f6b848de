//! Guided tour of the color API
//!
//! Walks through construction, recasting, conversion, channel access and
//! alpha handling, rendering each step the way a user would see it.

use std::fmt::{self, Write};

use pigment_color::{convert_to_hsv, convert_to_rgb, ColorModel, Hsv, Rgb};

use super::printer::Printer;
use crate::models::AppConfig;

/// Render the full walkthrough into a string
pub fn run(config: &AppConfig) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_walkthrough(&mut out, config);
    out
}

/// Write the walkthrough into any text sink
pub fn write_walkthrough<W: Write>(out: &mut W, config: &AppConfig) -> fmt::Result {
    let mut p = Printer::new(out, config.precision);

    let pigments_i = [0, 100, 255];
    let pigments_d = [0.0, 0.392_156_862_7, 1.0];

    tracing::debug!("demo: construction");
    p.line("---construction---")?;

    // From an array or three single numbers, in order h, s, v
    let hsvi = Hsv::<i32>::from_channels(&pigments_i);
    let hsvi2 = Hsv::<i32>::new(0, 100, 255);
    let hsvi3 = Hsv::<i32>::from_channels(&pigments_d);
    let hsvi4 = Hsv::<i32>::new(0.0, 0.392_156_862_7, 1.0);
    for hsv in [&hsvi, &hsvi2, &hsvi3, &hsvi4] {
        p.value(hsv)?;
    }

    // Recast to the floating domain
    let hsvd = Hsv::<f64>::from_hsv(&hsvi);
    p.value(&hsvd)?;

    // RGB from HSV in every domain combination
    let rgbii = Rgb::<i32>::from_hsv(&hsvi);
    let rgbid = Rgb::<i32>::from_hsv(&hsvd);
    let rgbdi = Rgb::<f64>::from_hsv(&hsvi);
    let rgbdd = Rgb::<f64>::from_hsv(&hsvd);
    p.value(&rgbii)?;
    p.value(&rgbid)?;
    p.value(&rgbdi)?;
    p.value(&rgbdd)?;

    tracing::debug!("demo: assignment");
    p.line("---assignment---")?;

    let mut rgbii2 = Rgb::<i32>::default();
    rgbii2.assign_rgb(&rgbdi);
    let mut rgbii3 = Rgb::<i32>::default();
    rgbii3.assign_hsv(&hsvi);
    let mut rgbdi2 = Rgb::<f64>::default();
    rgbdi2.assign_rgb(&rgbdi);
    let mut rgbdi4 = Rgb::<f64>::default();
    rgbdi4.assign_hsv(&hsvd);
    for rgb in [&rgbii2, &rgbii3] {
        p.value(rgb)?;
    }
    for rgb in [&rgbdi2, &rgbdi4] {
        p.value(rgb)?;
    }

    tracing::debug!("demo: hsv2rgb");
    p.line("---hsv2rgb---")?;
    p.value(&hsvi)?;
    p.line("to:")?;
    let x = convert_to_rgb(&hsvi);
    p.value(&x)?;
    p.value(&convert_to_rgb(&hsvd))?;

    tracing::debug!("demo: rgb2hsv");
    p.line("---rgb2hsv---")?;
    p.value(&x)?;
    p.line("to:")?;
    p.value(&convert_to_hsv(&x))?;
    p.value(&Hsv::<i32>::from_hsv(&convert_to_hsv(&x)))?;
    p.value(&convert_to_hsv(&rgbid))?;

    tracing::debug!("demo: access");
    p.line("---access---")?;
    p.line(format_args!(
        " H:{} S:{} V:{}",
        hsvd.h(),
        hsvd.s(),
        hsvd.v()
    ))?;
    p.line(format_args!(
        " R:{} G:{} B:{}",
        rgbid.r(),
        rgbid.g(),
        rgbid.b()
    ))?;
    for (i, value) in rgbii2.channels().as_slice().iter().enumerate() {
        p.line(format_args!(" Data<{i}>:{value}"))?;
    }

    if config.demo.show_alpha {
        write_alpha_section(&mut p)?;
    }

    Ok(())
}

fn write_alpha_section<W: Write>(p: &mut Printer<'_, W>) -> fmt::Result {
    tracing::debug!("demo: alpha");
    p.line("---alpha value---")?;

    // Four channels carry alpha; it defaults to fully opaque
    let mut rgba = Rgb::<i32, 4>::new(22, 33, 44);
    p.line("The default alpha is 255 (or 1.0 for floating channels)")?;
    p.value(&rgba)?;

    p.line("Alpha can be given at construction too:")?;
    rgba = Rgb::<i32, 4>::with_alpha(22, 33, 44, 55);
    p.value(&rgba)?;
    p.line(format_args!(
        "Read it by name: rgba.a() = {}, or by position: rgba[3] = {}",
        rgba.a(),
        rgba[3]
    ))?;

    // A 3-channel color has no a(); positional reads past the end are checked
    let mut rgb = Rgb::<i32>::new(22, 33, 44);
    match rgb.get(3) {
        Ok(value) => p.line(format_args!("{} channel 3 = {value}", rgb.type_name()))?,
        Err(e) => p.line(format_args!("rgb.get(3) -> {e}"))?,
    }

    // Narrowing RGBA to RGB drops alpha
    rgb.assign_rgb(&rgba);
    p.line("Narrowing RGBA to RGB drops alpha:")?;
    p.value(&rgb)
}
