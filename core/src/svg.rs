//! Minimal SVG markup writer shared by the barcode and QR artifacts.

use std::fmt::Write as _;

pub(crate) struct SvgWriter {
    out: String,
}

impl SvgWriter {
    /// Open an `<svg>` element whose viewBox matches its pixel size
    pub(crate) fn new(width: f64, height: f64) -> Self {
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" preserveAspectRatio="xMidYMid meet">"#,
            w = width,
            h = height,
        );
        Self { out }
    }

    pub(crate) fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: &str) {
        // Writing to a String cannot fail
        let _ = write!(
            self.out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            x,
            y,
            width,
            height,
            escape_attr(fill),
        );
    }

    pub(crate) fn finish(mut self) -> String {
        self.out.push_str("</svg>");
        self.out
    }
}

/// Colors come from configuration; keep them from breaking out of the attribute
fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}
