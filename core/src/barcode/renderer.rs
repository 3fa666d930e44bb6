//! Width codes to bar geometry and SVG

use serde::{Deserialize, Serialize};

use super::encoder::WidthCodeSequence;
use crate::constants::{BARCODE_HEIGHT, BARCODE_MAX_WIDTH};
use crate::svg::SvgWriter;

/// Sizing for the rendered barcode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarcodeStyle {
    /// Bar height in pixels
    pub height: f64,
    /// Pixels per width unit
    pub unit_width: f64,
    /// Widest box the barcode is laid out in
    pub max_width: f64,
}

impl Default for BarcodeStyle {
    fn default() -> Self {
        Self {
            height: BARCODE_HEIGHT,
            unit_width: 1.0,
            max_width: BARCODE_MAX_WIDTH,
        }
    }
}

/// A filled bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub x: f64,
    pub width: f64,
    pub height: f64,
}

/// Filled bars in increasing `x` order plus the full cursor advance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedBarcode {
    pub bars: Vec<Bar>,
    /// Final cursor position; size the viewport to exactly this
    pub width: f64,
    pub height: f64,
}

impl RenderedBarcode {
    /// Total width covered by bars (the rest is spaces)
    pub fn ink_width(&self) -> f64 {
        self.bars.iter().map(|b| b.width).sum()
    }

    /// Aspect-preserving size inside a box at most `max_width` wide.
    ///
    /// Narrow barcodes keep their natural size.
    pub fn display_size(&self, max_width: f64) -> (f64, f64) {
        if self.width <= max_width || self.width <= 0.0 {
            return (self.width, self.height);
        }
        let scale = max_width / self.width;
        (max_width, self.height * scale)
    }

    /// SVG markup with one rect per bar
    pub fn to_svg(&self, bar_color: &str) -> String {
        let mut svg = SvgWriter::new(self.width, self.height);
        for bar in &self.bars {
            svg.rect(bar.x, 0.0, bar.width, bar.height, bar_color);
        }
        svg.finish()
    }
}

/// Walk the flattened unit stream, alternating bar and space.
///
/// The first unit is always a bar and the parity flips after every unit,
/// ignoring code boundaries. Spaces only advance the cursor.
pub fn render(sequence: &WidthCodeSequence, style: &BarcodeStyle) -> RenderedBarcode {
    let mut bars = Vec::new();
    let mut cursor = 0.0;
    let mut filled = true;

    for unit in sequence.units() {
        let width = f64::from(unit) * style.unit_width;
        if filled {
            bars.push(Bar {
                x: cursor,
                width,
                height: style.height,
            });
        }
        cursor += width;
        filled = !filled;
    }

    RenderedBarcode {
        bars,
        width: cursor,
        height: style.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barcode::encode;

    fn unit_style() -> BarcodeStyle {
        BarcodeStyle {
            height: 48.0,
            unit_width: 1.0,
            max_width: 180.0,
        }
    }

    #[test]
    fn test_empty_code_geometry() {
        // 211214 2331112
        let rendered = render(&encode(""), &unit_style());
        let xs: Vec<f64> = rendered.bars.iter().map(|b| b.x).collect();
        let widths: Vec<f64> = rendered.bars.iter().map(|b| b.width).collect();

        assert_eq!(rendered.width, 24.0);
        assert_eq!(xs, vec![0.0, 3.0, 6.0, 11.0, 16.0, 20.0, 22.0]);
        assert_eq!(widths, vec![2.0, 1.0, 1.0, 2.0, 3.0, 1.0, 2.0]);
        assert!(rendered.bars.iter().all(|b| b.height == 48.0));
    }

    #[test]
    fn test_width_accounting() {
        let seq = encode("8001 2345 6789");
        let rendered = render(&seq, &unit_style());

        let units: Vec<u32> = seq.units().collect();
        let spaces: u32 = units.iter().skip(1).step_by(2).sum();

        assert_eq!(rendered.width, f64::from(seq.total_units()));
        assert_eq!(rendered.ink_width() + f64::from(spaces), rendered.width);
    }

    #[test]
    fn test_bars_do_not_overlap() {
        let rendered = render(&encode("1234567890"), &unit_style());
        for pair in rendered.bars.windows(2) {
            assert!(pair[0].x + pair[0].width < pair[1].x);
        }
    }

    #[test]
    fn test_unit_width_scales_everything() {
        let seq = encode("42");
        let narrow = render(&seq, &unit_style());
        let wide = render(
            &seq,
            &BarcodeStyle {
                unit_width: 2.0,
                ..unit_style()
            },
        );

        assert_eq!(wide.width, narrow.width * 2.0);
        assert_eq!(wide.bars.len(), narrow.bars.len());
        assert_eq!(wide.bars[1].x, narrow.bars[1].x * 2.0);
    }

    #[test]
    fn test_display_size() {
        let rendered = render(&encode("1234567890123456"), &unit_style());
        assert!(rendered.width > 180.0);

        let (w, h) = rendered.display_size(180.0);
        assert_eq!(w, 180.0);
        assert!((h / w - rendered.height / rendered.width).abs() < 1e-9);

        let small = render(&encode(""), &unit_style());
        assert_eq!(small.display_size(180.0), (24.0, 48.0));
    }

    #[test]
    fn test_svg_markup() {
        let svg = render(&encode(""), &unit_style()).to_svg("#FFFFFF");
        assert!(svg.contains(r#"width="24" height="48" viewBox="0 0 24 48""#));
        assert_eq!(svg.matches("<rect").count(), 7);
        assert!(svg.contains(r##"<rect x="22" y="0" width="2" height="48" fill="#FFFFFF"/>"##));
    }
}
