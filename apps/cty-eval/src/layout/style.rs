//! Page and paragraph style for the evaluation template.
//!
//! Every render call receives a `DocumentStyle` explicitly; nothing is
//! inherited from mutable document state. Measurements are stored in the
//! units people use for them (inches, points) and converted to twips
//! (1/20 pt, 1/1440 in) at the OpenXML boundary.

pub const TWIPS_PER_INCH: f32 = 1440.0;
pub const TWIPS_PER_POINT: f32 = 20.0;

/// Single line spacing expressed in 240ths of a line, as OpenXML expects.
pub const SINGLE_LINE_SPACING: f32 = 240.0;

// ────────────────────────────────────────────────────────────────────────────
// Page size and margins
// ────────────────────────────────────────────────────────────────────────────

/// Paper size in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_in: f32,
    pub height_in: f32,
}

impl PageSize {
    /// US Letter, 8.5" × 11".
    pub const LETTER: PageSize = PageSize {
        width_in: 8.5,
        height_in: 11.0,
    };

    pub fn width_twips(&self) -> u32 {
        inches_to_twips(self.width_in).max(0) as u32
    }

    pub fn height_twips(&self) -> u32 {
        inches_to_twips(self.height_in).max(0) as u32
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Margins
// ────────────────────────────────────────────────────────────────────────────

/// Page margins in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top_in: f32,
    pub bottom_in: f32,
    pub left_in: f32,
    pub right_in: f32,
}

impl Margins {
    pub fn top_twips(&self) -> i32 {
        inches_to_twips(self.top_in)
    }

    pub fn bottom_twips(&self) -> i32 {
        inches_to_twips(self.bottom_in)
    }

    pub fn left_twips(&self) -> i32 {
        inches_to_twips(self.left_in)
    }

    pub fn right_twips(&self) -> i32 {
        inches_to_twips(self.right_in)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document style
// ────────────────────────────────────────────────────────────────────────────

/// Layout parameters for an evaluation document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentStyle {
    /// Default font family for every run in the document.
    pub font: String,
    pub page_size: PageSize,
    pub margins: Margins,
    /// Space after the title, heading, intro and body paragraphs.
    pub space_after_pt: f32,
    /// Line spacing multiple (1.0 = single).
    pub line_spacing: f32,
    /// Left tab stop in the heading block, in twips from the left margin.
    pub heading_tab_stop: usize,
    /// Underscores drawn after the signature label.
    pub signature_blank_len: usize,
}

impl DocumentStyle {
    /// The fixed CTY template: Times New Roman on US Letter, 1.5" top margin,
    /// 11pt spacing.
    pub fn cty() -> Self {
        Self {
            font: "Times New Roman".to_string(),
            page_size: PageSize::LETTER,
            margins: Margins {
                top_in: 1.5,
                bottom_in: 0.75,
                left_in: 1.0,
                right_in: 1.0,
            },
            space_after_pt: 11.0,
            line_spacing: 1.0,
            heading_tab_stop: 5000,
            signature_blank_len: 60,
        }
    }

    pub fn space_after_twips(&self) -> u32 {
        points_to_twips(self.space_after_pt)
    }

    /// Line spacing in 240ths of a line.
    pub fn line_spacing_value(&self) -> i32 {
        (self.line_spacing * SINGLE_LINE_SPACING).round() as i32
    }
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self::cty()
    }
}

pub fn inches_to_twips(inches: f32) -> i32 {
    (inches * TWIPS_PER_INCH).round() as i32
}

pub fn points_to_twips(points: f32) -> u32 {
    (points * TWIPS_PER_POINT).round().max(0.0) as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cty_style_margins_in_twips() {
        let style = DocumentStyle::cty();
        assert_eq!(style.margins.top_twips(), 2160);
        assert_eq!(style.margins.bottom_twips(), 1080);
        assert_eq!(style.margins.left_twips(), 1440);
        assert_eq!(style.margins.right_twips(), 1440);
    }

    #[test]
    fn test_cty_style_is_us_letter() {
        let style = DocumentStyle::cty();
        assert_eq!(style.page_size.width_twips(), 12240);
        assert_eq!(style.page_size.height_twips(), 15840);
    }

    #[test]
    fn test_cty_style_spacing() {
        let style = DocumentStyle::cty();
        assert_eq!(style.space_after_twips(), 220);
        assert_eq!(style.line_spacing_value(), 240);
    }

    #[test]
    fn test_cty_style_sanity() {
        let style = DocumentStyle::default();
        assert_eq!(style.font, "Times New Roman");
        assert_eq!(style.heading_tab_stop, 5000);
        assert_eq!(style.signature_blank_len, 60);
    }

    #[test]
    fn test_negative_points_clamp_to_zero() {
        assert_eq!(points_to_twips(-3.0), 0);
    }
}
