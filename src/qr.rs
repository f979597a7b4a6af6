//! QR symbol rendering.
//!
//! Symbol encoding is delegated to the `qrcode` crate; this module only
//! picks the error-correction level and a palette. On screen the modules
//! are drawn light-on-dark so they stand out on typical terminal themes;
//! print output uses the standard dark-on-light orientation.

use qrcode::render::unicode;
use qrcode::{EcLevel, QrCode};
use thiserror::Error;

/// Errors raised while encoding a payload as a QR symbol
#[derive(Debug, Error)]
pub enum QrImageError {
    /// The payload cannot be represented as a QR symbol (over capacity)
    #[error("Content cannot be encoded as a QR symbol: {0}")]
    Encode(#[from] qrcode::types::QrError),
}

/// Module palette for rendered symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Light modules on dark cells, for dark terminal backgrounds
    #[default]
    Terminal,
    /// Dark modules on light cells, for printed output
    Print,
}

/// Shown in place of a symbol while the form content is empty
pub const PLACEHOLDER: &str = "\
┌──┐  ┌──┐\n\
└──┘  └──┘\n\
\n\
┌──┐  ┌──┐\n\
└──┘  └──┘";

/// Render `content` as a block of Unicode half-cell characters
///
/// Uses error-correction level M. Each output line covers two module rows.
///
/// # Errors
///
/// Returns [`QrImageError::Encode`] when the payload exceeds the symbol
/// capacity for level M.
pub fn render(content: &str, palette: Palette) -> Result<String, QrImageError> {
    let code = QrCode::with_error_correction_level(content.as_bytes(), EcLevel::M)?;
    let image = match palette {
        Palette::Terminal => code
            .render::<unicode::Dense1x2>()
            .dark_color(unicode::Dense1x2::Light)
            .light_color(unicode::Dense1x2::Dark)
            .build(),
        Palette::Print => code
            .render::<unicode::Dense1x2>()
            .dark_color(unicode::Dense1x2::Dark)
            .light_color(unicode::Dense1x2::Light)
            .build(),
    };
    Ok(image)
}

/// Render `content` as individual lines, for row-by-row widget drawing
///
/// # Errors
///
/// Same failure modes as [`render`].
pub fn render_lines(content: &str, palette: Palette) -> Result<Vec<String>, QrImageError> {
    Ok(render(content, palette)?
        .lines()
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_produces_square_block() {
        let lines = render_lines("https://example.com/pool", Palette::Print).unwrap();
        assert!(!lines.is_empty());
        // Every row has the same width
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_render_palettes_differ() {
        let terminal = render("hello", Palette::Terminal).unwrap();
        let print = render("hello", Palette::Print).unwrap();
        assert_ne!(terminal, print);
    }

    #[test]
    fn test_render_rejects_oversized_payload() {
        // Far beyond version 40 capacity at level M
        let payload = "x".repeat(5000);
        assert!(render(&payload, Palette::Terminal).is_err());
    }

    #[test]
    fn test_render_accepts_max_form_payload() {
        let payload = "x".repeat(crate::manual::MAX_CONTENT_CHARS);
        assert!(render(&payload, Palette::Terminal).is_ok());
    }
}
