// PDF rendering: one US Letter page per card.

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::*;
use std::fs::File;
use std::io::BufWriter;

use crate::card::{BingoConfig, Card};
use crate::error::AppError;

// ============================================================================
// Constants
// ============================================================================

/// US Letter dimensions in mm
const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;

/// Margins
const MARGIN_MM: f32 = 15.0;

/// Font sizes in points
const TITLE_FONT_SIZE: f32 = 28.0;
const FOOTER_FONT_SIZE: f32 = 10.0;
const CELL_FONT_SIZE: f32 = 11.0;
const MIN_CELL_FONT_SIZE: f32 = 6.0;

/// Gaps between the title/footer and the grid, in mm
const HEADER_GAP_MM: f32 = 9.0;
const FOOTER_GAP_MM: f32 = 8.0;

/// Cell text padding in mm
const CELL_PADDING_MM: f32 = 1.5;

/// Points to millimeters
const PT_TO_MM: f32 = 0.3528;

/// Average Helvetica glyph width as a fraction of the font size. Printpdf
/// exposes no text metrics for built-in fonts, so centering and wrapping
/// work from this estimate. Cell text shrinks to fit, which absorbs the
/// error; header and footer centering can drift for unusual glyph mixes.
const AVG_CHAR_WIDTH: f32 = 0.5;

// ============================================================================
// Rendering
// ============================================================================

/// Write every card to `output_path`, one page per card, each page showing
/// the title header, the grid, and a "Card #N of M" footer.
pub fn render_pdf(cards: &[Card], config: &BingoConfig, output_path: &str) -> Result<(), AppError> {
    let (doc, page1, layer1) = PdfDocument::new(
        &config.title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );

    let font_regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::Pdf(e.to_string()))?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| AppError::Pdf(e.to_string()))?;

    for (i, card) in cards.iter().enumerate() {
        let layer = if i == 0 {
            doc.get_page(page1).get_layer(layer1)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            doc.get_page(page).get_layer(layer)
        };
        draw_card_page(&layer, &font_regular, &font_bold, card, config, cards.len());
    }

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    doc.save(&mut writer)
        .map_err(|e| AppError::Pdf(e.to_string()))?;

    Ok(())
}

fn draw_card_page(
    layer: &PdfLayerReference,
    font_regular: &IndirectFontRef,
    font_bold: &IndirectFontRef,
    card: &Card,
    config: &BingoConfig,
    total_cards: usize,
) {
    let text_color = Color::Rgb(Rgb::new(0.1, 0.1, 0.18, None));
    layer.set_fill_color(text_color.clone());

    // Title
    let title_y = PAGE_HEIGHT_MM - MARGIN_MM - TITLE_FONT_SIZE * PT_TO_MM;
    draw_centered_text(
        layer,
        font_bold,
        &config.title,
        TITLE_FONT_SIZE,
        PAGE_WIDTH_MM / 2.0,
        title_y,
    );

    // Footer
    let footer = format!("Card #{} of {}", card.number, total_cards);
    draw_centered_text(
        layer,
        font_regular,
        &footer,
        FOOTER_FONT_SIZE,
        PAGE_WIDTH_MM / 2.0,
        MARGIN_MM,
    );

    // Grid area between title and footer
    let grid_top = title_y - HEADER_GAP_MM;
    let grid_bottom = MARGIN_MM + FOOTER_FONT_SIZE * PT_TO_MM + FOOTER_GAP_MM;
    let grid_width = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;

    let rows = config.rows as usize;
    let cols = config.cols as usize;
    let cell_w = grid_width / cols as f32;
    let cell_h = (grid_top - grid_bottom) / rows as f32;

    for r in 0..rows {
        for c in 0..cols {
            let x = MARGIN_MM + c as f32 * cell_w;
            let y = grid_bottom + (rows - 1 - r) as f32 * cell_h; // row 0 at top
            let is_free = card.free_cell == Some((r, c));

            if is_free {
                layer.set_fill_color(Color::Rgb(Rgb::new(1.0, 0.95, 0.8, None)));
                fill_rect(layer, x, y, cell_w, cell_h);
                layer.set_fill_color(text_color.clone());
            }

            layer.set_outline_color(Color::Rgb(Rgb::new(0.13, 0.13, 0.13, None)));
            layer.set_outline_thickness(1.0);
            stroke_rect(layer, x, y, cell_w, cell_h);

            let font = if is_free { font_bold } else { font_regular };
            draw_cell_text(layer, font, &card.cells[r][c], x, y, cell_w, cell_h);
        }
    }
}

/// Draw text centered inside a cell, wrapping and shrinking as needed.
fn draw_cell_text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
) {
    let max_w = w - 2.0 * CELL_PADDING_MM;
    let max_h = h - 2.0 * CELL_PADDING_MM;
    let (size, lines) = fit_cell_text(text, max_w, max_h);

    let line_height = size * 1.2 * PT_TO_MM;
    let block_height = lines.len() as f32 * line_height;
    let size_mm = size * PT_TO_MM;
    let mut line_y = y + h / 2.0 + block_height / 2.0 - line_height + (line_height - size_mm) / 2.0;

    for line in &lines {
        draw_centered_text(layer, font, line, size, x + w / 2.0, line_y);
        line_y -= line_height;
    }
}

/// Pick the largest font size from CELL_FONT_SIZE down to
/// MIN_CELL_FONT_SIZE at which the wrapped text fits the given box, and
/// return it with the wrapped lines. At the minimum size the text is used
/// even if it overflows.
fn fit_cell_text(text: &str, max_w_mm: f32, max_h_mm: f32) -> (f32, Vec<String>) {
    let mut size = CELL_FONT_SIZE;
    loop {
        let lines = wrap_text(text, size, max_w_mm);
        let block_height = lines.len() as f32 * size * 1.2 * PT_TO_MM;
        let widest = lines
            .iter()
            .map(|l| text_width_mm(l, size))
            .fold(0.0_f32, f32::max);

        if (block_height <= max_h_mm && widest <= max_w_mm) || size <= MIN_CELL_FONT_SIZE {
            return (size, lines);
        }
        size -= 1.0;
    }
}

/// Greedy word wrap against the estimated line width. A single word wider
/// than the limit gets a line of its own.
fn wrap_text(text: &str, font_size: f32, max_w_mm: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if text_width_mm(&candidate, font_size) <= max_w_mm || current.is_empty() {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn text_width_mm(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * AVG_CHAR_WIDTH * PT_TO_MM
}

// ============================================================================
// Drawing Utilities
// ============================================================================

fn draw_centered_text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    font_size: f32,
    center_x: f32,
    baseline_y: f32,
) {
    let x = centered_x(text, font_size, center_x);
    layer.use_text(text, font_size, Mm(x), Mm(baseline_y), font);
}

/// Estimated left edge for centered text, clamped to the page margin so
/// an overlong title still starts on the page instead of at a negative x.
fn centered_x(text: &str, font_size: f32, center_x: f32) -> f32 {
    (center_x - text_width_mm(text, font_size) / 2.0).max(MARGIN_MM)
}

fn stroke_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32) {
    let line = Line {
        points: rect_points(x, y, w, h),
        is_closed: true,
    };
    layer.add_line(line);
}

fn fill_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32) {
    let polygon = Polygon {
        rings: vec![rect_points(x, y, w, h)],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    };
    layer.add_polygon(polygon);
}

fn rect_points(x: f32, y: f32, w: f32, h: f32) -> Vec<(Point, bool)> {
    vec![
        (Point::new(Mm(x), Mm(y)), false),
        (Point::new(Mm(x + w), Mm(y)), false),
        (Point::new(Mm(x + w), Mm(y + h)), false),
        (Point::new(Mm(x), Mm(y + h)), false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_keeps_base_size() {
        let (size, lines) = fit_cell_text("Bingo", 35.0, 35.0);
        assert_eq!(size, CELL_FONT_SIZE);
        assert_eq!(lines, vec!["Bingo"]);
    }

    #[test]
    fn long_text_shrinks_and_wraps() {
        let text = "An unusually long bingo square description that cannot fit on one line";
        let (size, lines) = fit_cell_text(text, 35.0, 35.0);
        assert!(size < CELL_FONT_SIZE);
        assert!(lines.len() > 1);
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn shrink_stops_at_minimum_size() {
        let text = "word ".repeat(200);
        let (size, _) = fit_cell_text(text.trim(), 20.0, 20.0);
        assert_eq!(size, MIN_CELL_FONT_SIZE);
    }

    #[test]
    fn centered_text_splits_the_axis() {
        let x = centered_x("BINGO", TITLE_FONT_SIZE, PAGE_WIDTH_MM / 2.0);
        let width = text_width_mm("BINGO", TITLE_FONT_SIZE);
        assert!((x + width / 2.0 - PAGE_WIDTH_MM / 2.0).abs() < 0.001);
    }

    #[test]
    fn overlong_title_clamps_to_the_margin() {
        let title = "Annual Charity Trivia and Bingo Extravaganza Night".repeat(3);
        let x = centered_x(&title, TITLE_FONT_SIZE, PAGE_WIDTH_MM / 2.0);
        assert_eq!(x, MARGIN_MM);
    }

    #[test]
    fn oversized_word_gets_its_own_line() {
        let lines = wrap_text("a Pneumonoultramicroscopic b", CELL_FONT_SIZE, 15.0);
        assert!(lines.contains(&"Pneumonoultramicroscopic".to_string()));
    }
}
