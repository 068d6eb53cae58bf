use crate::colour::Colour;
use crate::font::Font;
use crate::layout::fit_font_size;
use crate::metrics::{measure, GlyphMetrics};
use crate::template::{FieldValues, Template};
use crate::text_box::TextBox;
use crate::{LabelError, Result};
use std::fmt::Write;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Font sizes are written rounded down to this many parts per unit, so the written size
/// never exceeds the fitted one
const FONT_SIZE_PRECISION: f64 = 1000.0;

/// Composes label SVG documents. A composer holds everything about the output that
/// doesn't change between renders (the font family to ask for, text colour, whether to
/// draw box outlines) and can be reused for any number of templates and values.
#[derive(Debug, Clone, PartialEq)]
pub struct Composer {
    font_family: String,
    fill: Option<Colour>,
    outline: Option<Colour>,
}

impl Composer {
    /// Create a composer whose documents ask for the given font family
    pub fn new<S: Into<String>>(font_family: S) -> Composer {
        Composer {
            font_family: font_family.into(),
            fill: None,
            outline: None,
        }
    }

    /// Create a composer whose documents ask for the family of `font`, so that the text
    /// is drawn with the same typeface it was measured with
    pub fn for_font(font: &Font) -> Composer {
        let family = font.family().unwrap_or_else(|| {
            log::warn!("font has no family name, falling back to sans-serif");
            "sans-serif".to_string()
        });
        Composer::new(family)
    }

    /// Fill text with `colour` rather than the SVG default (black)
    pub fn with_fill(mut self, colour: Colour) -> Composer {
        self.fill = Some(colour);
        self
    }

    /// Draw the footprint of every text box as an outline in `colour`. Useful when
    /// designing templates.
    pub fn with_outlines(mut self, colour: Colour) -> Composer {
        self.outline = Some(colour);
        self
    }

    /// The font family named in composed documents
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Render one label from `template`, taking the text for each box from `values` and
    /// measuring it with `font`.
    ///
    /// Boxes are drawn in template order. Every field the template names must have a
    /// value; the first one that doesn't aborts the render with
    /// [LabelError::MissingField].
    pub fn compose<M: GlyphMetrics + ?Sized>(
        &self,
        template: &Template,
        values: &FieldValues,
        font: &M,
    ) -> Result<String> {
        let (width, height) = template.cell_size()?;

        let mut contents = String::new();
        for text_box in template.boxes.iter() {
            let text = values
                .get(&text_box.field)
                .ok_or_else(|| LabelError::MissingField {
                    field: text_box.field.clone(),
                })?;

            let metrics = measure(font, text);
            let font_size = fit_font_size(text_box, &metrics);

            self.write_box(&mut contents, text_box, text, font_size)
                .map_err(|source| LabelError::Composition {
                    field: text_box.field.clone(),
                    source,
                })?;
        }

        log::info!(
            "composed {width}mm x {height}mm label with {} fields",
            template.boxes.len()
        );

        Ok(format!(
            "<svg width=\"{width}mm\" height=\"{height}mm\" viewBox=\"0 0 {width} {height}\" \
             xmlns=\"{SVG_NAMESPACE}\" style=\"font-family:{family};\">{contents}</svg>",
            family = htmlize::escape_attribute(self.font_family.as_str()),
        ))
    }

    fn write_box(
        &self,
        out: &mut String,
        text_box: &TextBox,
        text: &str,
        font_size: f64,
    ) -> std::fmt::Result {
        if let Some(outline) = self.outline {
            write!(
                out,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"transparent\" \
                 style=\"stroke-width:0.5;stroke:{outline}\"/>",
                text_box.left(),
                text_box.top(),
                text_box.width,
                text_box.height,
            )?;
        }

        let font_size = truncate_font_size(font_size);
        write!(
            out,
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"{font_size}\"",
            text_box.x, text_box.y,
        )?;
        if let Some(fill) = self.fill {
            write!(out, " fill=\"{fill}\"")?;
        }
        write!(out, ">{}</text>", htmlize::escape_text(text))
    }
}

fn truncate_font_size(font_size: f64) -> f64 {
    let truncated = (font_size * FONT_SIZE_PRECISION).floor() / FONT_SIZE_PRECISION;
    truncated.min(font_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::layout::Grid;
    use crate::pagesize;
    use crate::units::Mm;
    use owned_ttf_parser::{GlyphId, Rect};
    use pretty_assertions::assert_eq;

    /// Every character is half an em wide and 0.7 em tall, except 'x' which is missing
    struct Monospace;

    impl GlyphMetrics for Monospace {
        fn units_per_em(&self) -> u16 {
            1024
        }

        fn glyph_index(&self, ch: char) -> Option<GlyphId> {
            (ch != 'x').then_some(GlyphId(1))
        }

        fn glyph_advance(&self, _glyph: GlyphId) -> Option<u16> {
            Some(512)
        }

        fn glyph_bounds(&self, _glyph: GlyphId) -> Option<Rect> {
            Some(Rect {
                x_min: 0,
                y_min: 0,
                x_max: 512,
                y_max: 717,
            })
        }
    }

    fn single_box(width: f64, height: f64) -> Template {
        Template::new(pagesize::A4, Grid::new(2, 4)).with_box(TextBox::new(
            "name",
            Mm(50.0),
            Mm(40.0),
            Mm(width),
            Mm(height),
        ))
    }

    fn values(name: &str) -> FieldValues {
        FieldValues::from([("name".to_string(), name.to_string())])
    }

    #[test]
    fn composes_a_single_field() {
        // 8 glyphs of half an em: 4 ems in 80mm
        let svg = Composer::new("Arial")
            .compose(&single_box(80.0, 30.0), &values("abcdefgh"), &Monospace)
            .expect("can compose");
        assert_eq!(
            svg,
            "<svg width=\"105mm\" height=\"74.25mm\" viewBox=\"0 0 105 74.25\" \
             xmlns=\"http://www.w3.org/2000/svg\" style=\"font-family:Arial;\">\
             <text x=\"50\" y=\"40\" text-anchor=\"middle\" font-size=\"20\">abcdefgh</text>\
             </svg>"
        );
    }

    #[test]
    fn fill_and_outlines_are_optional() {
        let svg = Composer::new("Arial")
            .with_fill(colours::BLUE)
            .with_outlines(colours::RED)
            .compose(&single_box(80.0, 30.0), &values("ab"), &Monospace)
            .expect("can compose");
        assert!(svg.contains(
            "<rect x=\"10\" y=\"10\" width=\"80\" height=\"30\" fill=\"transparent\" \
             style=\"stroke-width:0.5;stroke:#ff0000\"/>"
        ));
        assert!(svg.contains("font-size=\"30\" fill=\"#0000ff\">ab</text>"));
    }

    #[test]
    fn text_is_escaped() {
        let svg = Composer::new("Fish & Chips")
            .compose(&single_box(80.0, 30.0), &values("<b>&amp;</b>"), &Monospace)
            .expect("can compose");
        assert!(svg.contains("font-family:Fish &amp; Chips;"));
        assert!(svg.contains(">&lt;b&gt;&amp;amp;&lt;/b&gt;</text>"));
    }

    #[test]
    fn unmeasurable_text_uses_the_box_height() {
        let svg = Composer::new("Arial")
            .compose(&single_box(80.0, 12.5), &values("xxx"), &Monospace)
            .expect("can compose");
        assert!(svg.contains("font-size=\"12.5\">xxx</text>"));
    }

    #[test]
    fn font_sizes_are_rounded_down() {
        // 3 glyphs = 1536 units; 1024 * 10 / 1536 = 6.6666...
        let svg = Composer::new("Arial")
            .compose(&single_box(10.0, 30.0), &values("abc"), &Monospace)
            .expect("can compose");
        assert!(svg.contains("font-size=\"6.666\""), "{svg}");
    }

    #[test]
    fn written_size_never_exceeds_box_height() {
        let svg = Composer::new("Arial")
            .compose(&single_box(80.0, 10.0005), &values("ab"), &Monospace)
            .expect("can compose");
        assert!(svg.contains("font-size=\"10\""), "{svg}");
    }

    #[test]
    fn written_size_never_overflows_box_width() {
        // "abc" is 1.5 em wide
        for width in 1..=200 {
            let fitted = fit_font_size(
                &TextBox::new("name", Mm(0.0), Mm(0.0), Mm(width as f64), Mm(1000.0)),
                &measure(&Monospace, "abc"),
            );
            let written = truncate_font_size(fitted);
            assert!(written <= fitted, "width {width}: {written} > {fitted}");
            assert!(
                1.5 * written <= width as f64,
                "width {width}: renders {} wide",
                1.5 * written
            );
        }
    }

    #[test]
    fn missing_values_name_the_field() {
        let err = Composer::new("Arial")
            .compose(&single_box(80.0, 30.0), &FieldValues::new(), &Monospace)
            .err()
            .expect("must fail");
        assert!(matches!(&err, LabelError::MissingField { field } if field == "name"));
        assert_eq!(err.to_string(), "no value supplied for field `name`");
    }

    #[test]
    fn invalid_grids_fail_before_measuring() {
        let mut template = single_box(80.0, 30.0);
        template.grid = Grid::new(0, 0);
        let result = Composer::new("Arial").compose(&template, &FieldValues::new(), &Monospace);
        assert!(matches!(result, Err(LabelError::InvalidGrid { .. })));
    }
}
