//! Rendering with a real TrueType face rather than a stand-in.

use label_gen::{measure, Composer, FieldValues, Font, Template};

fn dejavu_sans() -> Font {
    let bytes = include_bytes!("../assets/DejaVuSans.ttf");
    Font::load(bytes.to_vec()).expect("can load font")
}

fn font_size_of(svg: &str, text: &str) -> f64 {
    let doc = roxmltree::Document::parse(svg).expect("valid xml");
    doc.descendants()
        .find(|n| n.has_tag_name("text") && n.text() == Some(text))
        .and_then(|n| n.attribute("font-size"))
        .expect("text is drawn")
        .parse()
        .expect("font-size is a number")
}

#[test]
fn composer_names_the_measured_family() {
    let font = dejavu_sans();
    assert_eq!(Composer::for_font(&font).font_family(), "DejaVu Sans");
}

#[test]
fn name_badge_fits_real_glyphs() {
    let font = dejavu_sans();
    let values = FieldValues::from([
        ("fname".to_string(), "Ksenya".to_string()),
        ("lname".to_string(), "Kosterova".to_string()),
    ]);
    let svg = Composer::for_font(&font)
        .compose(&Template::name_badge(), &values, &font)
        .expect("can compose");
    assert!(svg.contains("style=\"font-family:DejaVu Sans;\""));

    for (text, width, height) in [("Ksenya", 92.0, 26.5), ("Kosterova", 90.476, 36.364)] {
        let size = font_size_of(&svg, text);
        let rendered = measure(&font, text).advance_width as f64 * size / 1024.0;
        assert!(size > 0.0 && size <= height, "{text}: {size}");
        assert!(rendered <= width, "{text}: {rendered}mm wide");
        assert!(rendered > width - 0.01, "{text}: only {rendered}mm wide");
    }
}

#[test]
fn text_without_glyphs_gets_the_box_height() {
    let font = dejavu_sans();
    let values = FieldValues::from([
        ("fname".to_string(), "中文".to_string()),
        ("lname".to_string(), String::new()),
    ]);
    let svg = Composer::for_font(&font)
        .compose(&Template::name_badge(), &values, &font)
        .expect("can compose");
    assert_eq!(font_size_of(&svg, "中文"), 26.5);
    assert!(svg.contains("font-size=\"36.364\"></text>"), "{svg}");
}
