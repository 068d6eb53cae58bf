use label_gen::{colours, Composer, FieldValues, Font, Template};

fn main() {
    // load the font used both to measure the text and to name in the document
    let font = include_bytes!("../assets/DejaVuSans.ttf");
    let font = Font::load(font.to_vec()).expect("can load font");

    // the built-in template: an A4 sheet cut into 2 x 4 badges, first name above last name
    let template = Template::name_badge();

    let values = FieldValues::from([
        ("fname".to_string(), "Ksenya".to_string()),
        ("lname".to_string(), "Kosterova".to_string()),
    ]);

    // outline the boxes so it's easy to see how much room each name had
    let composer = Composer::for_font(&font).with_outlines(colours::RED);
    let svg = composer
        .compose(&template, &values, &font)
        .expect("every field has a value");

    std::fs::write("name-badge.svg", svg).unwrap();
}
