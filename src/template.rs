use crate::layout::Grid;
use crate::pagesize::{self, PageSize};
use crate::text_box::TextBox;
use crate::units::Mm;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;

/// The text to draw, keyed by field name
pub type FieldValues = HashMap<String, String>;

/// Describes a label: the page it is cut from, how that page is divided into labels,
/// and where each field is drawn on one label.
///
/// Templates are plain data and are usually loaded from JSON:
///
/// ```json
/// {
///   "page": [210, 297],
///   "grid": { "columns": 2, "rows": 4 },
///   "boxes": [
///     { "x": 52.5, "y": 29.813, "width": 92, "height": 26.5, "field": "fname" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Size of the whole page, in millimetres
    #[serde(default = "default_page")]
    pub page: PageSize,
    #[serde(default)]
    pub grid: Grid,
    /// Boxes are drawn in this order
    pub boxes: Vec<TextBox>,
}

fn default_page() -> PageSize {
    pagesize::A4
}

impl Template {
    /// Create a template with no boxes, for `page` divided by `grid`
    pub fn new(page: PageSize, grid: Grid) -> Template {
        Template {
            page,
            grid,
            boxes: Vec::new(),
        }
    }

    /// Add a box to the end of the template
    pub fn with_box(mut self, text_box: TextBox) -> Template {
        self.boxes.push(text_box);
        self
    }

    /// An A4 sheet of eight name badges, with a first name above a last name
    pub fn name_badge() -> Template {
        let centre = pagesize::A4.0 / 4.0;
        Template::new(pagesize::A4, Grid::new(2, 4))
            .with_box(TextBox::new("fname", centre, Mm(29.813), Mm(92.0), Mm(26.5)))
            .with_box(TextBox::new("lname", centre, Mm(60.257), Mm(90.476), Mm(36.364)))
    }

    /// Parse a template from a JSON string
    pub fn from_json(json: &str) -> Result<Template> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a template from a JSON reader, such as an open file
    pub fn from_reader<R: Read>(reader: R) -> Result<Template> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Size of one label, i.e. the page divided by the grid
    pub fn cell_size(&self) -> Result<PageSize> {
        self.grid.cell_size(self.page)
    }

    /// Names of all fields the template draws, in drawing order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.boxes.iter().map(|b| b.field.as_str())
    }
}
