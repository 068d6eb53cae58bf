//! Fitting text into label boxes.
//!
//! A [Grid] splits a page into label-sized cells, and [fit_font_size] picks the font
//! size for one field from its box and the measured width of its text.
//!
//! # Example
//!
//! ```
//! use label_gen::layout::{fit_font_size, Grid};
//! use label_gen::{pagesize, Mm, TextBox, TextMetrics};
//!
//! let cell = Grid::new(2, 4).cell_size(pagesize::A4).unwrap();
//! assert_eq!(cell, (Mm(105.0), Mm(74.25)));
//!
//! let name = TextBox::new("fname", Mm(52.5), Mm(29.813), Mm(92.0), Mm(26.5));
//! let metrics = TextMetrics { advance_width: 4096, max_glyph_height: 700 };
//! assert_eq!(fit_font_size(&name, &metrics), 23.0);
//! ```

mod fit;
mod grid;

pub use fit::*;
pub use grid::*;
