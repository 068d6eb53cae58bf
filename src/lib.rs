//! Render personalised labels and certificates as SVG.
//!
//! A [Template] places named [TextBox]es on a label. [Composer::compose] fills each box
//! with its value, shrinking the font until the text fits the box, and returns the SVG.
//!
//! ```no_run
//! use label_gen::{Composer, FieldValues, Font, Template};
//!
//! let font = Font::open("assets/DejaVuSans.ttf")?;
//! let values = FieldValues::from([
//!     ("fname".to_string(), "Ksenya".to_string()),
//!     ("lname".to_string(), "Kosterova".to_string()),
//! ]);
//! let svg = Composer::for_font(&font).compose(&Template::name_badge(), &values, &font)?;
//! # Ok::<(), label_gen::LabelError>(())
//! ```

mod colour;
pub use colour::*;

mod font;
pub use font::*;

/// Request handling independent of any web framework
pub mod handler;

/// Utility functions and structures to fit text into label boxes
pub mod layout;

mod metrics;
pub use metrics::*;

pub mod pagesize;

mod svg;
pub use svg::*;

mod template;
pub use template::*;

mod text_box;
pub use text_box::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export font parsing functionality, mostly for custom [GlyphMetrics] implementations
pub use owned_ttf_parser;
