use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LabelError {
    #[error(transparent)]
    /// An I/O error occurred while reading a font or template
    Io(#[from] std::io::Error),

    #[error("failed to load font: {0}")]
    /// [ttf_parser](owned_ttf_parser) failed to parse the font
    FontLoad(#[from] owned_ttf_parser::FaceParsingError),

    #[error("malformed template: {0}")]
    /// The template description could not be deserialized
    Template(#[from] serde_json::Error),

    #[error("no value supplied for field `{field}`")]
    /// A text box refers to a field that has no value
    MissingField { field: String },

    #[error("grid must have at least one column and one row (got {columns}x{rows})")]
    /// The template grid would divide the page by zero
    InvalidGrid { columns: u32, rows: u32 },

    #[error("failed to compose `{field}`")]
    /// Writing the SVG fragment for a field failed
    Composition {
        field: String,
        #[source]
        source: std::fmt::Error,
    },
}

/// Shorthand for results produced by this crate
pub type Result<T> = std::result::Result<T, LabelError>;
