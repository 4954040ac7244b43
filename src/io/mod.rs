#[cfg(feature = "svg-io")]
pub mod svg;

#[cfg(feature = "dxf-io")]
pub mod dxf;

/// Generic I/O and format‑conversion errors.
///
/// Exporters are behind cargo feature‑flags.
/// When a feature is disabled the corresponding variant does not exist.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),

    MalformedInput(String),

    #[cfg(feature = "dxf-io")]
    /// Error bubbled up from the `dxf` crate while reading or writing a drawing.
    Dxf(::dxf::DxfError),

    #[cfg(feature = "serde")]
    /// A run file could not be parsed.
    Json(serde_json::Error),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),

            MalformedInput(msg) => write!(f, "Input is malformed: {msg}"),

            #[cfg(feature = "dxf-io")]
            Dxf(error) => write!(f, "DXF error: {error}"),

            #[cfg(feature = "serde")]
            Json(error) => write!(f, "Run file error: {error}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

#[cfg(feature = "dxf-io")]
impl From<::dxf::DxfError> for IoError {
    fn from(value: ::dxf::DxfError) -> Self {
        Self::Dxf(value)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for IoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
