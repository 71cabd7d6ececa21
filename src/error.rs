// this_file: src/error.rs

//! Error types for ftmask.
//!
//! Every nonzero engine status is translated at the call site into one of
//! the variants below, carrying the engine's descriptive message. All
//! failures here stem from deterministic inputs, so nothing is retried and
//! nothing is swallowed; each error is terminal for the operation that
//! raised it, not for the process.

use thiserror::Error;

use crate::canvas::PixelFormat;

/// Main error type for ftmask operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The rasterization engine could not be initialized.
    #[error("engine initialization failed: {reason}")]
    EngineInit { reason: String },

    /// The engine rejected the font data or the face index.
    #[error("failed to load face {face_index}: {reason}")]
    Load { face_index: u32, reason: String },

    /// The font has no scalable outlines (e.g. a pure bitmap font).
    #[error("font is not scalable; only outline fonts are supported")]
    UnscalableFont,

    /// The font exposes no Unicode character map.
    #[error("font has no unicode charmap")]
    NoUnicodeCharmap,

    /// The engine rejected the requested character size.
    #[error("failed to set size: {reason}")]
    Size { reason: String },

    /// The character has no glyph, or the engine failed to load it.
    #[error("failed to load glyph for {codepoint:?}: {reason}")]
    GlyphLoad { codepoint: char, reason: String },

    /// The engine produced a mask that is not 8-bit, 256-level gray.
    #[error("unsupported glyph pixel mode {pixel_mode} with {num_grays} gray levels")]
    UnsupportedPixelFormat { pixel_mode: u8, num_grays: u16 },

    /// The destination canvas is not an 8-bit alpha format.
    #[error("unsupported destination format {format:?}; expected Alpha8")]
    UnsupportedDestination { format: PixelFormat },
}

/// Specialized Result type for ftmask operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Translate one of the engine's fixed numeric error codes into its
/// descriptive string. Codes outside the known set keep their numeric value
/// so no diagnostic is lost.
pub(crate) fn engine_error_message(code: freetype_sys::FT_Error) -> String {
    let known = match code {
        0x01 => Some("cannot open resource"),
        0x02 => Some("unknown file format"),
        0x03 => Some("broken file"),
        0x04 => Some("invalid FreeType version"),
        0x06 => Some("invalid argument"),
        0x07 => Some("unimplemented feature"),
        0x08 => Some("broken table"),
        0x10 => Some("invalid glyph index"),
        0x11 => Some("invalid character code"),
        0x12 => Some("unsupported glyph image format"),
        0x13 => Some("cannot render this glyph format"),
        0x17 => Some("invalid pixel size"),
        0x23 => Some("invalid face handle"),
        0x24 => Some("invalid size handle"),
        0x40 => Some("out of memory"),
        0x51 => Some("cannot open stream"),
        _ => None,
    };
    match known {
        Some(message) => message.to_string(),
        None => format!("engine error 0x{code:02x}"),
    }
}
