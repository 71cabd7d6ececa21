// this_file: src/lib.rs

//! FreeType-backed per-glyph pixel metrics and alpha-mask compositing.
//!
//! `ftmask` exposes a scalable outline font as a stream of per-glyph pixel
//! measurements and 8-bit coverage masks, ready for compositing text onto a
//! raster canvas:
//!
//! ```no_run
//! use ftmask::{Canvas, Library, Point};
//!
//! # fn main() -> ftmask::Result<()> {
//! let library = Library::new()?;
//! let data = std::fs::read("font.ttf").expect("font file");
//! let mut face = library.new_face(data, 0)?;
//! face.set_size_points(44, 300)?;
//!
//! let metrics = face.metrics('g')?;
//! println!("advance {}px", metrics.advance_width);
//!
//! let mut canvas = Canvas::alpha8(256, 256);
//! face.render_into(&mut canvas, Point::new(16, 16), 'g')?;
//! # Ok(())
//! # }
//! ```
//!
//! The engine's per-face glyph slot is not reentrant, so glyph queries take
//! `&mut Face`; wrap a face in a lock to share it between threads. Faces of
//! one [`Library`] may be used concurrently from different threads (each
//! face on one thread at a time), but creating and dropping faces against a
//! shared library must be externally serialized. Outline decoding, hinting
//! and scan conversion stay inside the engine; this crate only converts its
//! results and moves bytes across the boundary safely.

pub mod canvas;
pub mod error;
pub mod face;
pub mod library;
pub mod types;
mod units;

pub use canvas::{Canvas, PixelFormat};
pub use error::{Error, Result};
pub use face::Face;
pub use library::Library;
pub use types::{Metrics, Point, Rect};
