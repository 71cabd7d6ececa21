// this_file: src/library.rs

//! The engine handle: one rasterizer instance per [`Library`] value.

use std::ptr;
use std::sync::Arc;

use freetype_sys::{FT_Done_FreeType, FT_Init_FreeType, FT_Library};

use crate::error::{engine_error_message, Error, Result};

/// Owns one raw engine handle and releases it exactly once.
pub(crate) struct LibraryHandle {
    pub(crate) raw: FT_Library,
}

impl Drop for LibraryHandle {
    fn drop(&mut self) {
        // Runs only after the last Library clone and the last Face holding
        // this Arc are gone, so every face handle has already been released.
        unsafe {
            FT_Done_FreeType(self.raw);
        }
        log::debug!("engine released");
    }
}

// The raw handle is never read or written here after initialization, only
// passed back to the engine. Face creation and destruction against a shared
// library are not reentrant in the engine and must be externally serialized;
// see the crate-level docs.
unsafe impl Send for LibraryHandle {}
unsafe impl Sync for LibraryHandle {}

/// Handle to one rasterization engine instance.
///
/// Each `Library` value is an independent engine; nothing is process-wide,
/// so independent instances can coexist (tests rely on this). Faces created
/// from a library keep it alive: the engine is released only after the last
/// `Library` clone and the last [`Face`](crate::Face) are dropped, in
/// whatever order that happens.
#[derive(Clone)]
pub struct Library {
    pub(crate) inner: Arc<LibraryHandle>,
}

impl Library {
    /// Initialize a new engine instance.
    pub fn new() -> Result<Self> {
        let mut raw: FT_Library = ptr::null_mut();
        let code = unsafe { FT_Init_FreeType(&mut raw) };
        if code != 0 {
            return Err(Error::EngineInit {
                reason: engine_error_message(code),
            });
        }
        log::debug!("engine initialized");
        Ok(Self {
            inner: Arc::new(LibraryHandle { raw }),
        })
    }
}
