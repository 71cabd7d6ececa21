// this_file: src/face.rs

//! Face loading, sizing, metrics extraction, and mask compositing.

use std::ffi::CStr;
use std::os::raw::c_char;
use std::ptr;
use std::slice;
use std::sync::Arc;

use freetype_sys::{
    FT_Done_Face, FT_Face, FT_Get_Char_Index, FT_Load_Char, FT_New_Memory_Face,
    FT_Select_Charmap, FT_Set_Char_Size, FT_Set_Pixel_Sizes, FT_ENCODING_UNICODE,
    FT_F26Dot6, FT_FACE_FLAG_FIXED_WIDTH, FT_FACE_FLAG_KERNING, FT_FACE_FLAG_SCALABLE,
    FT_Int32, FT_LOAD_DEFAULT, FT_LOAD_RENDER, FT_Long, FT_PIXEL_MODE_GRAY, FT_UInt,
    FT_ULong,
};

use crate::canvas::{Canvas, PixelFormat};
use crate::error::{engine_error_message, Error, Result};
use crate::library::{Library, LibraryHandle};
use crate::types::{Metrics, Point, Rect};
use crate::units;

impl Library {
    /// Load one face of an in-memory font file.
    ///
    /// The engine borrows the byte buffer for the whole life of the face, so
    /// the face takes ownership of it; pass an `Arc` clone to load several
    /// faces of a collection without copying the data. Fonts without
    /// scalable outlines and fonts without a Unicode charmap are rejected.
    pub fn new_face(&self, data: impl Into<Arc<[u8]>>, face_index: u32) -> Result<Face> {
        let data: Arc<[u8]> = data.into();
        if data.is_empty() {
            return Err(Error::Load {
                face_index,
                reason: "empty font data".to_string(),
            });
        }

        let mut raw: FT_Face = ptr::null_mut();
        let code = unsafe {
            FT_New_Memory_Face(
                self.inner.raw,
                data.as_ptr(),
                data.len() as FT_Long,
                face_index as FT_Long,
                &mut raw,
            )
        };
        if code != 0 {
            return Err(Error::Load {
                face_index,
                reason: engine_error_message(code),
            });
        }

        // From here on `face` owns the engine resource: the early returns
        // below run its Drop, so a rejected face never leaks.
        let flags = unsafe { (*raw).face_flags };
        let face = Face {
            _library: Arc::clone(&self.inner),
            raw,
            has_kerning: flags & (FT_FACE_FLAG_KERNING as FT_Long) != 0,
            _data: data,
        };

        if flags & (FT_FACE_FLAG_SCALABLE as FT_Long) == 0 {
            return Err(Error::UnscalableFont);
        }
        let code = unsafe { FT_Select_Charmap(face.raw, FT_ENCODING_UNICODE) };
        if code != 0 {
            return Err(Error::NoUnicodeCharmap);
        }

        log::debug!(
            "loaded face {:?} {:?} (index {}, kerning {})",
            face.family_name(),
            face.style_name(),
            face_index,
            face.has_kerning,
        );
        Ok(face)
    }
}

/// One loaded instance of a scalable font, bound to the [`Library`] that
/// created it.
///
/// Glyph queries ([`metrics`](Self::metrics), [`render_into`](Self::render_into))
/// reload the engine's per-face current-glyph slot, which is not reentrant,
/// so they take `&mut self`. Distinct faces are independent: faces of one
/// library may live on different threads, each used by one thread at a time.
pub struct Face {
    // Keeps the engine alive until every face handle is released.
    _library: Arc<LibraryHandle>,
    raw: FT_Face,
    has_kerning: bool,
    // The engine reads the font bytes on demand for the face's whole
    // lifetime; owning them here means the borrow cannot dangle.
    _data: Arc<[u8]>,
}

// Moving a face between threads is fine: all engine per-face state is
// reached through `&mut self`. Deliberately not Sync.
unsafe impl Send for Face {}

impl Face {
    /// Number of faces in the font file this face was loaded from.
    pub fn num_faces(&self) -> u32 {
        unsafe { (*self.raw).num_faces as u32 }
    }

    /// Number of glyphs in this face.
    pub fn num_glyphs(&self) -> u32 {
        unsafe { (*self.raw).num_glyphs as u32 }
    }

    /// Font family name, when the font carries one.
    pub fn family_name(&self) -> Option<String> {
        c_string_field(unsafe { (*self.raw).family_name })
    }

    /// Font style name (e.g. "Regular"), when the font carries one.
    pub fn style_name(&self) -> Option<String> {
        c_string_field(unsafe { (*self.raw).style_name })
    }

    /// True if the font advertises kerning pairs.
    pub fn has_kerning(&self) -> bool {
        self.has_kerning
    }

    /// True if every glyph occupies the same advance width.
    pub fn is_fixed_width(&self) -> bool {
        unsafe { (*self.raw).face_flags & (FT_FACE_FLAG_FIXED_WIDTH as FT_Long) != 0 }
    }

    /// Set the character size in points at the given resolution in
    /// dots-per-inch (72 for nominal sizes).
    pub fn set_size_points(&mut self, points: u32, dpi: u32) -> Result<()> {
        let height = (i64::from(points) << 6) as FT_F26Dot6;
        let code =
            unsafe { FT_Set_Char_Size(self.raw, 0, height, dpi as FT_UInt, dpi as FT_UInt) };
        if code != 0 {
            return Err(Error::Size {
                reason: engine_error_message(code),
            });
        }
        log::debug!("size set to {points}pt at {dpi}dpi");
        Ok(())
    }

    /// Set a fixed pixel height; the horizontal size scales proportionally.
    pub fn set_size_pixels(&mut self, pixels: u32) -> Result<()> {
        let code = unsafe { FT_Set_Pixel_Sizes(self.raw, 0, pixels as FT_UInt) };
        if code != 0 {
            return Err(Error::Size {
                reason: engine_error_message(code),
            });
        }
        log::debug!("size set to {pixels}px");
        Ok(())
    }

    /// Overall bounding box of the font at the current size, in pixels.
    ///
    /// Degenerate (all zero) until a size has been selected.
    pub fn bounds(&self) -> Rect {
        let bbox = unsafe { &(*self.raw).bbox };
        Rect {
            x_min: self.x_pixels(bbox.xMin as i64),
            y_min: self.y_pixels(bbox.yMin as i64),
            x_max: self.x_pixels(bbox.xMax as i64),
            y_max: self.y_pixels(bbox.yMax as i64),
        }
    }

    /// Default baseline-to-baseline spacing at the current size, in pixels.
    pub fn line_height(&self) -> i32 {
        self.y_pixels(unsafe { (*self.raw).height } as i64)
    }

    /// Maximum horizontal glyph advance at the current size, in pixels.
    pub fn max_advance_width(&self) -> i32 {
        self.x_pixels(unsafe { (*self.raw).max_advance_width } as i64)
    }

    /// Maximum vertical glyph advance at the current size, in pixels.
    pub fn max_advance_height(&self) -> i32 {
        self.y_pixels(unsafe { (*self.raw).max_advance_height } as i64)
    }

    /// Glyph index for a character, or `None` when the charmap has no entry.
    pub fn glyph_index(&self, ch: char) -> Option<u32> {
        let index = unsafe { FT_Get_Char_Index(self.raw, ch as FT_ULong) };
        if index == 0 {
            None
        } else {
            Some(index as u32)
        }
    }

    /// Pixel-unit metrics for one character's glyph.
    ///
    /// Loads outline and metrics only; nothing is rasterized. The engine
    /// reports the glyph metrics block in 26.6 device pixels already, so the
    /// fields shift straight to whole pixels without design-unit scaling.
    pub fn metrics(&mut self, ch: char) -> Result<Metrics> {
        self.load_glyph(ch, FT_LOAD_DEFAULT as FT_Int32)?;
        let m = unsafe { &(*(*self.raw).glyph).metrics };
        log::trace!("metrics for {ch:?}: {}x{} (26.6)", m.width, m.height);
        Ok(Metrics {
            width: units::f26dot6_to_pixels(m.width as i64),
            height: units::f26dot6_to_pixels(m.height as i64),
            hori_bearing_x: units::f26dot6_to_pixels(m.horiBearingX as i64),
            hori_bearing_y: units::f26dot6_to_pixels(m.horiBearingY as i64),
            advance_width: units::f26dot6_to_pixels(m.horiAdvance as i64),
            vert_bearing_x: units::f26dot6_to_pixels(m.vertBearingX as i64),
            vert_bearing_y: units::f26dot6_to_pixels(m.vertBearingY as i64),
            advance_height: units::f26dot6_to_pixels(m.vertAdvance as i64),
        })
    }

    /// Rasterize one character and copy its coverage mask into `dst`, mask
    /// top-left at `origin`.
    ///
    /// Rows are clipped at the destination's bottom edge: copying stops at
    /// the last valid row and the call still succeeds. Columns are NOT
    /// clipped at the destination's right edge: a mask wider than
    /// `dst.width() - origin.x` spills into adjacent bytes of the same
    /// destination buffer (never outside it). Size the destination
    /// generously, e.g. from [`bounds`](Self::bounds).
    pub fn render_into(&mut self, dst: &mut Canvas, origin: Point, ch: char) -> Result<()> {
        if dst.format() != PixelFormat::Alpha8 {
            return Err(Error::UnsupportedDestination {
                format: dst.format(),
            });
        }
        self.load_glyph(ch, FT_LOAD_RENDER as FT_Int32)?;

        let bitmap = unsafe { &(*(*self.raw).glyph).bitmap };
        let gray = bitmap.pixel_mode as u32 == FT_PIXEL_MODE_GRAY as u32
            && bitmap.num_grays as u32 == 256;
        // Upward row flow (negative pitch) never occurs for the gray masks
        // requested here; refuse rather than reinterpret.
        if !gray || bitmap.pitch < 0 {
            return Err(Error::UnsupportedPixelFormat {
                pixel_mode: bitmap.pixel_mode as u8,
                num_grays: bitmap.num_grays as u16,
            });
        }

        let rows = bitmap.rows as usize;
        let stride = bitmap.pitch as usize;
        if rows == 0 || stride == 0 || bitmap.buffer.is_null() {
            return Ok(());
        }
        // One bounds-validated view over the engine-owned buffer. It is
        // invalidated by the next glyph load; nothing below retains it.
        let mask = unsafe { slice::from_raw_parts(bitmap.buffer, rows * stride) };

        let dst_stride = dst.stride();
        let dst_height = dst.height() as usize;
        let origin_x = origin.x as usize;
        let dst_data = dst.data_mut();
        for y in 0..rows {
            let dst_y = origin.y as usize + y;
            if dst_y >= dst_height {
                break;
            }
            let start = dst_y * dst_stride + origin_x;
            if start >= dst_data.len() {
                break;
            }
            let src_row = &mask[y * stride..(y + 1) * stride];
            let n = src_row.len().min(dst_data.len() - start);
            dst_data[start..start + n].copy_from_slice(&src_row[..n]);
        }
        log::trace!("composited {ch:?} ({rows} rows) at ({}, {})", origin.x, origin.y);
        Ok(())
    }

    fn load_glyph(&mut self, ch: char, flags: FT_Int32) -> Result<()> {
        // The engine substitutes glyph 0 for unmapped codepoints instead of
        // failing, so absence has to be detected up front.
        if self.glyph_index(ch).is_none() {
            return Err(Error::GlyphLoad {
                codepoint: ch,
                reason: "no glyph for character".to_string(),
            });
        }
        let code = unsafe { FT_Load_Char(self.raw, ch as FT_ULong, flags) };
        if code != 0 {
            return Err(Error::GlyphLoad {
                codepoint: ch,
                reason: engine_error_message(code),
            });
        }
        Ok(())
    }

    fn ppem(&self) -> (u16, u16) {
        unsafe {
            let size = (*self.raw).size;
            if size.is_null() {
                return (0, 0);
            }
            let metrics = &(*size).metrics;
            (metrics.x_ppem as u16, metrics.y_ppem as u16)
        }
    }

    fn units_per_em(&self) -> u16 {
        unsafe { (*self.raw).units_per_EM as u16 }
    }

    fn x_pixels(&self, value: i64) -> i32 {
        units::font_units_to_pixels(value, self.ppem().0, self.units_per_em())
    }

    fn y_pixels(&self, value: i64) -> i32 {
        units::font_units_to_pixels(value, self.ppem().1, self.units_per_em())
    }
}

impl Drop for Face {
    fn drop(&mut self) {
        unsafe {
            FT_Done_Face(self.raw);
        }
        // The library Arc drops after the face handle above, keeping the
        // engine alive for the release call.
    }
}

fn c_string_field(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let s = unsafe { CStr::from_ptr(ptr) };
    Some(s.to_string_lossy().into_owned())
}
