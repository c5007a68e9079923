// ABOUTME: C FFI bindings for the bootstrapify content pipeline.
// ABOUTME: Exposes arena-allocated transform and embed-stripping results to a host CMS.

use std::panic;
use std::ptr;

use bumpalo::Bump;
use bootstrapify_content::{strip_embed_dimensions, transform};

/// FFI version constant for ABI compatibility checking.
pub const BOOTSTRAPIFY_FFI_VERSION: u32 = 1;

/// Returns the FFI ABI version number.
/// Consumers should check this matches their expected version.
#[no_mangle]
pub extern "C" fn bootstrapify_ffi_version() -> u32 {
    BOOTSTRAPIFY_FFI_VERSION
}

// ----------------------------------------------------------------------------
// Error handling
// ----------------------------------------------------------------------------

/// Error codes matching the C ABI DErrorCode enum.
#[repr(u32)]
pub enum DErrorCode {
    Ok = 0,
    Invalid = 4,
    Internal = 255,
}

/// UTF-8 string slice for FFI. Not null-terminated.
/// Consumer must not mutate or free; memory owned by arena.
#[derive(Copy, Clone)]
#[repr(C)]
pub struct DString {
    pub data: *const u8,
    pub len: usize,
}

impl DString {
    /// Creates an empty DString with null pointer and zero length.
    pub const fn empty() -> Self {
        DString {
            data: ptr::null(),
            len: 0,
        }
    }
}

impl Default for DString {
    fn default() -> Self {
        Self::empty()
    }
}

/// FFI error struct matching C ABI DError.
#[repr(C)]
pub struct DError {
    pub code: u32,
    pub message: DString,
}

impl DError {
    /// Creates a success (D_OK) error with empty message.
    pub const fn ok() -> Self {
        DError {
            code: DErrorCode::Ok as u32,
            message: DString::empty(),
        }
    }
}

// ----------------------------------------------------------------------------
// Arena types
// ----------------------------------------------------------------------------

/// Arena holding one rewritten HTML string.
pub struct DHtmlArena {
    #[allow(dead_code)]
    bump: Bump,
    html: DString,
}

// ----------------------------------------------------------------------------
// Helper functions
// ----------------------------------------------------------------------------

/// Copies a string into the arena and returns a DString pointing to it.
fn copy_str_to_arena(bump: &Bump, s: &str) -> DString {
    if s.is_empty() {
        return DString::empty();
    }
    let bytes = bump.alloc_slice_copy(s.as_bytes());
    DString {
        data: bytes.as_ptr(),
        len: bytes.len(),
    }
}

/// Boxes an arena owning a copy of `html`.
fn make_html_arena(html: &str) -> *mut DHtmlArena {
    let bump = Bump::new();
    let html = copy_str_to_arena(&bump, html);
    Box::into_raw(Box::new(DHtmlArena { bump, html }))
}

/// Sets the out_err with the given code and message.
/// Messages are static so they stay valid after the call returns.
/// If out_err is null, this is a no-op.
unsafe fn set_error(out_err: *mut DError, code: u32, message: &'static str) {
    if !out_err.is_null() {
        (*out_err).code = code;
        (*out_err).message = DString {
            data: message.as_ptr(),
            len: message.len(),
        };
    }
}

/// Sets out_err to success (D_OK with empty message).
/// If out_err is null, this is a no-op.
unsafe fn set_success(out_err: *mut DError) {
    if !out_err.is_null() {
        (*out_err).code = DErrorCode::Ok as u32;
        (*out_err).message = DString::empty();
    }
}

/// Shared body of the exported rewrite functions.
///
/// Null or empty input yields an arena holding an empty string. A panic in
/// `op` yields an arena holding the input unchanged, with D_INTERNAL set, so
/// the host can still render the original content.
unsafe fn run_rewrite(
    html: *const u8,
    html_len: usize,
    out_err: *mut DError,
    op: fn(&str) -> String,
    op_name: &str,
) -> *mut DHtmlArena {
    if html.is_null() || html_len == 0 {
        set_success(out_err);
        return make_html_arena("");
    }

    let html_slice = std::slice::from_raw_parts(html, html_len);
    let html_str = match std::str::from_utf8(html_slice) {
        Ok(s) => s,
        Err(_) => {
            log::warn!("{}: rejected non UTF-8 input", op_name);
            set_error(out_err, DErrorCode::Invalid as u32, "html is not valid UTF-8");
            return ptr::null_mut();
        }
    };

    // Catch panics to avoid unwinding across FFI boundary
    match panic::catch_unwind(|| op(html_str)) {
        Ok(rewritten) => {
            set_success(out_err);
            make_html_arena(&rewritten)
        }
        Err(_) => {
            log::warn!("{}: panic during rewrite, returning input unchanged", op_name);
            set_error(
                out_err,
                DErrorCode::Internal as u32,
                "internal panic during rewrite; input returned unchanged",
            );
            make_html_arena(html_str)
        }
    }
}

// ----------------------------------------------------------------------------
// Rewrite FFI functions
// ----------------------------------------------------------------------------

/// Runs the full content pipeline over a post body.
///
/// # Arguments
/// * `html` - HTML content bytes (UTF-8)
/// * `html_len` - Length of HTML in bytes
/// * `out_err` - Output error struct (may be null)
///
/// # Returns
/// Pointer to DHtmlArena, or null if the input is not UTF-8.
/// On failure, out_err (if non-null) carries the error code.
///
/// # Safety
/// `html` must point to `html_len` readable bytes.
/// Caller must free the returned arena via bootstrapify_free_html.
#[no_mangle]
pub unsafe extern "C" fn bootstrapify_transform(
    html: *const u8,
    html_len: usize,
    out_err: *mut DError,
) -> *mut DHtmlArena {
    run_rewrite(html, html_len, out_err, transform, "transform")
}

/// Strips fixed width/height attributes from generated embed markup.
///
/// # Safety
/// Same contract as bootstrapify_transform.
#[no_mangle]
pub unsafe extern "C" fn bootstrapify_strip_embed_dimensions(
    html: *const u8,
    html_len: usize,
    out_err: *mut DError,
) -> *mut DHtmlArena {
    run_rewrite(
        html,
        html_len,
        out_err,
        strip_embed_dimensions,
        "strip_embed_dimensions",
    )
}

/// Returns the rewritten HTML held by the arena.
///
/// # Safety
/// The arena pointer must be valid or null.
/// The returned string is valid until bootstrapify_free_html is called.
#[no_mangle]
pub unsafe extern "C" fn bootstrapify_html_result(arena: *const DHtmlArena) -> DString {
    if arena.is_null() {
        return DString::empty();
    }
    (*arena).html
}

/// Frees the arena and all associated allocations.
///
/// # Safety
/// The arena pointer must have been returned by one of the rewrite functions.
/// After this call, the arena pointer is invalid.
#[no_mangle]
pub unsafe extern "C" fn bootstrapify_free_html(arena: *mut DHtmlArena) {
    if !arena.is_null() {
        drop(Box::from_raw(arena));
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
