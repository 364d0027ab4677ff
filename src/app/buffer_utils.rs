use std::ops::Range;

use fltk::text::TextBuffer;

/// Full text of an FLTK buffer.
///
/// `TextBuffer::text()` copies FLTK's `malloc()`'d string into a `String`
/// and never frees the original, so every call leaks the buffer size. This
/// goes through the C API and releases the copy itself.
pub fn buffer_text(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: `buf.as_ptr()` is a live Fl_Text_Buffer for as long as `buf`
    // exists. FLTK returns a NUL-terminated malloc'd copy (or null), which is
    // read once and handed back to `free`.
    unsafe {
        let ptr = Fl_Text_Buffer_text(buf.as_ptr() as *mut std::ffi::c_void);
        if ptr.is_null() {
            return String::new();
        }
        let text = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        text
    }
}

/// Current primary selection as a byte range, `None` when nothing is selected.
pub fn selection_range(buf: &TextBuffer) -> Option<Range<usize>> {
    buf.selection_position()
        .filter(|(start, end)| end > start)
        .map(|(start, end)| start as usize..end as usize)
}
