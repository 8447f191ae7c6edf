/// Read the whole text of an FLTK `TextBuffer`.
///
/// `TextBuffer::text()` copies FLTK's `malloc()`'d string but never frees it,
/// leaking the full buffer on every call. This goes through the C API
/// directly and releases the allocation.
pub fn buffer_text_no_leak(buf: &fltk::text::TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: `as_ptr` is valid while `buf` lives. FLTK returns either null or
    // a malloc'd NUL-terminated copy which we read once and free with the
    // matching allocator.
    unsafe {
        let inner = buf.as_ptr() as *mut std::ffi::c_void;
        let ptr = Fl_Text_Buffer_text(inner);
        if ptr.is_null() {
            return String::new();
        }
        let text = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        text
    }
}
