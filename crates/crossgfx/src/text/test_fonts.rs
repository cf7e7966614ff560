//! Font fixtures shared by unit tests.

/// Candidate locations of a common sans face.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

/// Bytes of the first installed system face.
///
/// # Panics
/// If none of [`SYSTEM_FONTS`] exists. Metrics tests need a real face.
pub(crate) fn system_font() -> Vec<u8> {
    SYSTEM_FONTS
        .iter()
        .find_map(|p| std::fs::read(p).ok())
        .unwrap_or_else(|| panic!("metrics tests need one of {SYSTEM_FONTS:?} installed"))
}
