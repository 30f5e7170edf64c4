use dial_engine::text::{FontId, FontSystem};

/// Common locations of a sans-serif system font on Linux distributions.
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/google-noto/NotoSans-Regular.ttf",
];

/// Loads the first readable system font into `fonts`.
///
/// Returns `None` (after a warning) when no candidate exists or parses; the
/// clock then runs without its digital readout.
pub fn load_system_font(fonts: &mut FontSystem) -> Option<FontId> {
    for path in SYSTEM_FONT_PATHS {
        let Ok(bytes) = std::fs::read(path) else { continue };
        match fonts.load_font(&bytes) {
            Ok(id) => {
                log::debug!("readout font: {path}");
                return Some(id);
            }
            Err(e) => log::warn!("skipping {path}: {e}"),
        }
    }

    log::warn!("no system font found; the digital readout is disabled");
    None
}
