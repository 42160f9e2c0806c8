use std::fs;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};

use plotters::style::{FontStyle, register_font};
use tracing::{debug, warn};

use crate::error::{ProfileError, ProfileResult};

/// Family name labels are drawn with; registered fonts are stored under it.
pub const LABEL_FONT_FAMILY: &str = "sans-serif";

const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

static SYSTEM_FONT_SEARCH: Once = Once::new();
static LABEL_FONT_READY: AtomicBool = AtomicBool::new(false);

/// Registers the font used for raster axis labels.
///
/// Overrides any font found on the system. Hosts that ship their own font
/// usually pass `include_bytes!` data here.
pub fn register_label_font(bytes: &'static [u8]) -> ProfileResult<()> {
    register_font(LABEL_FONT_FAMILY, FontStyle::Normal, bytes)
        .map_err(|_| ProfileError::InvalidData("invalid label font".to_string()))?;
    LABEL_FONT_READY.store(true, Ordering::Release);
    Ok(())
}

/// Whether raster labels can be drawn, searching well-known system font
/// locations on first use.
#[must_use]
pub fn label_font_available() -> bool {
    SYSTEM_FONT_SEARCH.call_once(|| {
        if LABEL_FONT_READY.load(Ordering::Acquire) {
            return;
        }
        if !register_system_font() {
            warn!("no system font found; raster charts are drawn without labels");
        }
    });
    LABEL_FONT_READY.load(Ordering::Acquire)
}

fn register_system_font() -> bool {
    for path in SYSTEM_FONT_CANDIDATES {
        let Ok(bytes) = fs::read(path) else {
            continue;
        };
        // Registered fonts live for the rest of the process.
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        match register_label_font(bytes) {
            Ok(()) => {
                debug!(path, "registered label font");
                return true;
            }
            Err(err) => debug!(path, error = %err, "skip unusable font file"),
        }
    }
    false
}
