const RED_WEIGHT_PERMILLE: u32 = 299;
const GREEN_WEIGHT_PERMILLE: u32 = 587;
const BLUE_WEIGHT_PERMILLE: u32 = 114;

/// Luminance `round(0.299*R + 0.587*G + 0.114*B)` with ties rounded up.
///
/// Evaluated in integer per-mille arithmetic. The weights sum to 1000, so the
/// result never exceeds 255.
#[must_use]
pub fn luminance(red: u8, green: u8, blue: u8) -> u8 {
    let weighted = RED_WEIGHT_PERMILLE * u32::from(red)
        + GREEN_WEIGHT_PERMILLE * u32::from(green)
        + BLUE_WEIGHT_PERMILLE * u32::from(blue);
    ((weighted + 500) / 1000) as u8
}
