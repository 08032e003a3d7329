use image::Rgba;

/// Directory holding the source logo and the generated icons.
pub const ASSET_DIR: &str = "assets/images";

/// Light logo that gets composited onto every icon.
pub const SOURCE_LOGO: &str = "apollo-logo-light.png";

/// #2f2f2f, fully opaque.
pub const BACKGROUND_COLOR: Rgba<u8> = Rgba([47, 47, 47, 255]);

// Logo edge as a fraction of the icon edge, kept as a ratio of integers
// so 180 * 7 / 10 lands on 126 exactly.
const LOGO_SCALE_NUM: u32 = 7;
const LOGO_SCALE_DEN: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub file_name: &'static str,
    pub description: &'static str,
}

/// Every icon the generator writes, in the order they are produced.
/// The apple touch icon comes first, then the manifest icons.
pub const ICON_SPECS: [IconSpec; 3] = [
    IconSpec {
        size: 180,
        file_name: "apple-touch-icon-dark.png",
        description: "white logo on #2f2f2f",
    },
    IconSpec {
        size: 192,
        file_name: "apollo-icon-dark-192.png",
        description: "white logo on #2f2f2f",
    },
    IconSpec {
        size: 512,
        file_name: "apollo-icon-dark-512.png",
        description: "white logo on #2f2f2f",
    },
];

/// Edge length of the scaled logo for an icon of `size` pixels (floor of 70%).
pub fn logo_size(size: u32) -> u32 {
    size * LOGO_SCALE_NUM / LOGO_SCALE_DEN
}

/// Offset applied to both axes so the logo sits in the middle.
/// Odd padding leaves the extra pixel on the right/bottom edge.
pub fn centering_offset(size: u32) -> u32 {
    (size - logo_size(size)) / 2
}

pub fn background_hex() -> String {
    let [r, g, b, _] = BACKGROUND_COLOR.0;
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
