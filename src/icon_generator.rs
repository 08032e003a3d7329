use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::icon_spec::{self, IconSpec, BACKGROUND_COLOR, ICON_SPECS, SOURCE_LOGO};

#[derive(Error, Debug)]
pub enum IconError {
    #[error("Source logo not found or unreadable: {}", path.display())]
    AssetNotFound {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write icon {}", path.display())]
    IoWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// An icon file written by [`generate_icons`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub path: PathBuf,
    pub size: u32,
    pub description: &'static str,
}

/// Decode the logo and normalize it to 8-bit RGBA, whatever layout the file uses.
pub fn load_source_logo(path: &Path) -> Result<RgbaImage, IconError> {
    let img = image::open(path).map_err(|source| IconError::AssetNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "Loaded source logo {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img.to_rgba8())
}

/// Paint `background` on a `size`x`size` canvas and paste the
/// Lanczos-resized logo in the middle, masked by its own alpha.
pub fn render_icon(logo: &RgbaImage, size: u32, background: Rgba<u8>) -> RgbaImage {
    debug_assert!(size > 0, "icon size must be positive");

    let mut canvas = RgbaImage::from_pixel(size, size, background);

    let logo_size = icon_spec::logo_size(size);
    if logo_size == 0 {
        return canvas;
    }

    let resized = resize_logo(logo, logo_size);
    let offset = icon_spec::centering_offset(size);
    log::debug!("{}x{} icon: logo {}px at offset {}", size, size, logo_size, offset);

    paste_with_mask(&mut canvas, &resized, offset, offset);

    canvas
}

/// Lanczos3 resize in premultiplied space, so the colour of fully
/// transparent pixels never bleeds into the logo's edges.
fn resize_logo(logo: &RgbaImage, edge: u32) -> RgbaImage {
    let mut premultiplied = logo.clone();
    for px in premultiplied.pixels_mut() {
        let a = px.0[3] as u32;
        for c in &mut px.0[..3] {
            *c = div_255(*c as u32 * a);
        }
    }

    let mut resized = imageops::resize(&premultiplied, edge, edge, FilterType::Lanczos3);
    for px in resized.pixels_mut() {
        let a = px.0[3] as u32;
        if a == 0 {
            *px = Rgba([0, 0, 0, 0]);
            continue;
        }
        for c in &mut px.0[..3] {
            *c = ((*c as u32 * 255 + a / 2) / a).min(255) as u8;
        }
    }
    resized
}

/// `dst = src * a + dst * (1 - a)` per colour channel, `a` being the source
/// alpha. The destination alpha is composited "over", so an opaque canvas
/// stays opaque.
fn paste_with_mask(canvas: &mut RgbaImage, top: &RgbaImage, x0: u32, y0: u32) {
    for (x, y, src) in top.enumerate_pixels() {
        let a = src.0[3] as u32;
        if a == 0 {
            continue;
        }
        let (cx, cy) = (x0 + x, y0 + y);
        if cx >= canvas.width() || cy >= canvas.height() {
            continue;
        }
        let dst = canvas.get_pixel_mut(cx, cy);
        for i in 0..3 {
            dst.0[i] = div_255(src.0[i] as u32 * a + dst.0[i] as u32 * (255 - a));
        }
        dst.0[3] = div_255(255 * a + dst.0[3] as u32 * (255 - a));
    }
}

// Rounded x / 255 for x <= 255 * 255.
#[inline]
fn div_255(x: u32) -> u8 {
    let t = x + 128;
    ((t + (t >> 8)) >> 8) as u8
}

/// Write the icon as PNG, replacing any existing file. The parent directory must exist.
pub fn save_icon(bitmap: &RgbaImage, output_path: &Path) -> Result<(), IconError> {
    bitmap
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|source| IconError::IoWrite {
            path: output_path.to_path_buf(),
            source,
        })
}

fn confirmation_line(spec: &IconSpec, icon: &RgbaImage) -> String {
    format!(
        "✓ Created {} ({}x{}, {})",
        spec.file_name,
        icon.width(),
        icon.height(),
        spec.description
    )
}

fn generate_one(logo: &RgbaImage, spec: &IconSpec, asset_dir: &Path) -> Result<GeneratedIcon, IconError> {
    let icon = render_icon(logo, spec.size, BACKGROUND_COLOR);
    let path = asset_dir.join(spec.file_name);
    save_icon(&icon, &path)?;

    println!("{}", confirmation_line(spec, &icon));
    log::info!("Wrote {}", path.display());

    Ok(GeneratedIcon {
        path,
        size: spec.size,
        description: spec.description,
    })
}

/// Load the light logo from `asset_dir` and write every icon in [`ICON_SPECS`] next to it.
///
/// Stops at the first failure. Icons written before the failure are left on disk.
pub fn generate_icons(asset_dir: &Path) -> Result<Vec<GeneratedIcon>, IconError> {
    let logo = load_source_logo(&asset_dir.join(SOURCE_LOGO))?;
    log::debug!("Compositing onto {}", icon_spec::background_hex());

    let mut generated = Vec::with_capacity(ICON_SPECS.len());
    for spec in &ICON_SPECS {
        generated.push(generate_one(&logo, spec, asset_dir)?);
    }

    Ok(generated)
}
