use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::RgbaImage;

use crate::constants::sizes;
use crate::icon;

/// How the icon container ended up on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerWrite {
    /// Every requested resolution was embedded.
    MultiRes,
    /// Full-set encoding failed; a single mid-size icon was written instead.
    Fallback,
}

/// Encode an ordered set of rendered icons into one multi-resolution `.ico`
/// container at `path`.
///
/// The whole set is validated and encoded in memory before the file is
/// created, so a failed call leaves nothing on disk. ICO directory entries
/// cannot express an edge above 256 pixels; any larger icon in the set fails
/// the container.
pub fn write_container<P: AsRef<Path>>(path: P, icons: &[RgbaImage]) -> Result<()> {
    let path = path.as_ref();

    if icons.is_empty() {
        bail!("refusing to write an empty icon container to {}", path.display());
    }

    let mut dir = IconDir::new(ResourceType::Icon);
    for img in icons {
        let (w, h) = (img.width(), img.height());
        if w == 0 || h == 0 || w > sizes::CONTAINER_LIMIT || h > sizes::CONTAINER_LIMIT {
            bail!(
                "cannot embed a {}x{} image: ICO entries are limited to 1..={} pixels per edge",
                w,
                h,
                sizes::CONTAINER_LIMIT
            );
        }

        let entry = IconDirEntry::encode(&IconImage::from_rgba_data(w, h, img.as_raw().clone()))
            .with_context(|| format!("failed to encode the {}x{} entry", w, h))?;
        dir.add_entry(entry);
    }

    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    dir.write(file)
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}

/// Write the multi-resolution container, falling back to a single 48x48
/// icon at the same path if full-set encoding fails.
///
/// The fallback keeps a usable icon file on disk for consumers even when
/// the full set cannot be encoded; a warning names the failure. If the
/// fallback write fails as well, that error propagates.
pub fn write_container_or_fallback<P: AsRef<Path>>(
    path: P,
    icons: &[RgbaImage],
) -> Result<ContainerWrite> {
    let path = path.as_ref();

    match write_container(path, icons) {
        Ok(()) => Ok(ContainerWrite::MultiRes),
        Err(err) => {
            eprintln!("⚠️  Multi-resolution ICO encoding failed: {}", err);
            eprintln!(
                "   Falling back to a single {}x{} icon",
                sizes::FALLBACK,
                sizes::FALLBACK
            );

            let fallback = icon::render(sizes::FALLBACK);
            write_container(path, &[fallback])
                .context("fallback icon write failed")?;
            Ok(ContainerWrite::Fallback)
        }
    }
}

/// Write a rendered icon as a standalone PNG.
pub fn write_png<P: AsRef<Path>>(path: P, icon: &RgbaImage) -> Result<()> {
    let path = path.as_ref();
    icon.save(path)
        .with_context(|| format!("failed to write {}", path.display()))
}
