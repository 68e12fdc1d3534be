use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use crate::{
    assets::decode::{PreparedImage, decode_image, decode_svg},
    foundation::error::{OculaError, OculaResult},
};

/// Default raster edge for SVG assets.
pub const DEFAULT_SVG_SIZE: u32 = 1024;

/// Prepared images keyed by asset name.
#[derive(Clone, Debug)]
pub struct ImageStore {
    images: HashMap<String, PreparedImage>,
    svg_size: u32,
}

/// Outcome of [`ImageStore::load_dir`].
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Names that decoded and were inserted.
    pub loaded: Vec<String>,
    /// Names that could not be read or decoded, with the reason.
    pub failed: Vec<(String, OculaError)>,
}

impl LoadReport {
    /// `true` when every requested name loaded.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl Default for ImageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageStore {
    /// Empty store rasterizing SVGs at [`DEFAULT_SVG_SIZE`].
    pub fn new() -> Self {
        Self::with_svg_size(DEFAULT_SVG_SIZE)
    }

    /// Store that rasterizes SVG assets into `size` x `size` squares.
    pub fn with_svg_size(size: u32) -> Self {
        Self {
            images: HashMap::new(),
            svg_size: size.max(1),
        }
    }

    /// Prepared image stored under `name`.
    pub fn get(&self, name: &str) -> Option<&PreparedImage> {
        self.images.get(name)
    }

    /// `true` when `name` has a prepared image.
    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    /// Number of prepared images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// `true` when nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Store an already prepared image, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, image: PreparedImage) {
        self.images.insert(name.into(), image);
    }

    /// Decode and store encoded bytes. Names ending in `.svg` are parsed as
    /// SVG, everything else goes through the raster decoders.
    pub fn insert_from_bytes(&mut self, name: &str, bytes: &[u8]) -> OculaResult<()> {
        let image = if is_svg(name) {
            decode_svg(bytes, self.svg_size, self.svg_size)?
        } else {
            decode_image(bytes)?
        };
        self.insert(name, image);
        Ok(())
    }

    /// Try to load every name from `dir`. Failures are collected, not fatal.
    pub fn load_dir<'a>(
        &mut self,
        dir: impl AsRef<Path>,
        names: impl IntoIterator<Item = &'a str>,
    ) -> LoadReport {
        let dir = dir.as_ref();
        let mut report = LoadReport::default();
        for name in names {
            match self.load_one(dir, name) {
                Ok(()) => report.loaded.push(name.to_owned()),
                Err(e) => report.failed.push((name.to_owned(), e)),
            }
        }
        report
    }

    fn load_one(&mut self, dir: &Path, name: &str) -> OculaResult<()> {
        let path = resolve(dir, name)?;
        let bytes = std::fs::read(&path).map_err(|e| {
            OculaError::asset(format!("failed to read asset '{}': {e}", path.display()))
        })?;
        self.insert_from_bytes(name, &bytes)
    }
}

fn is_svg(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Join a relative asset name onto `dir`, refusing absolute paths and `..`.
fn resolve(dir: &Path, name: &str) -> OculaResult<PathBuf> {
    let s = name.replace('\\', "/");
    if s.starts_with('/') {
        return Err(OculaError::validation("asset paths must be relative"));
    }
    let mut out = dir.to_path_buf();
    let mut any = false;
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(OculaError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
        any = true;
    }
    if !any {
        return Err(OculaError::validation("asset path must contain a file name"));
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
