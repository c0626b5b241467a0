use std::{fs, path::Path};

use anyhow::{anyhow, Context, Result};
use indexmap::IndexMap;
use log::{debug, info, warn};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

/// Decoded shirt image, as straight (unmultiplied) RGBA bytes
pub struct ShirtImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

pub type ShirtCatalogue = IndexMap<String, ShirtImage>;

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Load every image in `dir`, keyed by file stem and ordered by file name.
/// Anything that isn't an image is skipped. When two images share a stem, the
/// later one is keyed by its full file name instead.
pub fn load_shirts(dir: &Path) -> Result<ShirtCatalogue> {
    let mut paths = fs::read_dir(dir)
        .with_context(|| format!("failed to read shirts directory {:?}", dir))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && is_image(p))
        .collect::<Vec<_>>();
    paths.sort();

    let mut catalogue = ShirtCatalogue::new();
    for path in paths {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        let name = if catalogue.contains_key(&stem) {
            let file_name = path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string();
            warn!(
                "Shirt name \"{}\" is already taken; loading {:?} as \"{}\"",
                stem, path, file_name
            );
            file_name
        } else {
            stem
        };
        let image = image::open(&path)
            .with_context(|| format!("failed to decode shirt image {:?}", path))?
            .to_rgba8();
        let (width, height) = image.dimensions();
        debug!("Loaded shirt \"{}\" ({}x{})", name, width, height);
        catalogue.insert(
            name,
            ShirtImage {
                width,
                height,
                rgba: image.into_raw(),
            },
        );
    }

    if catalogue.is_empty() {
        return Err(anyhow!("no shirt images found in {:?}", dir));
    }
    info!("Loaded {} shirts from {:?}", catalogue.len(), dir);
    Ok(catalogue)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("hanger-{}-{}", std::process::id(), name));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_loads_images_in_name_order() {
        let dir = temp_dir("shirts");
        image::RgbaImage::new(4, 2).save(dir.join("b_plaid.png")).unwrap();
        image::RgbaImage::new(3, 3).save(dir.join("a_logo.png")).unwrap();
        fs::write(dir.join("notes.txt"), "not a shirt").unwrap();

        let catalogue = load_shirts(&dir).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        let names: Vec<&String> = catalogue.keys().collect();
        assert_eq!(names, vec!["a_logo", "b_plaid"]);
        let plaid = &catalogue["b_plaid"];
        assert_eq!((plaid.width, plaid.height), (4, 2));
        assert_eq!(plaid.rgba.len(), 4 * 2 * 4);
    }

    #[test]
    fn test_shared_stem_keeps_both_images() {
        let dir = temp_dir("same-stem");
        image::RgbaImage::new(2, 2).save(dir.join("logo.png")).unwrap();
        image::RgbaImage::new(5, 1).save(dir.join("logo.bmp")).unwrap();

        let catalogue = load_shirts(&dir).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        let names: Vec<&String> = catalogue.keys().collect();
        assert_eq!(names, vec!["logo", "logo.png"]);
        assert_eq!(catalogue["logo"].width, 5);
        assert_eq!(catalogue["logo.png"].width, 2);
    }

    #[test]
    fn test_empty_directory_is_an_error() {
        let dir = temp_dir("no-shirts");
        let result = load_shirts(&dir);
        fs::remove_dir_all(&dir).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        assert!(load_shirts(Path::new("/no/such/shirts")).is_err());
    }
}
