use dioxus::prelude::*;

use crate::domain::models::themed_asset;
use crate::shared::hooks::use_theme;

/// `assets/images`, copied as-is so file names inside stay addressable.
const IMAGES: Asset = asset!("/assets/images", AssetOptions::folder());

/// URL of a file below `assets/images`.
pub fn image_url(relative: &str) -> String {
    format!("{}/{}", IMAGES, relative.trim_start_matches('/'))
}

/// Image whose source follows the active skin.
///
/// `src` is relative to `assets/images`; paths under `terracotta/` switch to
/// their `scandinavian/` counterpart.
#[component]
pub fn ThemeImage(
    src: String,
    #[props(default)] alt: String,
    #[props(default)] class: String,
) -> Element {
    let theme = use_theme();
    let themed_src = themed_asset(&image_url(&src), theme.theme());

    rsx! {
        img { src: "{themed_src}", alt: "{alt}", class: "{class}", loading: "lazy" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{referenced_images, Theme};
    use std::path::Path;

    fn on_disk(relative: &str) -> bool {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("assets/images")
            .join(relative)
            .is_file()
    }

    #[test]
    fn test_every_referenced_image_ships_in_both_skins() {
        let images = referenced_images();
        assert!(!images.is_empty());
        for image in images {
            assert!(on_disk(&image), "missing image: {}", image);
            let scandinavian = themed_asset(&format!("/{}", image), Theme::Scandinavian);
            assert!(
                on_disk(scandinavian.trim_start_matches('/')),
                "missing image: {}",
                scandinavian
            );
        }
    }

    #[test]
    fn test_image_url_keeps_skin_segment() {
        let url = image_url("/terracotta/home-visual.svg");
        assert!(url.ends_with("/terracotta/home-visual.svg"));
        assert!(!url.contains("//terracotta"));
    }
}
