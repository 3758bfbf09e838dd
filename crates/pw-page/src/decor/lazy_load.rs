use pw_dom::Document;

use crate::config::PageConfig;
use crate::error::Result;

/// Images carrying this class load eagerly.
const EAGER_IMAGE_CLASS: &str = "c-logo__img";

/// Mark images and videos without a `loading` attribute as lazy.
///
/// Returns the number of elements changed.
pub fn apply_lazy_loading(doc: &mut Document, config: &PageConfig) -> Result<usize> {
    let mut changed = 0;
    for image in doc.query_selector_all(&config.lazy_images)? {
        if doc.has_class(image, EAGER_IMAGE_CLASS) {
            continue;
        }
        doc.set_attr(image, "loading", "lazy")?;
        changed += 1;
    }
    for video in doc.query_selector_all(&config.lazy_videos)? {
        doc.set_attr(video, "loading", "lazy")?;
        changed += 1;
    }
    tracing::debug!(changed, "Lazy loading applied");
    Ok(changed)
}
