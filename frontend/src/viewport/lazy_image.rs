use log::debug;

use crate::config;

use super::{ElementHandle, ViewportTrigger, VisibilityNotifier};

pub const IMAGE_SELECTOR: &str = "img[data-src]";
pub const DEFERRED_SRC_ATTR: &str = "data-src";
pub const PLACEHOLDER_CLASS: &str = "lazy-img";

pub fn load_deferred<E: ElementHandle>(image: &E) {
    let Some(src) = image.attribute(DEFERRED_SRC_ATTR) else {
        debug!("lazy image without {DEFERRED_SRC_ATTR}, leaving as is");
        return;
    };
    image.set_attribute("src", &src);
    let loaded = image.clone();
    image.on_load_once(Box::new(move || loaded.remove_class(PLACEHOLDER_CLASS)));
}

pub fn lazy_images<E, N>(notifier: N, images: impl IntoIterator<Item = E>) -> ViewportTrigger<E, N>
where
    E: ElementHandle,
    N: VisibilityNotifier<E>,
{
    let mut trigger = ViewportTrigger::new(notifier, config::LAZY_IMAGE_OPTIONS, load_deferred::<E>);
    trigger.arm_all(images);
    trigger
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::testing::{FakeElement, RecordingNotifier};

    fn placeholder(full: &str) -> FakeElement {
        let image = FakeElement::with_attribute(DEFERRED_SRC_ATTR, full);
        image.set_attribute("src", "img/card-lazy.jpg");
        image.add_class(PLACEHOLDER_CLASS);
        image
    }

    #[test]
    fn source_swaps_on_visibility_and_blur_clears_on_load() {
        let image = placeholder("img/card.jpg");
        let mut trigger = lazy_images(RecordingNotifier::default(), vec![image.clone()]);

        assert_eq!(image.attribute("src").as_deref(), Some("img/card-lazy.jpg"));
        assert!(trigger.handle(&image.seen(0.01)));
        assert_eq!(image.attribute("src").as_deref(), Some("img/card.jpg"));
        assert!(image.has_class(PLACEHOLDER_CLASS));

        image.fire_load();
        assert!(!image.has_class(PLACEHOLDER_CLASS));
    }

    #[test]
    fn image_that_never_loads_keeps_its_blur() {
        let image = placeholder("img/grow.jpg");
        let mut trigger = lazy_images(RecordingNotifier::default(), vec![image.clone()]);

        trigger.handle(&image.seen(0.5));
        assert!(image.has_class(PLACEHOLDER_CLASS));
        assert_eq!(trigger.pending(), 0);
    }

    #[test]
    fn repeated_visibility_attaches_a_single_load_listener() {
        let image = placeholder("img/digital.jpg");
        let mut trigger = lazy_images(RecordingNotifier::default(), vec![image.clone()]);
        assert!(!trigger.arm(image.clone()));

        trigger.handle(&image.seen(0.2));
        trigger.handle(&image.seen(0.8));
        assert_eq!(image.load_listener_count(), 1);
    }

    #[test]
    fn missing_deferred_source_is_left_alone() {
        let image = FakeElement::default();
        image.set_attribute("src", "img/logo.png");
        load_deferred(&image);

        assert_eq!(image.attribute("src").as_deref(), Some("img/logo.png"));
        assert_eq!(image.load_listener_count(), 0);
    }
}
