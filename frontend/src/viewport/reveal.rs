use crate::config;

use super::{ElementHandle, ViewportTrigger, VisibilityNotifier};

pub const SECTION_SELECTOR: &str = ".section";
pub const HIDDEN_CLASS: &str = "section--hidden";

pub fn section_reveal<E, N>(
    notifier: N,
    sections: impl IntoIterator<Item = E>,
) -> ViewportTrigger<E, N>
where
    E: ElementHandle,
    N: VisibilityNotifier<E>,
{
    let mut trigger = ViewportTrigger::new(notifier, config::REVEAL_OPTIONS, |section: &E| {
        section.remove_class(HIDDEN_CLASS)
    });
    for section in sections {
        trigger.arm_with(section, |section| section.add_class(HIDDEN_CLASS));
    }
    trigger
}
