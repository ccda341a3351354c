use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::viewport::dom::VisibilityWatcher;
use crate::viewport::ObserverOptions;

const NAV_LINKS: [(&str, &str); 3] = [
    ("#section--1", "Features"),
    ("#section--2", "Operations"),
    ("#section--3", "Testimonials"),
];

pub fn anchor_target(href: &str) -> Option<&str> {
    (href.len() > 1 && href.starts_with('#')).then_some(href)
}

pub fn scroll_to(selector: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    match document.query_selector(selector) {
        Ok(Some(target)) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
        Ok(None) => debug!("no element matches {}", selector),
        Err(e) => warn!("bad scroll selector {}: {:?}", selector, e),
    }
}

fn set_opacity(element: &Element, opacity: f64) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property("opacity", &opacity.to_string());
    }
}

fn fade_siblings(opacity: f64) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        let Some(link) = e.target_dyn_into::<Element>() else {
            return;
        };
        if !link.class_list().contains("nav__link") {
            return;
        }
        let Some(nav) = link.closest(".nav").ok().flatten() else {
            return;
        };
        if let Ok(siblings) = nav.query_selector_all(".nav__link") {
            for sibling in (0..siblings.length())
                .filter_map(|i| siblings.item(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .filter(|sibling| *sibling != link)
            {
                set_opacity(&sibling, opacity);
            }
        }
        if let Ok(Some(logo)) = nav.query_selector(".nav__logo") {
            set_opacity(&logo, opacity);
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_book: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let is_sticky = use_state(|| false);
    let header_ref = use_node_ref();
    let nav_ref = use_node_ref();

    // The nav sticks once the header has scrolled out from under it.
    {
        let is_sticky = is_sticky.clone();
        let header_ref = header_ref.clone();
        let nav_ref = nav_ref.clone();
        use_effect_with_deps(
            move |_| {
                let watcher = match (header_ref.cast::<Element>(), nav_ref.cast::<Element>()) {
                    (Some(header), Some(nav)) => {
                        let options = ObserverOptions {
                            threshold: 0.0,
                            root_margin_px: -(nav.get_bounding_client_rect().height().round() as i32),
                        };
                        match VisibilityWatcher::new(options, move |change| {
                            is_sticky.set(!change.is_intersecting)
                        }) {
                            Ok(watcher) => {
                                watcher.watch(&header);
                                Some(watcher)
                            }
                            Err(e) => {
                                warn!("sticky navigation unavailable: {:?}", e);
                                None
                            }
                        }
                    }
                    _ => None,
                };
                move || drop(watcher)
            },
            (),
        );
    }

    let on_links_click = Callback::from(|e: MouseEvent| {
        let Some(link) = e.target_dyn_into::<Element>() else {
            return;
        };
        if !link.class_list().contains("nav__link") {
            return;
        }
        if let Some(href) = link.get_attribute("href") {
            if let Some(selector) = anchor_target(&href) {
                e.prevent_default();
                scroll_to(selector);
            }
        }
    });

    html! {
        <header class="header" ref={header_ref}>
            <nav class={classes!("nav", (*is_sticky).then(|| "sticky"))} ref={nav_ref}
                onmouseover={fade_siblings(0.5)} onmouseout={fade_siblings(1.0)}>
                <span class="nav__logo">{"Bankside"}</span>
                <ul class="nav__links" onclick={on_links_click}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <li class="nav__item">
                            <a class="nav__link" href={*href}>{ *label }</a>
                        </li>
                    }) }
                    <li class="nav__item">
                        <a class="nav__link nav__link--btn btn--show-modal" href="#" onclick={props.on_book.clone()}>
                            {"Book a call"}
                        </a>
                    </li>
                </ul>
            </nav>
            { for props.children.iter() }
        </header>
    }
}
