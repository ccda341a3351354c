use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::window;
use yew::prelude::*;

use crate::analytics::{self, EventParams};
use crate::components::modal::BookingModal;
use crate::components::nav::{scroll_to, Header};
use crate::components::slider::{Slider, TESTIMONIALS};
use crate::components::tabs::{Tabs, OPERATIONS};
use crate::config;
use crate::viewport::dom::{arm_lazy_images, arm_section_reveal};

const FEATURES: [(&str, &str, &str, &str); 3] = [
    (
        "img/digital-lazy.jpg",
        "img/digital.jpg",
        "Talk to a real person",
        "Every call is with an advisor who has read your notes beforehand. No scripts, no hold music.",
    ),
    (
        "img/grow-lazy.jpg",
        "img/grow.jpg",
        "Watch your savings grow",
        "We set up a plan together and check in when it matters, so small changes keep adding up.",
    ),
    (
        "img/card-lazy.jpg",
        "img/card.jpg",
        "Free for the first call",
        "The first thirty minutes are on us. Decide afterwards whether a follow-up is worth it.",
    ),
];

// seq keeps a repeated message from reusing the previous dismiss timer
#[derive(Debug, Clone, PartialEq)]
struct Notice {
    seq: u32,
    message: String,
}

fn next_notice(counter: &mut u32, message: String) -> Notice {
    *counter = counter.wrapping_add(1);
    Notice {
        seq: *counter,
        message,
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let modal_open = use_state(|| false);
    let notice = use_state(|| None::<Notice>);
    let notice_seq = use_mut_ref(|| 0u32);

    // Sections and images are in the DOM by the time effects run.
    use_effect_with_deps(
        move |_| {
            let mut triggers = Vec::new();
            if let Some(document) = window().and_then(|w| w.document()) {
                for armed in [arm_section_reveal(&document), arm_lazy_images(&document)] {
                    match armed {
                        Ok(trigger) => triggers.push(trigger),
                        Err(e) => warn!("viewport trigger unavailable: {:?}", e),
                    }
                }
            }
            move || drop(triggers)
        },
        (),
    );

    {
        let notice_handle = notice.clone();
        use_effect_with_deps(
            move |current: &Option<Notice>| {
                let timeout = current.as_ref().map(|_| {
                    let notice = notice_handle.clone();
                    Timeout::new(config::NOTICE_DURATION_MS, move || notice.set(None))
                });
                move || drop(timeout)
            },
            (*notice).clone(),
        );
    }

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            analytics::track(
                config::BOOK_CALL_CLICK_EVENT,
                &EventParams {
                    event_category: "booking",
                    event_label: "show_modal",
                },
            );
            info!("Opening booking modal");
            modal_open.set(true);
        })
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };

    let show_notice = {
        let notice = notice.clone();
        Callback::from(move |message: String| {
            notice.set(Some(next_notice(&mut notice_seq.borrow_mut(), message)))
        })
    };

    let learn_more = Callback::from(|_: MouseEvent| scroll_to("#section--1"));

    html! {
        <div class="landing-page">
            <Header on_book={open_modal.clone()}>
                <div class="header__title">
                    <h1>
                        {"Money advice "}<span class="highlight">{"without"}</span>
                        {" the paperwork"}
                    </h1>
                    <h4>{"One call, a clear plan, and someone to ask when things change."}</h4>
                    <button class="btn--text btn--scroll-to" onclick={learn_more}>{"Learn more ↓"}</button>
                </div>
            </Header>

            <section class="section" id="section--1">
                <div class="section__title">
                    <h2 class="section__description">{"Features"}</h2>
                    <h3 class="section__header">{"Everything you need to get your finances in order."}</h3>
                </div>
                <div class="features">
                    { for FEATURES.iter().map(|(placeholder, full, title, body)| html! {
                        <>
                            <img src={*placeholder} data-src={*full} alt={*title} class="features__img lazy-img" />
                            <div class="features__feature">
                                <h5 class="features__header">{ *title }</h5>
                                <p>{ *body }</p>
                            </div>
                        </>
                    }) }
                </div>
            </section>

            <section class="section" id="section--2">
                <div class="section__title">
                    <h2 class="section__description">{"Operations"}</h2>
                    <h3 class="section__header">{"Simple as one, two, three."}</h3>
                </div>
                <Tabs operations={&OPERATIONS[..]} />
            </section>

            <section class="section" id="section--3">
                <div class="section__title section__title--testimonials">
                    <h2 class="section__description">{"Not sure yet?"}</h2>
                    <h3 class="section__header">{"People are already talking about us."}</h3>
                </div>
                <Slider slides={&TESTIMONIALS[..]} />
            </section>

            <section class="section section--sign-up">
                <div class="section__title">
                    <h3 class="section__header">{"The best day to sort out your money was yesterday. The next best is today."}</h3>
                </div>
                <button class="btn btn--show-modal" onclick={open_modal}>{"Book a free call today!"}</button>
            </section>

            <footer class="footer">
                <p class="footer__copyright">{"© Bankside. All rights reserved."}</p>
            </footer>

            <BookingModal open={*modal_open} on_close={close_modal} on_notice={show_notice} />

            {
                if let Some(current) = &*notice {
                    html! { <div class="notice" role="status">{ current.message.clone() }</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_message_still_changes_the_notice() {
        let mut counter = 0;
        let first = next_notice(&mut counter, "Network error".to_string());
        let second = next_notice(&mut counter, "Network error".to_string());
        assert_eq!(first.message, second.message);
        assert_ne!(Some(first), Some(second));
    }

    #[test]
    fn counter_wraps_instead_of_overflowing() {
        let mut counter = u32::MAX;
        assert_eq!(next_notice(&mut counter, String::new()).seq, 0);
    }
}
