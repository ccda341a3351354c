use std::rc::Rc;

use log::debug;
use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::carousel::Carousel;

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub headline: &'static str,
    pub quote: &'static str,
    pub author: &'static str,
    pub location: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        headline: "Best financial decision ever!",
        quote: "Booking a call took two minutes and the advice paid for itself in the first month. I finally know where my money goes.",
        author: "Aarav Lynn",
        location: "San Francisco, USA",
    },
    Testimonial {
        headline: "The last step to becoming a complete minimalist",
        quote: "One short call, one clear plan. No apps to babysit, no upsell, just a person who listened and followed up.",
        author: "Miyah Miles",
        location: "London, UK",
    },
    Testimonial {
        headline: "Finally free from old-school banks",
        quote: "I was skeptical, but the team walked me through every fee I was paying and how to drop them. Highly recommended.",
        author: "Francisco Gomes",
        location: "Lisbon, Portugal",
    },
];

pub enum SlideAction {
    Next,
    Previous,
    Indicator(Option<String>),
}

impl Reducible for Carousel {
    type Action = SlideAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut carousel = *self;
        let moved = match action {
            SlideAction::Next => {
                carousel.next();
                true
            }
            SlideAction::Previous => {
                carousel.previous();
                true
            }
            SlideAction::Indicator(raw) => carousel.select_by_indicator(raw.as_deref()),
        };
        if !moved {
            return self;
        }
        debug!("slider moved to {}", carousel.current());
        Rc::new(carousel)
    }
}

#[derive(Properties, PartialEq)]
pub struct SliderProps {
    pub slides: &'static [Testimonial],
}

#[function_component(Slider)]
pub fn slider(props: &SliderProps) -> Html {
    match Carousel::new(props.slides.len()) {
        Some(carousel) => html! { <SliderTrack initial={carousel} slides={props.slides} /> },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
struct SliderTrackProps {
    initial: Carousel,
    slides: &'static [Testimonial],
}

#[function_component(SliderTrack)]
fn slider_track(props: &SliderTrackProps) -> Html {
    let initial = props.initial;
    let carousel = use_reducer(move || initial);

    {
        let carousel = carousel.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| match e.key().as_str() {
            "ArrowLeft" => carousel.dispatch(SlideAction::Previous),
            "ArrowRight" => carousel.dispatch(SlideAction::Next),
            _ => {}
        });
    }

    let on_previous = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(SlideAction::Previous))
    };

    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(SlideAction::Next))
    };

    // One listener on the container; the clicked dot names its slide.
    let on_dot = {
        let carousel = carousel.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(target) = e.target_dyn_into::<Element>() else {
                return;
            };
            if !target.class_list().contains("dots__dot") {
                return;
            }
            carousel.dispatch(SlideAction::Indicator(target.get_attribute("data-slide")));
        })
    };

    html! {
        <div class="slider">
            { for props.slides.iter().zip(carousel.offsets()).map(|(testimonial, offset)| html! {
                <div class="slide" style={format!("transform: translateX({}%)", offset)}>
                    <div class="testimonial">
                        <h5 class="testimonial__header">{ testimonial.headline }</h5>
                        <blockquote class="testimonial__text">{ testimonial.quote }</blockquote>
                        <address class="testimonial__author">
                            <h6 class="testimonial__name">{ testimonial.author }</h6>
                            <p class="testimonial__location">{ testimonial.location }</p>
                        </address>
                    </div>
                </div>
            }) }
            <button class="slider__btn slider__btn--left" onclick={on_previous}>{"←"}</button>
            <button class="slider__btn slider__btn--right" onclick={on_next}>{"→"}</button>
            <div class="dots" onclick={on_dot}>
                { for carousel.dots().enumerate().map(|(position, active)| html! {
                    <button
                        class={classes!("dots__dot", active.then(|| "dots__dot--active"))}
                        data-slide={position.to_string()}
                    />
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(carousel: Carousel, action: SlideAction) -> Carousel {
        *Rc::new(carousel).reduce(action)
    }

    #[test]
    fn actions_drive_the_carousel() {
        let carousel = Carousel::new(TESTIMONIALS.len()).unwrap();
        let carousel = reduce(carousel, SlideAction::Previous);
        assert_eq!(carousel.current(), 2);
        let carousel = reduce(carousel, SlideAction::Next);
        assert_eq!(carousel.current(), 0);
        let carousel = reduce(carousel, SlideAction::Indicator(Some("1".into())));
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn bad_indicator_keeps_the_same_state() {
        let state = Rc::new(Carousel::new(3).unwrap());
        let next = state.clone().reduce(SlideAction::Indicator(Some("nine".into())));
        assert!(Rc::ptr_eq(&state, &next));
    }
}
