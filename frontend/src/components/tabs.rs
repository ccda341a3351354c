use web_sys::Element;
use yew::prelude::*;

use crate::carousel::parse_index;

#[derive(Debug, PartialEq)]
pub struct Operation {
    pub title: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
}

pub static OPERATIONS: [Operation; 3] = [
    Operation {
        title: "Plan",
        heading: "Get a plan you can actually follow",
        body: "We go through your income, fixed costs and goals together, then leave you with three concrete steps for the next month.",
    },
    Operation {
        title: "Review",
        heading: "Check in without the spreadsheet",
        body: "A short follow-up call every quarter to see what worked, what did not and what to change next.",
    },
    Operation {
        title: "Adjust",
        heading: "Change course when life does",
        body: "New job, new city or a new family member: book a call whenever the numbers move and we rework the plan with you.",
    },
];

// `data-tab` of the tab a click landed in, if it landed in one
fn clicked_tab(target: &Element) -> Option<String> {
    target
        .closest(".operations__tab")
        .ok()
        .flatten()?
        .get_attribute("data-tab")
}

fn select_tab(current: usize, raw: Option<&str>, count: usize) -> usize {
    raw.and_then(|raw| parse_index(raw, count)).unwrap_or(current)
}

fn active_flags(active: usize, count: usize) -> Vec<bool> {
    (0..count).map(|i| i == active).collect()
}

#[derive(Properties, PartialEq)]
pub struct TabsProps {
    pub operations: &'static [Operation],
}

#[function_component(Tabs)]
pub fn tabs(props: &TabsProps) -> Html {
    let active = use_state(|| 0usize);
    let count = props.operations.len();

    let on_click = {
        let active = active.clone();
        Callback::from(move |e: MouseEvent| {
            let raw = e.target_dyn_into::<Element>().and_then(|target| clicked_tab(&target));
            let next = select_tab(*active, raw.as_deref(), count);
            if next != *active {
                active.set(next);
            }
        })
    };

    let flags = active_flags(*active, count);

    html! {
        <div class="operations">
            <div class="operations__tab-container" onclick={on_click}>
                { for props.operations.iter().zip(&flags).enumerate().map(|(i, (op, on))| html! {
                    <button
                        class={classes!("btn", "operations__tab", format!("operations__tab--{}", i + 1), (*on).then(|| "operations__tab--active"))}
                        data-tab={i.to_string()}
                    >
                        <span>{ format!("0{}", i + 1) }</span>{ op.title }
                    </button>
                }) }
            </div>
            { for props.operations.iter().zip(&flags).enumerate().map(|(i, (op, on))| html! {
                <div class={classes!("operations__content", format!("operations__content--{}", i + 1), (*on).then(|| "operations__content--active"))}>
                    <h5 class="operations__header">{ op.heading }</h5>
                    <p>{ op.body }</p>
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_tab_is_active() {
        for active in 0..OPERATIONS.len() {
            let flags = active_flags(active, OPERATIONS.len());
            assert_eq!(flags.iter().filter(|on| **on).count(), 1);
            assert!(flags[active]);
        }
    }

    #[test]
    fn valid_tab_click_switches() {
        assert_eq!(select_tab(0, Some("2"), 3), 2);
    }

    #[test]
    fn bad_tab_click_keeps_current() {
        for raw in [None, Some(""), Some("x"), Some("3"), Some("-1")] {
            assert_eq!(select_tab(1, raw, 3), 1, "switched on {raw:?}");
        }
    }
}
