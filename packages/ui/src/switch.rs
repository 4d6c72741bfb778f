use dioxus::prelude::*;

/// Apply one user activation: report the flipped value unless the switch is disabled.
pub fn activate(checked: bool, disabled: bool, on_change: impl FnOnce(bool)) {
    if disabled {
        tracing::debug!("ignoring activation of disabled switch");
        return;
    }
    on_change(!checked);
}

/// A controlled on/off toggle.
///
/// Holds no state of its own: it renders `checked` and asks the owner to change it
/// through `on_change`.
#[component]
pub fn Switch(
    checked: bool,
    on_change: EventHandler<bool>,
    #[props(default)] disabled: bool,
    #[props(default)] label: Option<String>,
) -> Element {
    let state = if checked { "on" } else { "off" };

    rsx! {
        button {
            r#type: "button",
            role: "switch",
            class: "switch switch--{state}",
            aria_checked: "{checked}",
            aria_label: label,
            disabled,
            onclick: move |_| activate(checked, disabled, |next| on_change.call(next)),
            span { class: "switch-thumb" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_reports_flipped_value_once() {
        for checked in [true, false] {
            let mut calls = Vec::new();
            activate(checked, false, |next| calls.push(next));
            assert_eq!(calls, vec![!checked]);
        }
    }

    #[test]
    fn test_disabled_switch_never_reports() {
        for checked in [true, false] {
            let mut calls = 0;
            activate(checked, true, |_| calls += 1);
            assert_eq!(calls, 0);
        }
    }

    #[test]
    fn test_aria_state_matches_checked() {
        fn on() -> Element {
            rsx! { Switch { checked: true, on_change: move |_| {} } }
        }
        fn off() -> Element {
            rsx! { Switch { checked: false, on_change: move |_| {}, label: "Dark mode" } }
        }

        let mut dom = VirtualDom::new(on);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("role=\"switch\""));
        assert!(html.contains("aria-checked=\"true\""));
        assert!(html.contains("switch--on"));

        let mut dom = VirtualDom::new(off);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("aria-checked=\"false\""));
        assert!(html.contains("aria-label=\"Dark mode\""));
    }
}
