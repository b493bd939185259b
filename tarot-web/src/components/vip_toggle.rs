use crate::text::vip_toggle_label;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub vip: bool,
    pub on_toggle: Callback<()>,
}

/// Test-only switch for the VIP bypass.
#[function_component(VipToggle)]
pub fn vip_toggle(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="testBtns">
            <button class="ghostBtn" type="button" aria-pressed={p.vip.to_string()} {onclick}>
                { vip_toggle_label(p.vip) }
            </button>
        </div>
    }
}
