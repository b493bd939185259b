use crate::text;
use tarot_draw::{DrawStatus, StatusLine as Line};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub status: DrawStatus,
}

/// Remaining draws, the locked notice, or the VIP banner.
#[function_component(StatusLine)]
pub fn status_line(p: &Props) -> Html {
    let line = p.status.status_line();
    let class = match line {
        Line::Vip => "vip",
        Line::Locked => "locked",
        Line::Remaining(_) => "remain",
    };
    html! {
        <div class="statusLine" aria-live="polite">
            <span class={class}>{ text::status_line(line) }</span>
        </div>
    }
}
