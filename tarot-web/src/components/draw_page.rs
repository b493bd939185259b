use crate::components::fan_pile::FanCardPile;
use crate::components::flying_overlay::FlyingOverlay;
use crate::components::footer::Footer;
use crate::components::result_card::ResultCard;
use crate::components::status_line::StatusLine;
use crate::components::vip_toggle::VipToggle;
use crate::paths;
use crate::text;
use tarot_draw::{DrawPhase, DrawSession, DrawStatus, MAX_DAILY_PICKS};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub status: DrawStatus,
    /// Present only in the revealed phase.
    #[prop_or_default]
    pub revealed: Option<DrawSession>,
    pub on_pick: Callback<usize>,
    pub on_again: Callback<()>,
    pub on_toggle_vip: Callback<()>,
}

/// Whole page for one controller snapshot.
#[function_component(DrawPage)]
pub fn draw_page(p: &Props) -> Html {
    let status = p.status;
    let back_image = AttrValue::from(paths::back_image_url());
    let flying = status.phase == DrawPhase::Flying;

    let body = if let Some(session) = p.revealed.as_ref() {
        html! {
            <ResultCard
                card={session.card.clone()}
                front_image={paths::asset_path(&session.front_image)}
                vip={status.vip}
                count={status.count}
                remaining={status.remaining}
                on_again={p.on_again.clone()}
            />
        }
    } else {
        html! {
            <div class="pileArea">
                <FanCardPile
                    phase={status.phase}
                    disabled={!status.can_pick}
                    back_image={back_image.clone()}
                    on_pick={p.on_pick.clone()}
                    active_slot={status.active_slot}
                />
                if flying && status.active_slot.is_some() {
                    <FlyingOverlay back_image={back_image.clone()} />
                }
            </div>
        }
    };

    html! {
        <main class={classes!(
            "page",
            flying.then_some("bgFlash"),
            (status.phase == DrawPhase::Revealed).then_some("bgGlow")
        )}>
            <div class="wrap">
                <header class="header">
                    <h1 class="h1">{ text::title(MAX_DAILY_PICKS) }</h1>
                    <p class="sub">{ text::SUBTITLE }</p>
                </header>

                <section class="panel">
                    <StatusLine status={status} />
                    <VipToggle vip={status.vip} on_toggle={p.on_toggle_vip.clone()} />
                    { body }
                    <Footer />
                </section>
            </div>
        </main>
    }
}
