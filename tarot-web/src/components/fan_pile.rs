use crate::text::{CARD_BACK_ALT, pile_hint};
use tarot_draw::{DrawPhase, FanConfig, FanSlot};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub phase: DrawPhase,
    /// Set when the player may not draw (quota reached).
    pub disabled: bool,
    pub back_image: AttrValue,
    pub on_pick: Callback<usize>,
    #[prop_or_default]
    pub active_slot: Option<usize>,
    #[prop_or_default]
    pub layout: FanConfig,
}

/// Two fanned rows of selectable card backs.
#[function_component(FanCardPile)]
pub fn fan_card_pile(p: &Props) -> Html {
    let layout = p.layout;
    let slots = use_memo(layout, |cfg| cfg.slots());
    let pile_height = use_memo(layout, FanConfig::pile_height);
    let host_ref = use_node_ref();
    let scale = use_state(|| 1.0_f64);

    {
        let host_ref = host_ref.clone();
        let scale = scale.clone();
        use_effect_with(layout, move |cfg| {
            let cfg = *cfg;
            let observer = host_ref.cast::<web_sys::HtmlElement>().and_then(|el| {
                crate::dom::WidthObserver::observe(&el, move |width| {
                    scale.set(cfg.scale_for_width(width));
                })
                .map_err(|err| {
                    log::warn!(
                        "pile will not rescale: {}",
                        crate::dom::js_error_message(&err)
                    );
                })
                .ok()
            });
            move || drop(observer)
        });
    }

    let pile_hidden = p.phase != DrawPhase::Idle;
    let inert = p.disabled || pile_hidden;

    let render_slot = |slot: &FanSlot| {
        let is_active = p.active_slot == Some(slot.global_index);
        let hide_this = p.phase == DrawPhase::Flying && is_active;
        let onclick = {
            let cb = p.on_pick.clone();
            let index = slot.global_index;
            Callback::from(move |_| cb.emit(index))
        };
        let row = match slot.row {
            tarot_draw::Row::Top => "top",
            tarot_draw::Row::Bottom => "bottom",
        };
        html! {
            <button
                key={format!("{row}-{}", slot.index)}
                type="button"
                class={classes!("slotBtn", hide_this.then_some("slotHide"), inert.then_some("slotDisabled"))}
                disabled={inert}
                data-slot={slot.global_index.to_string()}
                style={format!(
                    "left: 50%; top: 0; transform: {}; z-index: {};",
                    slot.transform_css(),
                    slot.z
                )}
                {onclick}
            >
                <div class="slotCard">
                    <img class="slotImg" src={p.back_image.clone()} alt={CARD_BACK_ALT} draggable="false" />
                </div>
            </button>
        }
    };

    html! {
        <div class="pileShell">
            <div
                class={classes!("pileHost", if pile_hidden { "pileFadeOut" } else { "pileFadeIn" })}
                ref={host_ref}
            >
                <div
                    class="pileStage"
                    style={format!("height: {}px; transform: scale({});", *pile_height, *scale)}
                >
                    { for slots.iter().map(render_slot) }
                </div>
                <div class="pileHint">{ pile_hint(pile_hidden) }</div>
            </div>
        </div>
    }
}
