use crate::text;
use tarot_draw::{Card, REVEAL_HOLD_MS};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub card: Card,
    pub front_image: AttrValue,
    pub vip: bool,
    pub count: u32,
    pub remaining: u32,
    pub on_again: Callback<()>,
}

/// The drawn card with its reading and the "draw again" action.
#[function_component(ResultCard)]
pub fn result_card(p: &Props) -> Html {
    let on_again = {
        let cb = p.on_again.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="resultWrap" style={format!("--reveal-hold: {REVEAL_HOLD_MS}ms")}>
            <div class="resultCardFrame">
                <div class="resultImgBox">
                    <img class="resultImg" src={p.front_image.clone()} alt={p.card.name.clone()} draggable="false" />
                    <div class="resultScan" />
                    <div class="resultGlow" />
                </div>

                <div class="resultText">
                    <div class="resultTop">{ text::RESULT_HEADING }</div>
                    <div class="resultTitle">{ p.card.name.clone() }</div>
                    <div class="resultSummary">{ p.card.summary.clone() }</div>
                    <div class="resultMeaning">{ p.card.meaning.clone() }</div>

                    <div class="resultAdviceTitle">{ text::ADVICE_HEADING }</div>
                    <ul class="resultAdvice">
                        { for p.card.advice.iter().map(|line| html! { <li>{ line.clone() }</li> }) }
                    </ul>

                    <div class="resultMeta">{ text::result_meta(p.count, p.vip, p.remaining) }</div>

                    <div class="resultActions">
                        <button type="button" class="primaryBtn" onclick={on_again}>
                            { text::DRAW_AGAIN }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
