use yew::prelude::*;

const SPARK_COUNT: usize = 16;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub back_image: AttrValue,
}

/// Card flip shown while a draw is in flight.
///
/// Both faces show the back; the real face only appears on the result card.
#[function_component(FlyingOverlay)]
pub fn flying_overlay(p: &Props) -> Html {
    html! {
        <div class="flyingOverlay" aria-hidden="true">
            <div class="flyCard perspective">
                <div class="flyInner preserve3d flyAnim">
                    <div class="flyFace back backfaceHidden">
                        <img class="flyImg" src={p.back_image.clone()} alt="" draggable="false" />
                        <div class="scan scanActive" />
                    </div>
                    <div class="flyFace front backfaceHidden rotateY180">
                        <img class="flyImg" src={p.back_image.clone()} alt="" draggable="false" />
                        <div class="scan scanActive" />
                        <div class="burst90" />
                    </div>
                </div>
            </div>
            <div class="sparkLayer">
                { for (0..SPARK_COUNT).map(|i| html! {
                    <span key={i.to_string()} class="spark" style={format!("--i: {i}")} />
                }) }
            </div>
        </div>
    }
}
