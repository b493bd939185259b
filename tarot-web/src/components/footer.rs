use crate::text::FOOTER;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">{ FOOTER }</footer>
    }
}
