//! Root component wiring the draw controller to the page.
use crate::clock::BrowserClock;
use crate::storage::LocalStorageBackend;
use tarot_draw::{DrawController, DrawRng, standard_controller};

pub type WebController = DrawController<LocalStorageBackend, BrowserClock, DrawRng>;

/// Controller for this page load: browser storage, wall clock, fresh seed, VIP from the URL.
#[must_use]
pub fn build_controller() -> WebController {
    standard_controller(
        LocalStorageBackend,
        BrowserClock,
        crate::launch::entropy_seed(),
        crate::launch::is_vip_device(),
    )
}

#[cfg(target_arch = "wasm32")]
mod root {
    use super::{WebController, build_controller};
    use crate::components::draw_page::DrawPage;
    use crate::dom::{self, Timeout};
    use std::cell::RefCell;
    use std::rc::Rc;
    use tarot_draw::PickOutcome;
    use yew::prelude::*;

    fn schedule_reveal(
        controller: &Rc<RefCell<WebController>>,
        timer: &Rc<RefCell<Option<Timeout>>>,
        rerender: &UseForceUpdateHandle,
        slot: usize,
    ) {
        let outcome = controller.borrow_mut().pick(slot);
        let PickOutcome::Started(reveal) = outcome else {
            return;
        };
        dom::preload_image(&crate::paths::asset_path(&reveal.front_image));

        let delay = u32::try_from(reveal.delay.as_millis()).unwrap_or(u32::MAX);
        let fire = {
            let controller = controller.clone();
            let rerender = rerender.clone();
            move || {
                controller.borrow_mut().complete_flight(reveal.token);
                rerender.force_update();
            }
        };
        match Timeout::new(delay, fire) {
            Ok(handle) => {
                *timer.borrow_mut() = Some(handle);
            }
            Err(err) => {
                dom::console_error(&dom::js_error_message(&err));
                controller.borrow_mut().cancel_flight();
            }
        }
        rerender.force_update();
    }

    #[function_component(App)]
    pub fn app() -> Html {
        let controller = use_mut_ref(build_controller);
        let timer = use_mut_ref(|| None::<Timeout>);
        let rerender = use_force_update();

        {
            let controller = controller.clone();
            let timer = timer.clone();
            use_effect_with((), move |()| {
                move || {
                    // A pending reveal dies with the page; its draw is never counted.
                    timer.borrow_mut().take();
                    controller.borrow_mut().cancel_flight();
                }
            });
        }

        let on_pick = {
            let controller = controller.clone();
            let timer = timer.clone();
            let rerender = rerender.clone();
            Callback::from(move |slot: usize| {
                schedule_reveal(&controller, &timer, &rerender, slot);
            })
        };

        let on_again = {
            let controller = controller.clone();
            let timer = timer.clone();
            let rerender = rerender.clone();
            Callback::from(move |()| {
                if controller.borrow_mut().again() {
                    timer.borrow_mut().take();
                    rerender.force_update();
                }
            })
        };

        let on_toggle_vip = {
            let controller = controller.clone();
            let rerender = rerender.clone();
            Callback::from(move |()| {
                controller.borrow_mut().toggle_vip();
                rerender.force_update();
            })
        };

        let (status, revealed) = {
            let mut ctrl = controller.borrow_mut();
            // Tabs left open past local midnight show the new day's quota.
            ctrl.refresh_day();
            (ctrl.status(), ctrl.revealed().cloned())
        };

        html! {
            <DrawPage {status} {revealed} {on_pick} {on_again} {on_toggle_vip} />
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use root::App;
