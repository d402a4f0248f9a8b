use super::battery_slider::BatterySlider;
use crate::content::Collection;
use yew::prelude::*;

pub const BUNDLED_PAGE_ID: &str = "battery-slider";
pub const BUNDLED_PAGE: &str = include_str!("../../content/pages/battery-slider.md");

fn bundled_pages() -> Collection {
    match Collection::from_documents([("battery-slider.md", BUNDLED_PAGE)]) {
        Ok(pages) => pages,
        Err(e) => {
            log::error!("bundled content is invalid: {}", e);
            Collection::default()
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let pages = use_memo((), |_| bundled_pages());

    let header = match pages.get(BUNDLED_PAGE_ID) {
        Some(page) => html! {
            <header style="text-align:center; max-width:420px;">
                <h1 style="margin:0 0 6px 0; font-size:22px;">{ page.data.title.clone() }</h1>
                <p style="margin:0; font-size:13px; opacity:0.7;">{ page.data.tweet.clone() }</p>
            </header>
        },
        None => html! {},
    };

    html! {
        <main id="root" style="min-height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:24px; background:#0d1117; color:#f0f6fc; font-family:system-ui, sans-serif;">
            { header }
            <BatterySlider />
        </main>
    }
}
