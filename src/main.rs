use battery_slider::components::app::App;
use battery_slider::util::{default_log_level, init_logging};

fn main() {
    init_logging(default_log_level());
    log::info!("mounting battery slider");
    yew::Renderer::<App>::new().render();
}
