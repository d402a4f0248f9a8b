use yew::prelude::*;

#[function_component(ChargingIcon)]
pub fn charging_icon() -> Html {
    html! {
        <svg class="charging-icon" width="16" height="16" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
            <path
                d="M13 2L10 12H14L11 22L20 10H15L18 2H13Z"
                fill="currentColor"
                stroke="currentColor"
                stroke-width="1.5"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}
