use shared::prize_catalog::PrizeEntry;
use yew::prelude::*;

use crate::components::StarBadge;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WinOverlayProps {
    pub prize: PrizeEntry,
}

#[function_component(WinOverlay)]
pub fn win_overlay(props: &WinOverlayProps) -> Html {
    html! {
        <div class={styles::OVERLAY} role="dialog" aria-live="polite">
            <div class={styles::OVERLAY_CARD}>
                <span class={styles::TEXT_H1}>{"You won!"}</span>
                <img src={props.prize.icon} alt={props.prize.label} class="h-28 w-28 drop-shadow-lg" />
                <span class={styles::TEXT_H2}>{props.prize.label}</span>
                <StarBadge price={props.prize.price} />
            </div>
        </div>
    }
}
