use shared::prize_catalog::{icons, PrizeEntry};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct StarBadgeProps {
    pub price: u32,
}

#[function_component(StarBadge)]
pub fn star_badge(props: &StarBadgeProps) -> Html {
    html! {
        <span class={styles::STAR_BADGE}>
            <img src={icons::STAR_BADGE} alt="Stars" class={styles::STAR_ICON} />
            <span>{props.price}</span>
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct GiftCardProps {
    pub entry: PrizeEntry,
    pub width: f64,
    pub height: f64,
    #[prop_or_default]
    pub selected: bool,
    /// Shown under the price in the "possible prizes" list.
    #[prop_or_default]
    pub chance: Option<AttrValue>,
}

#[function_component(GiftCard)]
pub fn gift_card(props: &GiftCardProps) -> Html {
    let entry = &props.entry;
    let size = format!("width: {}px; height: {}px;", props.width, props.height);

    html! {
        <div
            class={classes!(styles::GIFT_CARD, props.selected.then_some(styles::GIFT_CARD_SELECTED))}
            style={size}
        >
            <img src={entry.icon} alt={entry.label} class={styles::GIFT_ICON} />
            <StarBadge price={entry.price} />
            if let Some(chance) = &props.chance {
                <span class={classes!(styles::TEXT_SUBTITLE, "mt-2")}>{chance.as_str()}</span>
            }
        </div>
    }
}
