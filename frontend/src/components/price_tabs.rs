use shared::prize_catalog::icons;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct PriceTabsProps {
    pub prices: Vec<u32>,
    pub selected: u32,
    pub on_select: Callback<u32>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(PriceTabs)]
pub fn price_tabs(props: &PriceTabsProps) -> Html {
    html! {
        <div class={styles::TABS}>
            {for props.prices.iter().map(|price| {
                let price = *price;
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(price))
                };
                html! {
                    <button
                        type="button"
                        key={price}
                        class={if price == props.selected { styles::TAB_ACTIVE } else { styles::TAB }}
                        disabled={props.disabled}
                        {onclick}
                    >
                        <img src={icons::STAR_BADGE} alt="Stars" class={styles::STAR_ICON} />
                        <span>{price}</span>
                    </button>
                }
            })}
        </div>
    }
}
