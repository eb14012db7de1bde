use yew::prelude::*;

use crate::styles;
use crate::Tab;

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <nav class={styles::TAB_BAR} role="navigation" aria-label="Bottom navigation">
            {for Tab::ALL.iter().map(|tab| {
                let tab = *tab;
                let is_active = tab == props.active;
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(tab))
                };
                html! {
                    <button
                        type="button"
                        key={tab.label()}
                        class={if is_active { styles::TAB_BAR_ITEM_ACTIVE } else { styles::TAB_BAR_ITEM }}
                        aria-current={if is_active { Some("page") } else { None }}
                        {onclick}
                    >
                        <span class="text-xl" aria-hidden="true">{tab.icon()}</span>
                        <span>{tab.label()}</span>
                    </button>
                }
            })}
        </nav>
    }
}
