use gloo_net::http::Request;
use shared::adaptivity::{Adaptivity, SizeClass};
use shared::constants::*;
use shared::invoice::{ApiErrorBody, InvoiceResponse, InvoiceStatus};
use shared::prize_catalog::{display_prizes, icons};
use shared::spin::SpinPhase;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{GiftCard, PriceTabs, WinOverlay};
use crate::config::get_api_base_url;
use crate::hooks::use_spin;
use crate::styles;
use crate::telegram::Host;

async fn fetch_invoice_link(amount: u32, init_data: &str) -> Result<String, String> {
    let url = format!("{}{}?amount={}", get_api_base_url(), INVOICE_ENDPOINT, amount);
    let response = Request::get(&url)
        .header(INIT_DATA_HEADER, init_data)
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        let code = response
            .json::<ApiErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| "unknown".to_string());
        return Err(format!("Error status {}: {}", response.status(), code));
    }

    response
        .json::<InvoiceResponse>()
        .await
        .map(|body| body.invoice_link)
        .map_err(|e| format!("Error parsing invoice response: {:?}", e))
}

fn card_height(size: SizeClass) -> f64 {
    match size {
        SizeClass::Compact => CARD_HEIGHT_COMPACT_PX,
        SizeClass::Regular => CARD_HEIGHT_REGULAR_PX,
    }
}

#[function_component(GiftsPage)]
pub fn gifts_page() -> Html {
    let host = use_context::<Host>().unwrap_or_else(Host::detect);
    let adaptivity = use_context::<Adaptivity>().unwrap_or_default();
    let spin = use_spin(&host, adaptivity);

    let price = use_state(|| DEFAULT_SPIN_PRICE);
    let demo_mode = use_state(|| false);
    let purchasing = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_price = {
        let price = price.clone();
        Callback::from(move |value: u32| price.set(value))
    };

    let toggle_demo = {
        let demo_mode = demo_mode.clone();
        Callback::from(move |_: MouseEvent| demo_mode.set(!*demo_mode))
    };

    let on_spin = {
        let host = host.clone();
        let start = spin.spin.clone();
        let idle = spin.is_idle();
        let amount = *price;
        let demo = *demo_mode;
        let purchasing = purchasing.clone();
        let error = error.clone();

        Callback::from(move |_: MouseEvent| {
            if !idle || *purchasing {
                return;
            }
            error.set(None);

            if demo {
                start.emit(());
                return;
            }

            let Some(init_data) = host.init_data() else {
                error.set(Some(INVOICE_UNAVAILABLE_ERROR.to_string()));
                return;
            };

            purchasing.set(true);
            let host = host.clone();
            let start = start.clone();
            let purchasing = purchasing.clone();
            let error = error.clone();
            spawn_local(async move {
                match fetch_invoice_link(amount, &init_data).await {
                    Ok(link) => {
                        host.open_invoice(
                            &link,
                            Callback::from(move |status: InvoiceStatus| {
                                log::info!("Invoice closed with status {:?}", status);
                                purchasing.set(false);
                                match status {
                                    InvoiceStatus::Paid => start.emit(()),
                                    InvoiceStatus::Failed => {
                                        error.set(Some(INVOICE_FAILED_ERROR.to_string()))
                                    }
                                    InvoiceStatus::Cancelled | InvoiceStatus::Pending => {}
                                }
                            }),
                        );
                    }
                    Err(e) => {
                        log::error!("Failed to create invoice: {}", e);
                        error.set(Some(INVOICE_FAILED_ERROR.to_string()));
                        purchasing.set(false);
                    }
                }
            });
        })
    };

    let geometry = spin.geometry;
    let height = card_height(adaptivity.size_x);
    let highlighted = match spin.phase {
        SpinPhase::Revealing { winning_index, .. } => {
            let catalog_len = spin.strip.len() / geometry.repetitions.max(1);
            Some(catalog_len * (geometry.repetitions / 2) + winning_index)
        }
        _ => None,
    };
    let busy = !spin.is_idle() || *purchasing;

    html! {
        <div class={styles::PAGE}>
            <div class="mb-4">
                <PriceTabs
                    prices={SPIN_PRICES.to_vec()}
                    selected={*price}
                    on_select={on_price}
                    disabled={busy}
                />
            </div>

            <div class={styles::ROULETTE_VIEWPORT} ref={spin.viewport_ref.clone()}>
                <div class={styles::ROULETTE_POINTER} />
                <div
                    class={styles::ROULETTE_STRIP}
                    ref={spin.strip_ref.clone()}
                    style={format!("gap: {}px;", geometry.item_gap)}
                >
                    {for spin.strip.iter().enumerate().map(|(index, entry)| html! {
                        <GiftCard
                            key={index}
                            entry={entry.clone()}
                            width={geometry.item_width}
                            {height}
                            selected={highlighted == Some(index)}
                        />
                    })}
                </div>
            </div>

            <div class={styles::SWITCH_ROW}>
                <span class={styles::TEXT_HINT}>{"Demo mode"}</span>
                <button
                    type="button"
                    role="switch"
                    aria-checked={(*demo_mode).to_string()}
                    class={classes!(
                        styles::SWITCH_TRACK,
                        if *demo_mode { "bg-[var(--tg-theme-button-color)]" } else { "bg-[var(--tg-theme-secondary-bg-color)]" }
                    )}
                    onclick={toggle_demo}
                    disabled={busy}
                >
                    <span class={classes!(
                        styles::SWITCH_THUMB,
                        if *demo_mode { "translate-x-5" } else { "translate-x-0.5" }
                    )} />
                </button>
            </div>

            <button type="button" class={styles::BUTTON_PRIMARY} onclick={on_spin} disabled={busy}>
                if *demo_mode {
                    <span>{"Try your luck!"}</span>
                } else {
                    <span>{"Get gift"}</span>
                    <img src={icons::BUTTON_STAR} alt="Stars" class={styles::STAR_ICON} />
                    <span>{*price}</span>
                }
            </button>

            if let Some(message) = &*error {
                <p class={classes!(styles::TEXT_ERROR, "mt-3", "text-center")}>{message.clone()}</p>
            }

            <section class="mt-8">
                <h2 class={styles::TEXT_SECTION_HEADER}>{"You can win"}</h2>
                <div class="flex gap-3 overflow-x-auto pb-2">
                    {for display_prizes().iter().map(|entry| html! {
                        <GiftCard
                            key={entry.label}
                            entry={entry.clone()}
                            width={geometry.item_width}
                            {height}
                            chance={AttrValue::from(entry.display_chance)}
                        />
                    })}
                </div>
            </section>

            if let Some(prize) = spin.winner.clone() {
                <WinOverlay {prize} />
            }
        </div>
    }
}
