/// Tools tab: set identifier, price-per-piece calculator and the wishlist panel
use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::components::{Placeholder, WishlistItemCard};
use super::{IDENTIFY_LATENCY_MS, Notice, WishlistAction, simulate_latency};
use crate::catalog::{CatalogError, SetDetails, identify_set};
use crate::config::AVERAGE_PRICE_PER_PIECE;
use crate::pricing::{PriceRating, PricingError, format_price_per_piece, price_per_piece};
use crate::wishlist_data::WishlistEntry;

fn input_callback(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            state.set(input.value());
        }
    })
}

fn on_enter(action: Callback<()>) -> Callback<KeyboardEvent> {
    Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            action.emit(());
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct ToolsViewProps {
    pub wishlist: Vec<WishlistEntry>,
    pub on_wishlist: Callback<WishlistAction>,
    pub on_search_for: Callback<String>,
    pub on_notice: Callback<Notice>,
}

#[function_component(ToolsView)]
pub fn tools_view(props: &ToolsViewProps) -> Html {
    html! {
        <div class="tools-section">
            <SetIdentifier on_search_for={props.on_search_for.clone()} />
            <PriceCalculator />
            <WishlistPanel
                wishlist={props.wishlist.clone()}
                on_wishlist={props.on_wishlist.clone()}
                on_search_for={props.on_search_for.clone()}
                on_notice={props.on_notice.clone()}
            />
        </div>
    }
}

#[derive(Clone, PartialEq)]
enum LookupState {
    Idle,
    Loading,
    Done(Result<SetDetails, CatalogError>),
}

#[derive(Properties, PartialEq)]
struct SetIdentifierProps {
    on_search_for: Callback<String>,
}

#[function_component(SetIdentifier)]
fn set_identifier(props: &SetIdentifierProps) -> Html {
    let input_value = use_state(String::new);
    let lookup = use_state(|| LookupState::Idle);

    let identify = {
        let input_value = input_value.clone();
        let lookup = lookup.clone();
        Callback::from(move |_: ()| match identify_set(&input_value) {
            Err(CatalogError::InvalidSetNumber) => {
                lookup.set(LookupState::Done(Err(CatalogError::InvalidSetNumber)));
            }
            result => {
                lookup.set(LookupState::Loading);
                let lookup = lookup.clone();
                spawn_local(async move {
                    simulate_latency(IDENTIFY_LATENCY_MS).await;
                    lookup.set(LookupState::Done(result));
                });
            }
        })
    };

    let on_input = input_callback(&input_value);
    let on_keypress = on_enter(identify.clone());
    let on_click = identify.reform(|_: MouseEvent| ());

    html! {
        <div class="tool-card">
            <h3 class="tool-title">{"🔎 Identify a set"}</h3>
            <div class="set-input-row">
                <input
                    id="setNumberInput"
                    type="text"
                    placeholder="75367"
                    value={(*input_value).clone()}
                    oninput={on_input}
                    onkeypress={on_keypress}
                    class="search-input"
                />
                <Button onclick={on_click} disabled={*lookup == LookupState::Loading} variant={ButtonVariant::Secondary}>
                    {"Identify"}
                </Button>
            </div>
            <div id="setResult">
                {match &*lookup {
                    LookupState::Idle => html! {},
                    LookupState::Loading => html! {
                        <div class="loading">{"⏳ Looking up the set..."}</div>
                    },
                    LookupState::Done(Ok(details)) => {
                        let on_find_prices = {
                            let number = details.number.clone();
                            props.on_search_for.reform(move |_: MouseEvent| number.clone())
                        };
                        html! {
                            <div class="set-info">
                                <h4>{details.name}</h4>
                                <div class="set-details-grid">
                                    <div class="detail-item">
                                        <span class="detail-label">{"Number:"}</span>
                                        <span class="detail-value">{format!("#{}", details.number)}</span>
                                    </div>
                                    <div class="detail-item">
                                        <span class="detail-label">{"Theme:"}</span>
                                        <span class="detail-value">{details.theme}</span>
                                    </div>
                                    <div class="detail-item">
                                        <span class="detail-label">{"Year:"}</span>
                                        <span class="detail-value">{details.year}</span>
                                    </div>
                                    <div class="detail-item">
                                        <span class="detail-label">{"Pieces:"}</span>
                                        <span class="detail-value">{details.pieces}</span>
                                    </div>
                                </div>
                                <p>{details.description}</p>
                                <Button onclick={on_find_prices} variant={ButtonVariant::Primary}>
                                    {"🔍 Find prices"}
                                </Button>
                            </div>
                        }
                    }
                    LookupState::Done(Err(e)) => {
                        let hint = match e {
                            CatalogError::UnknownSet(_) => "Try: 75367, 10316, 42154",
                            _ => "Example: 75367, 10316, 42154",
                        };
                        html! {
                            <Placeholder icon="❗" message={e.to_string()} hint={hint} />
                        }
                    }
                }}
            </div>
        </div>
    }
}

#[function_component(PriceCalculator)]
fn price_calculator() -> Html {
    let price_input = use_state(String::new);
    let pieces_input = use_state(String::new);
    let result = use_state(|| None::<Result<f64, PricingError>>);

    let on_calculate = {
        let price_input = price_input.clone();
        let pieces_input = pieces_input.clone();
        let result = result.clone();
        Callback::from(move |_: MouseEvent| {
            let price = price_input.trim().parse::<f64>();
            let pieces = pieces_input.trim().parse::<u32>();
            let value = match (price, pieces) {
                (Ok(price), Ok(pieces)) => price_per_piece(price, pieces),
                _ => Err(PricingError::InvalidInput),
            };
            result.set(Some(value));
        })
    };

    html! {
        <div class="tool-card">
            <h3 class="tool-title">{"🧮 Price per piece"}</h3>
            <div class="calc-inputs">
                <input
                    id="calcPrice"
                    type="number"
                    placeholder="Price, ₽"
                    value={(*price_input).clone()}
                    oninput={input_callback(&price_input)}
                    class="search-input"
                />
                <input
                    id="calcPieces"
                    type="number"
                    placeholder="Pieces"
                    value={(*pieces_input).clone()}
                    oninput={input_callback(&pieces_input)}
                    class="search-input"
                />
                <Button onclick={on_calculate} variant={ButtonVariant::Secondary}>{"Calculate"}</Button>
            </div>
            <div id="calcResult">
                {match &*result {
                    None => html! {},
                    Some(Ok(value)) => {
                        let rating = PriceRating::from_price_per_piece(*value);
                        html! {
                            <div class="calc-result">
                                <div class="result-title">{"Result:"}</div>
                                <div class="result-value">{format!("{} per piece", format_price_per_piece(*value))}</div>
                                <div class="result-rating" style={format!("color: {};", rating.color())}>
                                    {format!("{} {}", rating.icon(), rating.description())}
                                </div>
                                <div class="result-tip">
                                    {format!("💡 Average price per piece: {}", format_price_per_piece(AVERAGE_PRICE_PER_PIECE))}
                                </div>
                            </div>
                        }
                    }
                    Some(Err(e)) => html! {
                        <Placeholder icon="❗" message={e.to_string()} />
                    },
                }}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct WishlistPanelProps {
    wishlist: Vec<WishlistEntry>,
    on_wishlist: Callback<WishlistAction>,
    on_search_for: Callback<String>,
    on_notice: Callback<Notice>,
}

#[function_component(WishlistPanel)]
fn wishlist_panel(props: &WishlistPanelProps) -> Html {
    let input_value = use_state(String::new);

    let add = {
        let input_value = input_value.clone();
        let on_wishlist = props.on_wishlist.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |_: ()| {
            let query = input_value.trim().to_string();
            if query.is_empty() {
                on_notice.emit(Notice::warning("Enter a set name or number"));
                return;
            }
            let input_value = input_value.clone();
            on_wishlist.emit(WishlistAction::AddText {
                query,
                on_added: Callback::from(move |_: WishlistEntry| input_value.set(String::new())),
            });
        })
    };

    let on_clear = {
        let on_wishlist = props.on_wishlist.clone();
        let count = props.wishlist.len();
        Callback::from(move |_: MouseEvent| {
            if count > 0 && !confirm(&format!("Remove all {} sets from your wishlist?", count)) {
                return;
            }
            on_wishlist.emit(WishlistAction::Clear);
        })
    };

    let on_remove = props.on_wishlist.reform(WishlistAction::Remove);

    html! {
        <div class="tool-card">
            <h3 class="tool-title">{"❤️ Wishlist"}</h3>
            <div class="set-input-row">
                <input
                    id="wishlistInput"
                    type="text"
                    placeholder="Set name or number"
                    value={(*input_value).clone()}
                    oninput={input_callback(&input_value)}
                    onkeypress={on_enter(add.clone())}
                    class="search-input"
                />
                <Button onclick={add.reform(|_: MouseEvent| ())} variant={ButtonVariant::Primary}>
                    {"➕ Add"}
                </Button>
            </div>

            <div id="wishlistItems">
                if props.wishlist.is_empty() {
                    <Placeholder icon="❤️" message="Your wishlist is empty" hint="Add sets with ❤️ from the search results" />
                } else {
                    <div class="wishlist-header">
                        <span>{format!("❤️ Sets: {}", props.wishlist.len())}</span>
                        <Button onclick={on_clear} variant={ButtonVariant::Danger}>{"🗑️ Clear all"}</Button>
                    </div>
                    <div class="wishlist-items-container">
                        {for props.wishlist.iter().map(|entry| html! {
                            <WishlistItemCard
                                key={entry.id.clone()}
                                entry={entry.clone()}
                                on_remove={on_remove.clone()}
                                on_search={props.on_search_for.clone()}
                            />
                        })}
                    </div>
                }
            </div>
        </div>
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
