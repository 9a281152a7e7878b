/// Search tab: query box, quick tags, sorted result cards
use patternfly_yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::components::{Placeholder, ProductCard};
use super::{SearchState, WishlistAction};
use crate::catalog::{ResultsSummary, SortOrder, sort_products};
use crate::config::THEMES;
use crate::pricing::format_price;
use crate::wishlist_data::WishlistEntry;

#[derive(Properties, PartialEq)]
pub struct SearchViewProps {
    pub state: SearchState,
    pub wishlist: Vec<WishlistEntry>,
    pub on_search: Callback<String>,
    pub on_sort: Callback<SortOrder>,
    pub on_wishlist: Callback<WishlistAction>,
}

#[function_component(SearchView)]
pub fn search_view(props: &SearchViewProps) -> Html {
    let input_value = use_state(|| props.state.query.clone());

    // Follow queries started elsewhere (wishlist "Find", set identifier)
    {
        let input_value = input_value.clone();
        use_effect_with(props.state.query.clone(), move |query| {
            input_value.set(query.clone());
            || ()
        });
    }

    let on_input = {
        let input_value = input_value.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                input_value.set(input.value());
            }
        })
    };

    let on_search_click = {
        let input_value = input_value.clone();
        props.on_search.reform(move |_: MouseEvent| (*input_value).clone())
    };

    let on_keypress = {
        let input_value = input_value.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_search.emit((*input_value).clone());
            }
        })
    };

    let on_sort_change = {
        let on_sort = props.on_sort.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                on_sort.emit(SortOrder::parse(&select.value()));
            }
        })
    };

    let on_toggle_wishlist = props.on_wishlist.reform(WishlistAction::Toggle);
    let results = sort_products(&props.state.results, props.state.sort);
    let summary = ResultsSummary::from_products(&results);

    html! {
        <div class="search-section">
            <div class="search-box">
                <input
                    id="mainSearch"
                    type="text"
                    placeholder="Set name, theme or number..."
                    value={(*input_value).clone()}
                    oninput={on_input}
                    onkeypress={on_keypress}
                    class="search-input"
                />
                <Button onclick={on_search_click} disabled={props.state.loading} variant={ButtonVariant::Primary}>
                    {"🔍 Search"}
                </Button>
            </div>

            <div class="quick-tags">
                {for THEMES.into_iter().map(|theme| {
                    let on_tag = props.on_search.reform(move |_: MouseEvent| theme.to_string());
                    html! {
                        <button class="quick-tag" onclick={on_tag}>{theme}</button>
                    }
                })}
            </div>

            <div class="sort-row">
                <select id="sortSelect" class="sort-select" onchange={on_sort_change}>
                    {for SortOrder::ALL.into_iter().map(|order| html! {
                        <option value={order.value()} selected={order == props.state.sort}>
                            {order.label()}
                        </option>
                    })}
                </select>
            </div>

            if props.state.loading {
                <div class="loading-text-center">
                    <Spinner />
                    <p class="loading-text">{"Searching..."}</p>
                </div>
            } else {
                if let Some(summary) = summary {
                    <div class="results-info">
                        <span>{format!("Found: {}", summary.count)}</span>
                        <span>{format!("Prices: {} - {}", format_price(summary.min_price), format_price(summary.max_price))}</span>
                        <span>{format!("Average: {}", format_price(summary.average_price))}</span>
                    </div>
                }

                if results.is_empty() && props.state.searched {
                    <Placeholder icon="🔍" message="Nothing found" hint="Try a different query" />
                } else {
                    <div class="results-grid">
                        {for results.iter().map(|product| {
                            let in_wishlist = props.wishlist.iter().any(|e| e.query == product.title);
                            html! {
                                <ProductCard
                                    key={product.id.clone()}
                                    product={product.clone()}
                                    in_wishlist={in_wishlist}
                                    on_toggle_wishlist={on_toggle_wishlist.clone()}
                                />
                            }
                        })}
                    </div>
                }
            }
        </div>
    }
}
