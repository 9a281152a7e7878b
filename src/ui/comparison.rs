/// Sets comparison tab
use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::components::Placeholder;
use super::{COMPARE_LATENCY_MS, Notice, simulate_latency};
use crate::comparison::{Comparison, ComparedSet, SetsGrid, compare_sets};
use crate::pricing::{format_price, format_price_per_piece};

#[derive(Properties, PartialEq)]
pub struct ComparisonViewProps {
    pub on_compare_prices: Callback<Vec<String>>,
    pub on_notice: Callback<Notice>,
}

#[function_component(ComparisonView)]
pub fn comparison_view(props: &ComparisonViewProps) -> Html {
    let grid = use_state(SetsGrid::new);
    let input_value = use_state(String::new);
    let comparison = use_state(|| None::<Comparison>);

    let on_input = {
        let input_value = input_value.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                input_value.set(input.value());
            }
        })
    };

    let add_set = {
        let grid = grid.clone();
        let input_value = input_value.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |_: ()| {
            let mut next = (*grid).clone();
            match next.add(&input_value) {
                Ok(set) => {
                    on_notice.emit(Notice::success(format!("Set {} added to comparison", set.number)));
                    grid.set(next);
                    input_value.set(String::new());
                }
                Err(e) => on_notice.emit(Notice::warning(e.to_string())),
            }
        })
    };

    let on_add_click = add_set.reform(|_: MouseEvent| ());
    let on_keypress = {
        let add_set = add_set.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                add_set.emit(());
            }
        })
    };

    let on_remove = {
        let grid = grid.clone();
        let comparison = comparison.clone();
        Callback::from(move |number: String| {
            let mut next = (*grid).clone();
            if next.remove(&number) {
                if next.is_empty() {
                    comparison.set(None);
                }
                grid.set(next);
            }
        })
    };

    let on_compare = {
        let grid = grid.clone();
        let comparison = comparison.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |_: MouseEvent| match compare_sets(&grid.numbers()) {
            Ok(result) => {
                on_notice.emit(Notice::info("Comparing sets..."));
                let comparison = comparison.clone();
                let on_notice = on_notice.clone();
                spawn_local(async move {
                    simulate_latency(COMPARE_LATENCY_MS).await;
                    comparison.set(Some(result));
                    on_notice.emit(Notice::success("Comparison finished"));
                });
            }
            Err(e) => on_notice.emit(Notice::warning(e.to_string())),
        })
    };

    let on_compare_prices = {
        let grid = grid.clone();
        props.on_compare_prices.reform(move |_: MouseEvent| grid.numbers())
    };

    html! {
        <div class="comparison-section">
            <div class="set-input-row">
                <input
                    id="setSearchInput"
                    type="text"
                    placeholder="Set number, e.g. 75367"
                    value={(*input_value).clone()}
                    oninput={on_input}
                    onkeypress={on_keypress}
                    class="search-input"
                />
                <Button onclick={on_add_click} variant={ButtonVariant::Secondary}>{"➕ Add"}</Button>
            </div>

            <div id="setsGrid" class="sets-grid">
                {for grid.sets().iter().map(|set| {
                    let on_remove = {
                        let number = set.number.clone();
                        on_remove.reform(move |_: MouseEvent| number.clone())
                    };
                    html! {
                        <div key={set.number.clone()} class="set-item">
                            <button class="remove-button" onclick={on_remove}>{"✕"}</button>
                            <div class="set-number">{&set.number}</div>
                            <div class="set-name">{set.name}</div>
                        </div>
                    }
                })}
            </div>

            <div class="flex-column-gap">
                <Button onclick={on_compare} variant={ButtonVariant::Primary} block={true}>
                    {"⚖️ Compare sets"}
                </Button>
                <Button onclick={on_compare_prices} variant={ButtonVariant::Secondary} block={true}>
                    {"💰 Compare prices"}
                </Button>
            </div>

            <div id="comparisonResults">
                if let Some(result) = &*comparison {
                    {comparison_table(result)}
                } else {
                    <Placeholder icon="⚖️" message="Add sets and press \"Compare\"" />
                }
            </div>
        </div>
    }
}

fn table_row(label: &str, sets: &[ComparedSet], cell: impl Fn(&ComparedSet) -> String) -> Html {
    html! {
        <tr>
            <td>{label.to_string()}</td>
            {for sets.iter().map(|set| html! { <td>{cell(set)}</td> })}
        </tr>
    }
}

fn comparison_table(comparison: &Comparison) -> Html {
    let sets = &comparison.sets;
    let best = &comparison.analysis.best_value;
    let largest = &comparison.analysis.largest_set;

    html! {
        <>
            <div class="comparison-table-container">
                <table class="comparison-table">
                    <thead>
                        <tr>
                            <th>{"Feature"}</th>
                            {for sets.iter().map(|set| html! { <th>{format!("#{}", set.number)}</th> })}
                        </tr>
                    </thead>
                    <tbody>
                        {table_row("Name", sets, |s| s.name.clone())}
                        {table_row("Theme", sets, |s| s.theme.to_string())}
                        {table_row("Year", sets, |s| s.year.to_string())}
                        {table_row("Pieces", sets, |s| s.pieces.to_string())}
                        {table_row("Price", sets, |s| format_price(s.price))}
                        {table_row("Price per piece", sets, |s| format_price_per_piece(s.price_per_piece))}
                    </tbody>
                </table>
            </div>

            <div class="comparison-analysis">
                <h4>{"📊 Analysis:"}</h4>
                <div class="analysis-points">
                    <div class="analysis-point">
                        {"🏆"}
                        <div>
                            <strong>{"Best value:"}</strong>
                            <p>{format!("Set #{} ({} / piece)", best.number, format_price_per_piece(best.price_per_piece))}</p>
                        </div>
                    </div>
                    <div class="analysis-point">
                        {"📏"}
                        <div>
                            <strong>{"Largest set:"}</strong>
                            <p>{format!("Set #{} ({} pieces)", largest.number, largest.pieces)}</p>
                        </div>
                    </div>
                </div>
            </div>
        </>
    }
}
