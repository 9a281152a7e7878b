/// Main page for BrickMind

use patternfly_yew::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, StorageEvent};
use yew::prelude::*;

use super::analytics::AnalyticsView;
use super::comparison::ComparisonView;
use super::search::SearchView;
use super::tools::ToolsView;
use super::wishlist_actions::apply_wishlist_action;
use super::{
    NOTICE_TIMEOUT_MS, Notice, PRICE_CHECK_LATENCY_MS, SEARCH_LATENCY_MS, SearchState,
    WishlistAction, simulate_latency,
};
use crate::analytics::LiveStats;
use crate::catalog::{self, SortOrder};
use crate::config::WISHLIST_STORAGE_KEY;
use crate::comparison::compare_set_prices;
use crate::navigation::ActiveTab;
use crate::pricing::format_count;
use crate::storage::AppStorage;
use crate::theme::Theme;
use crate::wishlist::WishlistStore;

const SUPPORT_SECTION_ID: &str = "supportSection";

#[function_component(App)]
pub fn app() -> Html {
    let storage = use_memo((), |_| AppStorage::detect());
    let store = {
        let storage = storage.clone();
        use_mut_ref(move || WishlistStore::open((*storage).clone()))
    };
    let wishlist = {
        let store = store.clone();
        use_state(move || store.borrow().newest_first())
    };
    let theme = {
        let storage = storage.clone();
        use_state(move || Theme::load(&*storage))
    };
    let active_tab = use_state(ActiveTab::default);
    let live_stats = use_memo((), |_| LiveStats::sample());
    let search = use_state(SearchState::default);
    let notice = use_state(|| None::<Notice>);
    let notice_seq = use_mut_ref(|| 0u32);

    use_effect_with(*theme, |theme| {
        theme.apply();
        || ()
    });

    // Writes from other browser tabs arrive as `storage` events
    {
        let store = store.clone();
        let wishlist = wishlist.clone();
        use_effect_with((), move |_| {
            let listener = Closure::wrap(Box::new(move |e: StorageEvent| {
                // A missing key means the whole storage area was cleared
                if e.key().is_some_and(|key| key != WISHLIST_STORAGE_KEY) {
                    return;
                }
                let mut store = store.borrow_mut();
                store.refresh();
                wishlist.set(store.newest_first());
            }) as Box<dyn Fn(StorageEvent)>);

            let window = web_sys::window();
            if let Some(window) = &window {
                if let Err(e) = window
                    .add_event_listener_with_callback("storage", listener.as_ref().unchecked_ref())
                {
                    log::warn!("Could not watch wishlist storage: {:?}", e);
                }
            }

            move || {
                if let Some(window) = window {
                    if let Err(e) = window.remove_event_listener_with_callback(
                        "storage",
                        listener.as_ref().unchecked_ref(),
                    ) {
                        log::warn!("Could not stop watching wishlist storage: {:?}", e);
                    }
                }
            }
        });
    }

    // Show a notice; it hides itself unless a newer one replaced it
    let show_notice = {
        let notice = notice.clone();
        let notice_seq = notice_seq.clone();
        Callback::from(move |next: Notice| {
            let seq = {
                let mut current = notice_seq.borrow_mut();
                *current = current.wrapping_add(1);
                *current
            };
            notice.set(Some(next));

            let notice = notice.clone();
            let notice_seq = notice_seq.clone();
            spawn_local(async move {
                simulate_latency(NOTICE_TIMEOUT_MS).await;
                if *notice_seq.borrow() == seq {
                    notice.set(None);
                }
            });
        })
    };

    let switch_tab = {
        let active_tab = active_tab.clone();
        let store = store.clone();
        let wishlist = wishlist.clone();
        Callback::from(move |tab: ActiveTab| {
            if tab == ActiveTab::Tools {
                // Another tab may have written the slot since we loaded it
                let mut store = store.borrow_mut();
                store.refresh();
                wishlist.set(store.newest_first());
            }
            log::debug!("Switching to tab {}", tab.name());
            active_tab.set(tab);
        })
    };

    let on_tab_click = {
        let switch_tab = switch_tab.clone();
        Callback::from(move |e: MouseEvent| {
            let tab = e
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|button| button.get_attribute("data-tab"))
                .and_then(|name| ActiveTab::parse(&name));
            match tab {
                Some(tab) => switch_tab.emit(tab),
                None => log::warn!("Tab button without a known data-tab"),
            }
        })
    };

    let on_support = Callback::from(|_: MouseEvent| {
        let section = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(SUPPORT_SECTION_ID));
        if let Some(section) = section {
            section.scroll_into_view();
        }
    });

    let run_search = {
        let search = search.clone();
        let show_notice = show_notice.clone();
        Callback::from(move |query: String| {
            let results = match catalog::search(&query) {
                Ok(results) => results,
                Err(e) => {
                    show_notice.emit(Notice::warning(e.to_string()));
                    return;
                }
            };

            let sort = search.sort;
            search.set(SearchState {
                query: query.clone(),
                results: Vec::new(),
                sort,
                loading: true,
                searched: false,
            });

            let search = search.clone();
            let show_notice = show_notice.clone();
            spawn_local(async move {
                simulate_latency(SEARCH_LATENCY_MS).await;
                let found = results.len();
                search.set(SearchState {
                    query,
                    results,
                    sort,
                    loading: false,
                    searched: true,
                });
                show_notice.emit(Notice::success(format!("Found {} results", found)));
            });
        })
    };

    let on_sort = {
        let search = search.clone();
        Callback::from(move |sort: SortOrder| {
            let mut next = (*search).clone();
            next.sort = sort;
            search.set(next);
        })
    };

    let search_for = {
        let switch_tab = switch_tab.clone();
        let run_search = run_search.clone();
        Callback::from(move |query: String| {
            switch_tab.emit(ActiveTab::Search);
            run_search.emit(query);
        })
    };

    let on_compare_prices = {
        let search = search.clone();
        let switch_tab = switch_tab.clone();
        let show_notice = show_notice.clone();
        Callback::from(move |numbers: Vec<String>| {
            let offers = match compare_set_prices(&numbers) {
                Ok(offers) => offers,
                Err(e) => {
                    show_notice.emit(Notice::warning(e.to_string()));
                    return;
                }
            };

            show_notice.emit(Notice::info("Comparing prices..."));
            switch_tab.emit(ActiveTab::Search);
            search.set(SearchState {
                loading: true,
                ..SearchState::default()
            });

            let search = search.clone();
            let show_notice = show_notice.clone();
            spawn_local(async move {
                simulate_latency(PRICE_CHECK_LATENCY_MS).await;
                search.set(SearchState {
                    results: offers,
                    searched: true,
                    ..SearchState::default()
                });
                show_notice.emit(Notice::success(format!("Found prices for {} sets", numbers.len())));
            });
        })
    };

    let on_wishlist = {
        let store = store.clone();
        let wishlist = wishlist.clone();
        let show_notice = show_notice.clone();
        Callback::from(move |action: WishlistAction| {
            let mut store = store.borrow_mut();
            let result = apply_wishlist_action(&mut *store, action);
            wishlist.set(store.newest_first());
            show_notice.emit(result);
        })
    };

    let on_toggle_theme = {
        let theme = theme.clone();
        let storage = storage.clone();
        let show_notice = show_notice.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme.toggled();
            if let Err(e) = next.save(&*storage) {
                log::warn!("Failed to save theme: {}", e);
            }
            theme.set(next);
            show_notice.emit(Notice::success(format!("Switched to {} theme", next.as_str())));
        })
    };

    let wishlist_count = wishlist.len();

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1 class="app-title">{"🧱 BrickMind"}</h1>
                <div class="live-stats">
                    <div class="live-stat">
                        <span id="totalProducts" class="live-stat-value">{format_count(u64::from(live_stats.total_products))}</span>
                        <span class="live-stat-label">{"sets tracked"}</span>
                    </div>
                    <div class="live-stat">
                        <span id="avgSavings" class="live-stat-value">{format!("{}%", live_stats.avg_savings_percent)}</span>
                        <span class="live-stat-label">{"average savings"}</span>
                    </div>
                </div>
                <button class="support-link" title="Support the project" onclick={on_support}>
                    {"💛 Support"}
                </button>
                <button id="themeToggle" class="theme-toggle" title="Toggle theme" onclick={on_toggle_theme}>
                    {theme.icon()}
                </button>
            </header>

            // Tab navigation
            <nav class="pf-v5-c-tabs tabs-nav">
                <ul class="pf-v5-c-tabs__list">
                    {for ActiveTab::ALL.into_iter().map(|tab| {
                        let class = if *active_tab == tab {
                            "pf-v5-c-tabs__item pf-m-current"
                        } else {
                            "pf-v5-c-tabs__item"
                        };
                        html! {
                            <li class={class}>
                                <button
                                    class="pf-v5-c-tabs__link nav-link"
                                    data-tab={tab.name()}
                                    onclick={on_tab_click.clone()}
                                >
                                    <span class="pf-v5-c-tabs__item-text">{tab.label()}</span>
                                    if tab == ActiveTab::Tools && wishlist_count > 0 {
                                        <span class="wishlist-badge" title={format!("{} sets in wishlist", wishlist_count)}>
                                            {wishlist_count}
                                        </span>
                                    }
                                </button>
                            </li>
                        }
                    })}
                </ul>
            </nav>

            // Status line
            if let Some(notice) = (*notice).clone() {
                <div class="message-top-margin">
                    <Alert r#type={notice.kind.alert_type()} title={notice.message} inline={true}>
                    </Alert>
                </div>
            }

            // Every section stays mounted so tab-local state survives switching
            <main class="tab-pane-content">
                <section id={ActiveTab::Search.section_id()} hidden={*active_tab != ActiveTab::Search}>
                    <SearchView
                        state={(*search).clone()}
                        wishlist={(*wishlist).clone()}
                        on_search={run_search}
                        on_sort={on_sort}
                        on_wishlist={on_wishlist.clone()}
                    />
                </section>
                <section id={ActiveTab::SetsComparison.section_id()} hidden={*active_tab != ActiveTab::SetsComparison}>
                    <ComparisonView on_compare_prices={on_compare_prices} on_notice={show_notice.clone()} />
                </section>
                <section id={ActiveTab::Analytics.section_id()} hidden={*active_tab != ActiveTab::Analytics}>
                    <AnalyticsView />
                </section>
                <section id={ActiveTab::Tools.section_id()} hidden={*active_tab != ActiveTab::Tools}>
                    <ToolsView
                        wishlist={(*wishlist).clone()}
                        on_wishlist={on_wishlist}
                        on_search_for={search_for}
                        on_notice={show_notice}
                    />
                </section>
            </main>

            <section id={SUPPORT_SECTION_ID} class="donations-section">
                <h3>{"💛 Support BrickMind"}</h3>
                <p>{"BrickMind is free. Sharing it with other builders keeps it going."}</p>
            </section>

            <footer class="footer-popup">
                {"BrickMind v0.1.0"}
            </footer>
        </div>
    }
}
