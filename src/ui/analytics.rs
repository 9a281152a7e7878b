/// Analytics tab
use yew::prelude::*;

use super::components::Placeholder;
use crate::analytics::{market_price_stats, trending_sets};
use crate::pricing::format_price;

#[function_component(AnalyticsView)]
pub fn analytics_view() -> Html {
    let trending = trending_sets();
    let stats = market_price_stats();

    html! {
        <div class="analytics-section">
            <div class="analytics-card">
                <h2 class="stats-title">{"🔥 Trending sets"}</h2>
                <div id="trendingList">
                    if trending.is_empty() {
                        <Placeholder icon="📉" message="No data" />
                    } else {
                        {for trending.iter().map(|set| html! {
                            <div class="trending-item">
                                <div class="trending-rank">{set.rank}</div>
                                <div class="trending-name">
                                    <strong>{set.name}</strong>
                                    <small>{format!("#{}", set.number)}</small>
                                </div>
                                <div class="trending-price">{format_price(set.price)}</div>
                            </div>
                        })}
                    }
                </div>
            </div>

            <div class="analytics-card">
                <h2 class="stats-title">{"💹 Prices"}</h2>
                <div id="priceStats">
                    <div class="stat-row">
                        <span>{"💰 Average price:"}</span>
                        <span class="stat-value">{format_price(stats.average)}</span>
                    </div>
                    <div class="stat-row">
                        <span>{"📊 Median price:"}</span>
                        <span class="stat-value">{format_price(stats.median)}</span>
                    </div>
                    <div class="stat-row">
                        <span>{"👑 Most expensive:"}</span>
                        <span class="stat-value">{format_price(stats.max)}</span>
                    </div>
                    <div class="stat-row">
                        <span>{"💎 Cheapest:"}</span>
                        <span class="stat-value">{format_price(stats.min)}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
