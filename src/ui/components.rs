/// Reusable UI components

use chrono::Local;
use yew::prelude::*;

use crate::catalog::{Product, theme_icon};
use crate::pricing::{format_price, format_price_per_piece};
use crate::wishlist_data::WishlistEntry;

#[derive(Properties, PartialEq)]
pub struct PlaceholderProps {
    pub icon: AttrValue,
    pub message: AttrValue,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
}

#[function_component(Placeholder)]
pub fn placeholder(props: &PlaceholderProps) -> Html {
    html! {
        <div class="placeholder">
            {props.icon.clone()}
            <p>{props.message.clone()}</p>
            if let Some(hint) = &props.hint {
                <p class="text-tertiary">{hint.clone()}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
    pub in_wishlist: bool,
    pub on_toggle_wishlist: Callback<Product>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;

    let on_heart = {
        let product = product.clone();
        props.on_toggle_wishlist.reform(move |_: MouseEvent| product.clone())
    };

    let (heart, heart_title) = if props.in_wishlist {
        ("❤️", "Remove from wishlist")
    } else {
        ("🤍", "Add to wishlist")
    };

    let per_piece = if product.pieces > 0 {
        format!("{} / piece", format_price_per_piece(product.price / f64::from(product.pieces)))
    } else {
        String::new()
    };

    html! {
        <div class="product-card" data-product-id={product.id.clone()}>
            <div class="product-image">
                <div class="image-placeholder">
                    {theme_icon(&product.theme)}
                    <div class="product-theme-badge">{&product.theme}</div>
                </div>
                <div class="product-wishlist">
                    <button class="wishlist-heart" title={heart_title} onclick={on_heart}>
                        {heart}
                    </button>
                </div>
            </div>
            <div class="product-content">
                <div class="product-header">
                    <h3 class="product-title" title={product.title.clone()}>{&product.title}</h3>
                    <div class="product-number">{format!("#{}", product.number)}</div>
                </div>

                <div class="product-price-section">
                    <div class="product-price">{format_price(product.price)}</div>
                    <div class="product-price-per-piece">{per_piece}</div>
                </div>

                <div class="product-meta">
                    <div class="product-rating">
                        <span class="stars">{product.stars()}</span>
                        <span class="rating-value">{format!("{:.1}", product.rating)}</span>
                        <span class="rating-count">{format!("({})", product.rating_count)}</span>
                    </div>
                    <div class="product-retailer">
                        <span class="retailer-icon">{product.retailer_icon()}</span>
                        <span class="retailer-name" style={format!("color: {};", product.retailer_color())}>
                            {&product.retailer}
                        </span>
                    </div>
                </div>

                <div class="product-stats">
                    <div class="stat-item">
                        <span class="stat-icon">{"🧩"}</span>
                        <span class="stat-value">{product.pieces}</span>
                        <span class="stat-label">{"pieces"}</span>
                    </div>
                    <div class="stat-item">
                        <span class="stat-icon">{"📅"}</span>
                        <span class="stat-value">{product.year}</span>
                        <span class="stat-label">{"year"}</span>
                    </div>
                    <div class="stat-item">
                        <span class="stat-icon">{"👤"}</span>
                        <span class="stat-value">{&product.age_range}</span>
                    </div>
                </div>

                <div class={classes!("product-stock", if product.in_stock { "in-stock" } else { "out-of-stock" })}>
                    {if product.in_stock { "✅ In stock" } else { "❌ Out of stock" }}
                </div>

                <a href={product.url.clone()} target="_blank" rel="noopener noreferrer" class="product-link">
                    {"🛒 Go to shop"}
                </a>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct WishlistItemCardProps {
    pub entry: WishlistEntry,
    pub on_remove: Callback<String>,
    pub on_search: Callback<String>,
}

#[function_component(WishlistItemCard)]
pub fn wishlist_item_card(props: &WishlistItemCardProps) -> Html {
    let entry = &props.entry;

    let on_remove = {
        let id = entry.id.clone();
        props.on_remove.reform(move |_: MouseEvent| id.clone())
    };
    let on_search = {
        let query = entry.query.clone();
        props.on_search.reform(move |_: MouseEvent| query.clone())
    };

    let added = entry.added.with_timezone(&Local).format("%d.%m.%Y").to_string();

    html! {
        <div class="wishlist-item-card" data-id={entry.id.clone()}>
            <div class="wishlist-item-main">
                <div class="wishlist-item-icon">{"🧱"}</div>
                <div class="wishlist-item-content">
                    <div class="wishlist-item-title">{&entry.query}</div>
                    if let Some(number) = &entry.number {
                        <div class="wishlist-item-number">{format!("# {}", number)}</div>
                    }
                    if let Some(theme) = &entry.theme {
                        <div class="wishlist-item-theme">{format!("🏷️ {}", theme)}</div>
                    }
                    <div class="wishlist-item-date">{format!("📅 {}", added)}</div>
                </div>
            </div>
            <div class="wishlist-item-actions">
                if let Some(price) = entry.price {
                    <div class="wishlist-item-price">{format_price(price)}</div>
                }
                <div class="wishlist-item-buttons">
                    <button class="btn-search-wishlist" onclick={on_search}>{"🔍 Find"}</button>
                    <button class="btn-remove-wishlist" onclick={on_remove}>{"✕ Remove"}</button>
                </div>
            </div>
        </div>
    }
}
