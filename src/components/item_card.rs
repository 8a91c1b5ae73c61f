//! Item Card Component
//!
//! Display of one catalog entry with edit/delete triggers.

use catalog_core::CatalogItem;
use leptos::prelude::*;

/// A single coffee in the grid
///
/// # Arguments
/// * `item` - Entry to show; rating and price fall back to display defaults
/// * `on_edit` - Run when the edit button is clicked
/// * `on_delete` - Run when the delete button is clicked (confirmation happens upstream)
#[component]
pub fn ItemCard(
    item: CatalogItem,
    #[prop(into)] on_edit: Callback<()>,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    let popular = item.is_popular();
    let rating = item.rating_label();
    let price = format!("${}", item.price_label());

    view! {
        <article class="card">
            {popular.then(|| view! { <span class="badge-popular">"🔥 Popular"</span> })}

            <div class="card-media">
                <img src=item.image.clone() alt=item.title.clone() loading="lazy" />
            </div>

            <div class="card-body">
                <div class="card-heading">
                    <h2>{item.title.clone()}</h2>
                    <span class="rating">"★ " {rating}</span>
                </div>

                <p class="card-description">{item.description.clone()}</p>

                <div class="ingredients">
                    <h3>"Ingredients"</h3>
                    <div class="chips">
                        {item.ingredients.iter().map(|ingredient| view! {
                            <span class="chip">{ingredient.clone()}</span>
                        }).collect_view()}
                    </div>
                </div>

                <div class="card-footer">
                    <span class="price">{price}</span>
                    <div class="card-actions">
                        <button
                            class="icon-btn edit-btn"
                            aria-label="Edit coffee"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_edit.run(());
                            }
                        >
                            "✎"
                        </button>
                        <button
                            class="icon-btn delete-btn"
                            aria-label="Delete coffee"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_delete.run(());
                            }
                        >
                            "🗑"
                        </button>
                    </div>
                </div>
            </div>
        </article>
    }
}
