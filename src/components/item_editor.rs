//! Item Editor Component
//!
//! Modal form over `PageState::draft`. Inputs are controlled: every keystroke
//! goes through `Event::DraftChanged`, and the submit button follows
//! `PageState::can_submit`.

use catalog_core::{DraftField, Event, FormDraft};
use leptos::prelude::*;

use crate::context::AppContext;

/// Field metadata: (field, label, placeholder, multiline)
const FIELDS: &[(DraftField, &str, &str, bool)] = &[
    (DraftField::Title, "Title*", "Espresso", false),
    (DraftField::Description, "Description*", "Rich, creamy coffee with...", true),
    (DraftField::Ingredients, "Ingredients*", "Coffee beans, milk, sugar (comma separated)", false),
    (DraftField::Image, "Image URL*", "https://example.com/coffee.jpg", false),
];

fn field_value(draft: &FormDraft, field: DraftField) -> String {
    match field {
        DraftField::Title => draft.title.clone(),
        DraftField::Description => draft.description.clone(),
        DraftField::Ingredients => draft.ingredients.clone(),
        DraftField::Image => draft.image.clone(),
    }
}

#[component]
pub fn ItemEditor() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let is_edit = Memo::new(move |_| ctx.state.with(|s| s.is_edit_mode()));
    let can_submit = Memo::new(move |_| ctx.state.with(|s| s.can_submit()));

    let close = move |_: web_sys::MouseEvent| ctx.dispatch(Event::CloseEditor);
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(Event::Submit);
    };

    view! {
        <div class="overlay">
            <form class="modal editor" on:submit=submit>
                <button type="button" class="close-btn" aria-label="Close form" on:click=close>
                    "×"
                </button>

                <h2>{move || if is_edit.get() { "Edit Coffee" } else { "Add Coffee" }}</h2>

                <div class="fields">
                    {FIELDS.iter().map(|&(field, label, placeholder, multiline)| {
                        let value = move || ctx.state.with(|s| field_value(&s.draft, field));
                        let on_input = move |ev: web_sys::Event| ctx.dispatch(Event::DraftChanged(field, event_target_value(&ev)));
                        let input = if multiline {
                            view! {
                                <textarea rows="3" placeholder=placeholder prop:value=value on:input=on_input></textarea>
                            }.into_any()
                        } else {
                            view! {
                                <input placeholder=placeholder prop:value=value on:input=on_input />
                            }.into_any()
                        };
                        view! {
                            <label class="field">
                                <span class="field-label">{label}</span>
                                {input}
                            </label>
                        }
                    }).collect_view()}
                </div>

                <div class="modal-actions">
                    <button type="button" class="btn btn-secondary" on:click=close>"Cancel"</button>
                    <button
                        type="submit"
                        class=move || if can_submit.get() { "btn btn-primary" } else { "btn btn-primary disabled" }
                        disabled=move || !can_submit.get()
                    >
                        {move || if is_edit.get() { "Update Coffee" } else { "Create Coffee" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_draft_field_has_an_input() {
        let draft = FormDraft {
            title: "t".into(),
            description: "d".into(),
            ingredients: "i".into(),
            image: "m".into(),
        };
        let values: Vec<_> = FIELDS.iter().map(|&(field, ..)| field_value(&draft, field)).collect();
        assert_eq!(values, vec!["t", "d", "i", "m"]);
    }
}
