//! Page State and Transitions

use tracing::{debug, info, warn};

use crate::domain::{CatalogItem, CatalogResult, Entity, FormDraft, ItemId, ItemPayload};
use crate::filter::filter_items;
use crate::notification::{self, Notification};

/// Question put to the confirmation provider before a delete
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this coffee?";

/// Editor field addressed by `Event::DraftChanged`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    Ingredients,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    Create,
    Update,
}

/// Everything that can happen to the page
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Full refetch (mount, and after every successful mutation)
    Load,
    LoadFinished(CatalogResult<Vec<CatalogItem>>),
    SearchChanged(String),
    OpenCreate,
    OpenEdit(ItemId),
    DraftChanged(DraftField, String),
    CloseEditor,
    Submit,
    SaveFinished { kind: SaveKind, result: CatalogResult<()> },
    DeleteRequested(ItemId),
    DeleteConfirmed(ItemId),
    DeleteCancelled(ItemId),
    DeleteFinished { id: ItemId, result: CatalogResult<()> },
}

/// Work a transition asks its owner to carry out
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchAll,
    Create(ItemPayload),
    Update(ItemId, ItemPayload),
    Delete(ItemId),
    /// Ask the confirmation provider about deleting this id
    Confirm(ItemId),
    Notify(Notification),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    /// Last successful full fetch
    pub items: Vec<CatalogItem>,
    /// `filter_items(items, search_text)`, kept in sync by every transition
    pub filtered_items: Vec<CatalogItem>,
    /// Item being edited; `None` in create mode
    pub editing: Option<CatalogItem>,
    pub editor_open: bool,
    pub draft: FormDraft,
    pub is_loading: bool,
    pub search_text: String,
    /// Delete waiting on the confirmation provider
    pub pending_delete: Option<ItemId>,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the editor's submit button is enabled
    pub fn can_submit(&self) -> bool {
        self.editor_open && self.draft.can_submit(self.editing.as_ref())
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.is_some()
    }

    pub fn find(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn refilter(&mut self) {
        self.filtered_items = filter_items(&self.items, &self.search_text);
    }

    fn close_editor(&mut self) {
        self.editor_open = false;
        self.editing = None;
        self.draft = FormDraft::default();
    }

    fn begin_load(&mut self) -> Vec<Effect> {
        self.is_loading = true;
        vec![Effect::FetchAll]
    }

    /// Advance the state by one event
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Load => self.begin_load(),

            Event::LoadFinished(Ok(items)) => {
                info!("[CATALOG] Loaded {} items", items.len());
                self.is_loading = false;
                self.items = items;
                self.refilter();
                vec![]
            }
            Event::LoadFinished(Err(e)) => {
                warn!("[CATALOG] Load failed: {}", e);
                self.is_loading = false;
                vec![Effect::Notify(Notification::error(notification::LOAD_FAILED))]
            }

            Event::SearchChanged(text) => {
                self.search_text = text;
                self.refilter();
                vec![]
            }

            Event::OpenCreate => {
                self.editing = None;
                self.draft = FormDraft::default();
                self.editor_open = true;
                vec![]
            }
            Event::OpenEdit(id) => {
                let Some(item) = self.find(&id).cloned() else {
                    debug!("[CATALOG] Edit requested for unknown id {}", id);
                    return vec![];
                };
                self.draft = FormDraft::from_item(&item);
                self.editing = Some(item);
                self.editor_open = true;
                vec![]
            }
            Event::DraftChanged(field, value) => {
                let slot = match field {
                    DraftField::Title => &mut self.draft.title,
                    DraftField::Description => &mut self.draft.description,
                    DraftField::Ingredients => &mut self.draft.ingredients,
                    DraftField::Image => &mut self.draft.image,
                };
                *slot = value;
                vec![]
            }
            Event::CloseEditor => {
                self.close_editor();
                vec![]
            }

            Event::Submit => {
                if !self.can_submit() {
                    debug!("[CATALOG] Submit ignored, draft not submittable");
                    return vec![];
                }
                let payload = self.draft.to_payload();
                match &self.editing {
                    Some(item) => vec![Effect::Update(item.id.clone(), payload)],
                    None => vec![Effect::Create(payload)],
                }
            }
            Event::SaveFinished { kind, result: Ok(()) } => {
                self.close_editor();
                let message = match kind {
                    SaveKind::Create => notification::ITEM_CREATED,
                    SaveKind::Update => notification::ITEM_UPDATED,
                };
                let mut effects = vec![Effect::Notify(Notification::success(message))];
                effects.extend(self.begin_load());
                effects
            }
            Event::SaveFinished { kind, result: Err(e) } => {
                warn!("[CATALOG] Save ({:?}) failed: {}", kind, e);
                vec![Effect::Notify(Notification::error(notification::SAVE_FAILED))]
            }

            Event::DeleteRequested(id) => {
                self.pending_delete = Some(id.clone());
                vec![Effect::Confirm(id)]
            }
            Event::DeleteConfirmed(id) => {
                if self.pending_delete.as_ref() == Some(&id) {
                    self.pending_delete = None;
                }
                vec![Effect::Delete(id)]
            }
            Event::DeleteCancelled(id) => {
                if self.pending_delete.as_ref() == Some(&id) {
                    self.pending_delete = None;
                }
                vec![]
            }
            Event::DeleteFinished { id, result: Ok(()) } => {
                info!("[CATALOG] Deleted {}", id);
                let mut effects =
                    vec![Effect::Notify(Notification::success(notification::ITEM_DELETED))];
                effects.extend(self.begin_load());
                effects
            }
            Event::DeleteFinished { id, result: Err(e) } => {
                warn!("[CATALOG] Delete of {} failed: {}", id, e);
                vec![Effect::Notify(Notification::error(notification::DELETE_FAILED))]
            }
        }
    }
}
