//! Board view state machine.
//!
//! Holds the ephemeral client state (loaded posts, draft, edit buffer,
//! pagination, loading and error flags) and applies user actions to it.
//! Network-backed actions go through the [`BoardApi`]; the server's reply is
//! always what ends up in the local post list.

use board_core::{Post, PostId};

use crate::api::{ApiError, BoardApi};
use crate::pagination::Pager;
use crate::validation;

/// An in-place edit of one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub id: PostId,
    pub buffer: String,
    pub error: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Showing the list.
    #[default]
    Idle,
    Editing(EditState),
}

pub struct BoardView<A> {
    api: A,
    posts: Vec<Post>,
    draft: String,
    draft_error: Option<&'static str>,
    mode: Mode,
    loading: bool,
    remote_error: Option<String>,
    pager: Pager,
}

impl<A: BoardApi> BoardView<A> {
    pub fn new(api: A) -> Self {
        Self::with_pager(api, Pager::default())
    }

    pub fn with_pager(api: A, pager: Pager) -> Self {
        Self {
            api,
            posts: Vec::new(),
            draft: String::new(),
            draft_error: None,
            mode: Mode::Idle,
            loading: false,
            remote_error: None,
            pager,
        }
    }

    // --- state accessors ---

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn draft_error(&self) -> Option<&'static str> {
        self.draft_error
    }

    pub fn draft_counter(&self) -> String {
        validation::counter(&self.draft)
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn remote_error(&self) -> Option<&str> {
        self.remote_error.as_deref()
    }

    pub fn pager(&self) -> Pager {
        self.pager
    }

    pub fn page_count(&self) -> usize {
        self.pager.page_count(self.posts.len())
    }

    /// Posts on the current page.
    pub fn visible_posts(&self) -> &[Post] {
        &self.posts[self.pager.range(self.posts.len())]
    }

    // --- loading ---

    /// Fetch the full list from the backend.
    pub async fn mount(&mut self) {
        self.loading = true;
        let result = self.api.list().await;
        self.loading = false;

        match result {
            Ok(posts) => {
                self.posts = posts;
                self.pager.clamp(self.posts.len());
                self.remote_error = None;
            }
            Err(e) => self.fail(e),
        }
    }

    // --- draft ---

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.draft_error = validation::validate(&self.draft);
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
        self.draft_error = None;
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && validation::validate(&self.draft).is_none()
    }

    /// Create a post from the draft. Returns `true` when the post was created.
    pub async fn submit(&mut self) -> bool {
        self.draft_error = validation::validate(&self.draft);
        if !self.can_submit() {
            return false;
        }

        self.loading = true;
        let result = self.api.create(&self.draft).await;
        self.loading = false;

        match result {
            Ok(post) => {
                self.posts.insert(0, post);
                self.clear_draft();
                self.pager.first_page();
                self.remote_error = None;
                true
            }
            Err(e) => {
                self.fail(e);
                false
            }
        }
    }

    // --- editing ---

    /// Open the post with `id` for editing. Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: &str) {
        if let Some(post) = self.posts.iter().find(|p| p.id == *id) {
            self.mode = Mode::Editing(EditState {
                id: post.id.clone(),
                buffer: post.text.clone(),
                error: None,
            });
        }
    }

    pub fn set_edit_buffer(&mut self, text: impl Into<String>) {
        if let Mode::Editing(edit) = &mut self.mode {
            edit.buffer = text.into();
            edit.error = validation::validate(&edit.buffer);
        }
    }

    pub fn can_save(&self) -> bool {
        match &self.mode {
            Mode::Editing(edit) => !self.loading && validation::validate(&edit.buffer).is_none(),
            Mode::Idle => false,
        }
    }

    /// Send the edit buffer. Returns `true` when the post was updated.
    pub async fn save_edit(&mut self) -> bool {
        let Mode::Editing(edit) = &mut self.mode else {
            return false;
        };
        edit.error = validation::validate(&edit.buffer);
        if edit.error.is_some() || self.loading {
            return false;
        }
        let (id, buffer) = (edit.id.clone(), edit.buffer.clone());

        self.loading = true;
        let result = self.api.update(id.as_str(), &buffer).await;
        self.loading = false;

        match result {
            Ok(updated) => {
                if let Some(slot) = self.posts.iter_mut().find(|p| p.id == updated.id) {
                    *slot = updated;
                }
                self.mode = Mode::Idle;
                self.remote_error = None;
                true
            }
            Err(e) => {
                self.fail(e);
                false
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.mode = Mode::Idle;
    }

    // --- deletion ---

    /// Delete the post with `id`. Returns `true` when the post was removed.
    pub async fn delete(&mut self, id: &str) -> bool {
        self.loading = true;
        let result = self.api.delete(id).await;
        self.loading = false;

        match result {
            Ok(()) => {
                self.posts.retain(|p| p.id != *id);
                if matches!(&self.mode, Mode::Editing(edit) if edit.id == *id) {
                    self.mode = Mode::Idle;
                }
                self.pager.clamp(self.posts.len());
                self.remote_error = None;
                true
            }
            Err(e) => {
                self.fail(e);
                false
            }
        }
    }

    // --- pagination ---

    pub fn set_page(&mut self, page: usize) {
        self.pager.set_page(page, self.posts.len());
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pager.set_page_size(page_size);
    }

    fn fail(&mut self, err: ApiError) {
        tracing::warn!(error = %err, "Board request failed");
        self.remote_error = Some(err.user_message());
    }
}
