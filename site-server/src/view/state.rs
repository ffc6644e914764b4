//! List view state

use store_client::StoreResult;

use super::placeholder::{EmptyState, Placeholder};

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Populated(Vec<T>),
    Empty,
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn from_result(result: StoreResult<Vec<T>>) -> Self {
        match result {
            Ok(items) if items.is_empty() => ViewState::Empty,
            Ok(items) => ViewState::Populated(items),
            Err(e) => ViewState::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Loaded rows, empty unless populated
    pub fn items(&self) -> &[T] {
        match self {
            ViewState::Populated(items) => items,
            _ => &[],
        }
    }

    pub fn render<'a>(
        &'a self,
        display: ErrorDisplay,
        placeholder: Placeholder,
        empty: &'static EmptyState,
    ) -> Render<'a, T> {
        match self {
            ViewState::Loading => Render::Skeleton(placeholder),
            ViewState::Populated(items) => Render::Items(items),
            ViewState::Empty => Render::EmptyState(empty),
            ViewState::Failed(_) if display == ErrorDisplay::CollapseToEmpty => {
                Render::EmptyState(empty)
            }
            ViewState::Failed(message) => Render::ErrorBanner(message),
        }
    }
}

/// How a failed fetch is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorDisplay {
    /// Same as an empty list
    #[default]
    CollapseToEmpty,
    /// Distinct error banner
    Banner,
}

/// What a section draws
#[derive(Debug, PartialEq)]
pub enum Render<'a, T> {
    Skeleton(Placeholder),
    Items(&'a [T]),
    EmptyState(&'static EmptyState),
    ErrorBanner(&'a str),
}
