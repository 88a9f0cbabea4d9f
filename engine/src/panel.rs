//! # Panel Protocol
//!
//! Message protocol between the color panel view and the manager. Requests
//! and updates are JSON objects tagged by `type`:
//!
//! ```text
//! -> {"type": "applyColor", "color": {...}}
//! -> {"type": "addCustomColor", "color": {...}}
//! -> {"type": "deleteCustomColor", "index": 0}
//! -> {"type": "resetColor"}
//! -> {"type": "requestData"}
//! <- {"type": "updateData", "data": {"fixedColors": [...], "customColors": [...], "currentColor": {...}}}
//! ```
//!
//! Every handled request is answered with a fresh `updateData`.

use crate::color_manager::ColorManager;
use crate::common::ColorSpaceResult;
use crate::model::ColorScheme;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

pub const PANEL_VIEW_TYPE: &str = "colorspacePanel";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PanelRequest {
    ApplyColor { color: ColorScheme },
    AddCustomColor { color: ColorScheme },
    DeleteCustomColor { index: usize },
    ResetColor,
    RequestData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelData {
    pub fixed_colors: Vec<ColorScheme>,
    pub custom_colors: Vec<ColorScheme>,
    pub current_color: Option<ColorScheme>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PanelUpdate {
    UpdateData { data: PanelData },
}

/// The rendered side of the panel.
#[async_trait]
pub trait PanelView: Send + Sync {
    async fn post_message(&self, update: PanelUpdate) -> ColorSpaceResult<()>;
}

/// Routes panel requests to the manager and pushes state back to the view.
pub struct ColorSpacePanel {
    manager: Arc<ColorManager>,
    view: Mutex<Option<Arc<dyn PanelView>>>,
}

impl ColorSpacePanel {
    pub fn new(manager: Arc<ColorManager>) -> Self {
        Self {
            manager,
            view: Mutex::new(None),
        }
    }

    /// Attach a view and send it the initial state.
    pub async fn resolve_view(&self, view: Arc<dyn PanelView>) -> ColorSpaceResult<()> {
        match self.view.lock() {
            Ok(mut guard) => *guard = Some(view),
            Err(poisoned) => *poisoned.into_inner() = Some(view),
        }
        self.refresh().await
    }

    fn current_view(&self) -> Option<Arc<dyn PanelView>> {
        match self.view.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub async fn snapshot(&self) -> PanelData {
        let colors = self.manager.get_all_colors().await;
        PanelData {
            fixed_colors: colors.fixed,
            custom_colors: colors.custom,
            current_color: self.manager.get_workspace_color().await,
        }
    }

    /// Push the current state to the view, if one is attached.
    pub async fn refresh(&self) -> ColorSpaceResult<()> {
        let Some(view) = self.current_view() else {
            return Ok(());
        };
        let data = self.snapshot().await;
        view.post_message(PanelUpdate::UpdateData { data }).await
    }

    pub async fn handle_message(&self, request: PanelRequest) -> ColorSpaceResult<()> {
        match request {
            PanelRequest::ApplyColor { color } => self.manager.set_workspace_color(&color).await?,
            PanelRequest::AddCustomColor { color } => self.manager.add_custom_color(&color).await?,
            PanelRequest::DeleteCustomColor { index } => {
                self.manager.delete_custom_color(index).await?
            }
            PanelRequest::ResetColor => self.manager.reset_color().await?,
            PanelRequest::RequestData => {}
        }
        self.refresh().await
    }
}
