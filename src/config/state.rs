// src/config/state.rs

/// Which screen is on display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    List,
    Detail { slug: String },
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub view: View,

    /// Blocking alert for failed card updates; cleared by the user.
    pub alert: Option<String>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            view: View::List,
            alert: None,
        }
    }
}
