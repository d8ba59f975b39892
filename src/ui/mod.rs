// UI Layer
pub mod components;
pub mod layout;

// Re-export layout types for convenience
pub use layout::{
    ActivePanel, LayoutAreas, LayoutManager, LayoutMode, MIN_HEIGHT, MIN_WIDTH, SIDEBAR_WIDTH,
};

// Re-export components
pub use components::{ModalBox, Panel, PanelStatus, StatusBar, WarningScreen};
