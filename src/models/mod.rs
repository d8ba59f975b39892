// Data Models
pub mod modal;
pub mod panel_state;
pub mod staging;

pub use modal::{ModalState, PendingAction};
pub use panel_state::PanelState;
pub use staging::{StagingRegisters, TransferKind};
