//! Themable form controls for GPUI: checkbox groups with labels, hint text and
//! status text that propagate a shared validation status to their items.

pub mod primitives;

pub mod components;

pub mod theme;

mod error;
pub use error::Error;

mod utils;
pub use utils::{
    AccessibilityLink, AutoId, ElementIdExt, conditional_aria_ids, next_generated_id,
    status_text_id, use_auto_id,
};

mod assets;
pub use assets::*;

mod init;
pub use init::*;
