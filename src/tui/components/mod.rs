//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: top status line
//! - `ActionBar`: Generate / Copy triggers and the current tone
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `EmailEditor`: multi-line input for the original email
//! - `TonePickerState`: tone selection overlay
//! - `ResultPanelState`: scroll position of the generated reply
//!
//! Stateful overlays and panels use the persistent state + transient wrapper
//! pattern: the `*State` struct lives in `TuiState`, the wrapper is built each
//! frame with borrowed props.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status line)
//! ├── action_bar.rs    (Triggers)
//! ├── email_editor/    (Text area for the original email)
//! ├── tone_picker.rs   (Tone overlay)
//! └── result_panel.rs  (Reply / error / loading view)
//! ```

pub mod action_bar;
pub mod email_editor;
pub mod result_panel;
pub mod title_bar;
pub mod tone_picker;

pub use action_bar::ActionBar;
pub use email_editor::{EditorEvent, EmailEditor};
pub use result_panel::{ResultPanel, ResultPanelState};
pub use title_bar::TitleBar;
pub use tone_picker::{TonePicker, TonePickerEvent, TonePickerState};
