//! # TUI Components
//!
//! All widgets drawn by the terminal adapter.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Built fresh each frame from `App` fields:
//! - `TitleBar`: server URL and status message
//! - `StatusLine`: word count and loading spinner
//! - `SubmitButton`: "Start Editing", coloured by submit state
//! - `CardView`: one revision card
//!
//! ### Stateful Components (Event-Driven)
//!
//! Keep local state across frames and emit events:
//! - `InputBox`: editable text field (text and instruction)
//! - `OutputList`: scrollable card stack, state in `OutputListState`
//!
//! Components receive their data as props, never by reaching into `App`.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs
//! ├── status_line.rs
//! ├── submit_button.rs
//! ├── card.rs
//! ├── output_list.rs
//! └── input_box/        (editable field, cursor, row layout)
//! ```

pub mod card;
pub mod input_box;
pub mod output_list;
pub mod status_line;
pub mod submit_button;
pub mod title_bar;

pub use input_box::{InputBox, InputEvent};
pub use output_list::{OutputList, OutputListState};
pub use status_line::StatusLine;
pub use submit_button::SubmitButton;
pub use title_bar::TitleBar;
