// Layout and display
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod page_header;
pub mod skeleton;

// Dashboard widgets
pub mod chart;
pub mod stat_card;
pub mod status_panel;

// Forms
pub mod form_select;
pub mod input;

// Overlays
pub mod alert_dialog;
pub mod dialog;
pub mod toast;

pub use alert_dialog::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use chart::*;
pub use data_table::*;
pub use dialog::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use skeleton::*;
pub use stat_card::*;
pub use status_panel::*;
pub use toast::*;
