//! Small utilities that sit beside the tab model.

mod names;

pub use names::extract_quick_tab_name;
