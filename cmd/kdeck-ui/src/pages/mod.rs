mod activity;
mod clusters;
mod dialogs;
mod release_notes;

pub use activity::*;
pub use clusters::*;
pub use release_notes::*;
