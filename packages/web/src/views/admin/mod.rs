mod dashboard;
pub use dashboard::AdminDashboard;

mod images;
pub use images::{AddImage, EditImage, ManageImages};

mod content;
pub use content::{AddContent, EditContent, ManageContent};
