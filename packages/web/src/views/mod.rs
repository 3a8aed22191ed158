mod shell;
pub use shell::Shell;

mod home;
pub use home::Home;

mod gallery;
pub use gallery::Gallery;

mod agriculture;
pub use agriculture::Agriculture;

mod events;
pub use events::Events;

mod about;
pub use about::About;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod profile;
pub use profile::Profile;

mod admin;
pub use admin::{
    AddContent, AddImage, AdminDashboard, EditContent, EditImage, ManageContent, ManageImages,
};
