//! Reusable page components.

pub mod about;
pub mod contact;
pub mod hero;
pub mod layout;
pub mod nav;
pub mod projects;
pub mod skills;
pub mod toast;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use layout::Layout;
pub use nav::Nav;
pub use projects::Projects;
pub use skills::Skills;
pub use toast::Toast;
