pub mod common;
pub mod effects;
pub mod lightbox;
pub mod notifications;
pub mod pages;

pub use effects::MagicEffects;
pub use lightbox::Lightbox;
pub use notifications::{Notice, NoticeBoard, NoticesContainer};
pub use pages::{LandingPage, NotFoundPage};
