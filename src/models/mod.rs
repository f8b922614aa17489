mod enums;
mod favorite;
mod post;
mod settings;

pub use enums::{Length, Platform, Tone};
pub use favorite::Favorite;
pub use post::Post;
pub use settings::Settings;
