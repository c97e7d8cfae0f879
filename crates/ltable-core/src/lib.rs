pub mod error;
pub mod validate;

pub mod body;
pub mod codec;
pub mod config;
pub mod signal;
pub mod show;

pub use crate::codec::variant::FormatVariant;
pub use crate::config::ShowConfig;
pub use crate::show::generate::Generator;
pub use crate::show::model::{Frame, PlayerSequence, Show};
pub use crate::show::render::RenderMode;
