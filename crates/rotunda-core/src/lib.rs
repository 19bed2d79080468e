pub mod audio;
pub mod constants;
pub mod door;
pub mod error;
pub mod focus;
pub mod input;
pub mod interaction;
pub mod layout;
pub mod locomotion;
pub mod pose;
pub mod session;

pub use audio::*;
pub use constants::*;
pub use door::*;
pub use error::*;
pub use focus::{resolve, resolve_default, FocusCandidate};
pub use input::*;
pub use interaction::*;
pub use layout::*;
pub use pose::*;
pub use session::*;
