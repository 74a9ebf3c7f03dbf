//! Value Objects - Immutable, validated primitives shared by both trackers

mod coordinates;
mod heading;
mod hex_color;
mod id_list;
pub mod timestamp;

pub use coordinates::{Latitude, Longitude};
pub use heading::Heading;
pub use hex_color::HexColor;
pub use id_list::{IdList, MAX_IDENTIFIERS};
