pub mod anim;
pub mod constants;
pub mod geo;
pub mod model;
pub mod particles;
pub mod pulse;
pub mod quake;
pub mod scene;
pub mod signal;
pub mod texture;

pub use anim::*;
pub use constants::*;
pub use geo::*;
pub use model::*;
pub use particles::*;
pub use pulse::*;
pub use quake::*;
pub use scene::*;
pub use signal::*;
pub use texture::*;
