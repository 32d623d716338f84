pub mod amenity;
pub mod city;
pub mod place;
pub mod review;
pub mod state;
pub mod user;

pub use amenity::Amenity;
pub use city::City;
pub use place::Place;
pub use review::Review;
pub use state::State;
pub use user::User;
