pub mod day_part;
pub mod icon;
pub mod municipality;
pub mod place;
pub mod sample;
pub mod summary;
