// src/math/mod.rs

pub mod kinematics;

pub use kinematics::flight_time;
pub use kinematics::horizontal_distance;
pub use kinematics::max_height;
pub use kinematics::GRAVITY;
