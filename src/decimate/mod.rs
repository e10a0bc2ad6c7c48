pub mod commands;
pub mod coord;
pub mod coord_count;
pub mod dispatch;
pub mod distance;
pub mod douglas_peucker;
pub mod entity;
pub mod error;
pub mod input;
pub mod radial;
pub mod reader;
pub mod simplify;
pub mod tag;
pub mod text;
