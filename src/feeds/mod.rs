pub mod games;
pub mod lines;
pub mod media;
pub mod records;
pub mod schedule;
pub mod scoreboard;
