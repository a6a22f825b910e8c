pub mod lessons;
pub mod scores;
pub mod students;
