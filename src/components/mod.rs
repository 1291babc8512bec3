pub mod average_score;
pub mod score_field;
pub mod student_drawer;
