pub mod student_fail;
pub mod student_pass;
pub mod student_score;
