pub mod student_fail_repo;
pub mod student_pass_repo;
pub mod student_score_repo;

pub use student_fail_repo::StudentFailRepo;
pub use student_pass_repo::StudentPassRepo;
pub use student_score_repo::StudentScoreRepo;
