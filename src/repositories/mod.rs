mod supabase_submission_repository;
mod traits;

pub use supabase_submission_repository::SupabaseSubmissionRepository;
pub use traits::SubmissionRepository;
