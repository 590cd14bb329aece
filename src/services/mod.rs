pub mod assignments;
pub mod auth;
pub mod pdfs;
pub mod submissions;
pub mod system;
pub mod users;
pub mod vocabulary;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use pdfs::PdfService;
pub use submissions::SubmissionService;
pub use system::SystemService;
pub use users::UserService;
pub use vocabulary::VocabularyService;
