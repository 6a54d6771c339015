//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Rows come back in storage
//! form; normalizing them is left to the caller.

pub mod daily_log_repo;
pub mod finance_category_repo;
pub mod finance_record_repo;
pub mod material_order_repo;
pub mod material_repo;
pub mod task_repo;
pub mod task_status_repo;
pub mod user_profile_repo;
pub mod user_repo;
pub mod work_repo;

pub use daily_log_repo::DailyLogRepo;
pub use finance_category_repo::FinanceCategoryRepo;
pub use finance_record_repo::FinanceRecordRepo;
pub use material_order_repo::MaterialOrderRepo;
pub use material_repo::MaterialRepo;
pub use task_repo::TaskRepo;
pub use task_status_repo::TaskStatusRepo;
pub use user_profile_repo::UserProfileRepo;
pub use user_repo::UserRepo;
pub use work_repo::WorkRepo;
