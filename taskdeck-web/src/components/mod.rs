pub(crate) mod header_nav_item;
pub(crate) mod loading;
pub(crate) mod task_form;
pub(crate) mod task_list;
pub(crate) mod toast;
pub(crate) mod user_dropdown;

// Re-export components for convenience
pub use task_form::{TaskForm, TaskFormData};
pub use task_list::TaskList;
pub use toast::Toast;
