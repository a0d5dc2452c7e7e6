//! UI Components
//!
//! Reusable Leptos components shared by the pages.

mod feedback;
mod navbar;
mod modal;
mod delete_confirm_button;
mod stats_card;
mod project_card;
mod task_card;
mod member_list;
mod add_member_modal;
mod project_form_modal;
mod task_form_modal;

pub use feedback::{ErrorPanel, InlineError, LoadingSpinner};
pub use navbar::Navbar;
pub use modal::Modal;
pub use delete_confirm_button::DeleteConfirmButton;
pub use stats_card::StatsCard;
pub use project_card::ProjectCard;
pub use task_card::TaskCard;
pub use member_list::MemberList;
pub use add_member_modal::AddMemberModal;
pub use project_form_modal::ProjectFormModal;
pub use task_form_modal::{TaskFormMode, TaskFormModal};
