pub mod format;
pub mod model;
pub mod sanitize;
pub mod validate;

pub use model::{AuditAction, AuditLog, ErrorBody, Task, TaskPage, TaskRequest};
pub use sanitize::sanitize_input;
pub use validate::{Field, FieldError, FormErrors, TaskForm};
