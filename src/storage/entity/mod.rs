pub mod mission;
pub mod planet;
pub mod scientist;

pub use mission::Entity as Mission;
pub use planet::Entity as Planet;
pub use scientist::Entity as Scientist;

use sea_orm::ActiveValue;

fn present<T>(value: &ActiveValue<T>) -> Option<&T>
where
    T: Into<sea_orm::Value>,
{
    match value {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Some(v),
        ActiveValue::NotSet => None,
    }
}

/// A required text column must be present and non-empty.
pub(crate) fn require_text(value: &ActiveValue<String>, field: &str) -> Result<(), String> {
    match present(value) {
        Some(v) if !v.is_empty() => Ok(()),
        _ => Err(format!("{field} must not be empty")),
    }
}

/// Foreign keys must be present and non-zero; existence is checked by the store.
pub(crate) fn require_id(value: &ActiveValue<i32>, field: &str) -> Result<(), String> {
    match present(value) {
        Some(v) if *v != 0 => Ok(()),
        _ => Err(format!("{field} is required")),
    }
}
