use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Required registration fields, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    Name,
    Email,
    Phone,
    Address,
}

impl RequiredField {
    pub const ALL: [RequiredField; 4] = [
        RequiredField::Name,
        RequiredField::Email,
        RequiredField::Phone,
        RequiredField::Address,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RequiredField::Name => "サロン名",
            RequiredField::Email => "メールアドレス",
            RequiredField::Phone => "電話番号",
            RequiredField::Address => "住所",
        }
    }

    /// User-facing prompt asking for the field to be filled in.
    pub fn prompt(self) -> String {
        format!("{}を入力してください", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("required field {field:?} is empty")]
pub struct MissingFieldError {
    pub field: RequiredField,
}
