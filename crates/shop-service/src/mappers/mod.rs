//! Entity-DTO mappers.

use crate::dto::{UserInfo, UserListResponse};
use shop_core::{Page, User};

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into_inner(),
            password: user.password,
            mobile: user.mobile,
            nick_name: user.nick_name,
            birthday: user.birthday.map(|b| b.timestamp()),
            gender: user.gender.as_str().to_string(),
            role: user.role.code(),
        }
    }
}

/// Converts a page of users to a user list response.
impl From<Page<User>> for UserListResponse {
    fn from(page: Page<User>) -> Self {
        Self {
            total: page.total_elements,
            data: page.content.into_iter().map(UserInfo::from).collect(),
        }
    }
}
