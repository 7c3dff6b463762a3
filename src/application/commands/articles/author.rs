use crate::{
    application::error::ApplicationResult,
    domain::article::{AuthorId, AuthorInfo},
};

/// Author block of a create or update request.
#[derive(Debug, Clone, Default)]
pub struct AuthorInput {
    pub author_id: String,
    pub name: String,
    pub email: Option<String>,
    pub profile_image: Option<String>,
}

impl AuthorInput {
    pub(super) fn into_domain(self) -> ApplicationResult<AuthorInfo> {
        Ok(AuthorInfo {
            author_id: AuthorId::new(self.author_id)?,
            name: self.name,
            email: non_blank(self.email),
            profile_image: non_blank(self.profile_image),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
