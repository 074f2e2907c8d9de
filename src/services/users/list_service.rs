use crate::context::AppContext;
use crate::models::user::User;
use crate::utils::error::AppError;

pub struct ListService;

impl ListService {
    /// Every stored user, unfiltered and unpaginated.
    pub async fn all(ctx: &AppContext) -> Result<Vec<User>, AppError> {
        let mut session = ctx.store.session().await?;
        let users = session.list_users().await?;
        Ok(users)
    }
}
