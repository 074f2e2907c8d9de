use tracing::info;
use crate::context::AppContext;
use crate::params::requests::user::RegisterParams;
use crate::params::responses::user::RegisterSuccess;
use crate::utils::config::CountingMode;
use crate::utils::error::AppError;
use crate::utils::mailer::notify_user_total;
use crate::utils::password::stored_password;

/// A notification goes out whenever the total lands on a multiple of this.
pub const NOTIFY_EVERY: i64 = 10;

pub struct RegisterService;

impl RegisterService {

    pub async fn register(ctx: &AppContext, params: RegisterParams) -> Result<RegisterSuccess, AppError> {
        info!("Login attempt - Username: {}", params.username);

        let password = stored_password(ctx.password_storage, &params.password).map_err(AppError::Internal)?;

        let mut session = ctx.store.session().await?;
        let (user, total) = match ctx.counting {
            CountingMode::TwoStep => {
                let user = session.insert_user(&params.username, &password).await?;
                let total = session.count_users().await?;
                (user, total)
            }
            CountingMode::Atomic => session.insert_user_counted(&params.username, &password).await?,
        };
        drop(session);

        if Self::should_notify(total) {
            notify_user_total(ctx.notifier.as_ref(), total).await;
        }

        Ok(RegisterSuccess::new(user, total))
    }

    pub fn should_notify(total: i64) -> bool {
        total > 0 && total % NOTIFY_EVERY == 0
    }
}
