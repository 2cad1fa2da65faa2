//! The only code that writes `users.status`.
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};
use crate::modules::onboarding::application::domain::{OnboardingStatus, Transition};
use crate::modules::onboarding::application::ports::incoming::use_cases::TransitionFailure;

/// Conditional update: succeeds only while the row still holds `expected`.
pub async fn write_status_guarded<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    expected: OnboardingStatus,
    next: OnboardingStatus,
) -> Result<bool, DbErr> {
    let result = UserEntity::update_many()
        .col_expr(UserColumn::Status, Expr::value(next.as_str()))
        .col_expr(UserColumn::UpdatedAt, Expr::current_timestamp().into())
        .filter(UserColumn::Id.eq(user_id))
        .filter(UserColumn::Status.eq(expected.as_str()))
        .exec(conn)
        .await?;

    Ok(result.rows_affected == 1)
}

/// Applies `transition` on an existing connection or transaction.
pub async fn apply_transition<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    transition: Transition,
) -> Result<OnboardingStatus, TransitionFailure> {
    let user = UserEntity::find_by_id(user_id)
        .one(conn)
        .await
        .map_err(|e| TransitionFailure::RepositoryError(e.to_string()))?
        .ok_or(TransitionFailure::UserNotFound)?;

    let current: OnboardingStatus = user
        .status
        .parse()
        .map_err(TransitionFailure::RepositoryError)?;
    let next = transition.apply(current).map_err(TransitionFailure::Guard)?;

    let written = write_status_guarded(conn, user_id, current, next)
        .await
        .map_err(|e| TransitionFailure::RepositoryError(e.to_string()))?;
    if !written {
        return Err(TransitionFailure::RepositoryError(
            "Status changed concurrently".to_string(),
        ));
    }

    Ok(next)
}
