use crate::domain::errors::DomainError;

const CNT_ARTICLE_PKEY: &str = "articles_pkey";
const CNT_ARTICLE_STATUS_CHECK: &str = "articles_status_check";
const CNT_ARTICLE_SCORE_CHECK: &str = "articles_score_check";
const CNT_EVENT_KIND_CHECK: &str = "article_events_kind_check";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::article_not_found(),
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_PKEY => DomainError::Conflict("article already exists".into()),
                    CNT_ARTICLE_STATUS_CHECK => {
                        DomainError::Validation("unsupported article status".into())
                    }
                    CNT_ARTICLE_SCORE_CHECK => {
                        DomainError::Validation("score must be between 0 and 1".into())
                    }
                    CNT_EVENT_KIND_CHECK => {
                        DomainError::Validation("unsupported article event kind".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
