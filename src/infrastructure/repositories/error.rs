use crate::domain::errors::DomainError;

const CNT_POST_SLUG: &str = "blog_post_slug_key";
const CNT_TAG_SLUG: &str = "blog_tag_slug_key";
const CNT_TAG_NAME: &str = "blog_tag_name_key";
const CNT_POST_TAG_POST: &str = "blog_post_tag_post_id_fkey";
const CNT_POST_TAG_TAG: &str = "blog_post_tag_tag_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_POST_SLUG => DomainError::Conflict("post slug already exists".into()),
                    CNT_TAG_SLUG => DomainError::Conflict("tag slug already exists".into()),
                    CNT_TAG_NAME => DomainError::Conflict("tag name already exists".into()),
                    CNT_POST_TAG_POST => DomainError::NotFound("post not found".into()),
                    CNT_POST_TAG_TAG => DomainError::NotFound("tag not found".into()),
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
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    // syntax_error raised by to_tsquery
                    "42601" => {
                        return DomainError::SearchSyntax(db_err.message().to_string());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
