use super::*;

pub(super) async fn check_store(pool: Option<sqlx::PgPool>) -> StoreHealth {
    let Some(pool) = pool else {
        return StoreHealth {
            backend: "memory",
            status: "ok",
            detail: None,
        };
    };

    let check = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&pool)
        .await;

    match check {
        Ok(_) => StoreHealth {
            backend: "postgres",
            status: "ok",
            detail: None,
        },
        Err(error) => StoreHealth {
            backend: "postgres",
            status: "error",
            detail: Some(format!("postgres check failed: {error}")),
        },
    }
}
