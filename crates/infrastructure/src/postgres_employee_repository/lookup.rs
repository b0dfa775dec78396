use super::*;

impl PostgresEmployeeRepository {
    pub(super) async fn find_by_id_impl(&self, id: EmployeeId) -> AppResult<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, first_name, last_name, email
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| internal(error, "find employee by id"))?;

        row.map(Employee::try_from).transpose()
    }

    pub(super) async fn find_by_email_impl(&self, email: &str) -> AppResult<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, first_name, last_name, email
            FROM employees
            WHERE email = $1
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| internal(error, "find employee by email"))?;

        row.map(Employee::try_from).transpose()
    }

    pub(super) async fn list_impl(&self) -> AppResult<Vec<Employee>> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, first_name, last_name, email
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| internal(error, "list employees"))?;

        rows.into_iter().map(Employee::try_from).collect()
    }
}
