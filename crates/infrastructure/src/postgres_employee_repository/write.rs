use super::*;

impl PostgresEmployeeRepository {
    pub(super) async fn insert_impl(&self, employee: NewEmployee) -> AppResult<Employee> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO employees (first_name, last_name, email)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(employee.first_name().as_str())
        .bind(employee.last_name().as_str())
        .bind(employee.email().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| email_conflict_or_internal(error, "insert employee"))?;

        Ok(employee.with_id(EmployeeId::new(id)))
    }

    pub(super) async fn update_impl(&self, employee: Employee) -> AppResult<Option<Employee>> {
        let updated = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE employees
            SET first_name = $2, last_name = $3, email = $4
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(employee.id().as_i64())
        .bind(employee.first_name().as_str())
        .bind(employee.last_name().as_str())
        .bind(employee.email().as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| email_conflict_or_internal(error, "update employee"))?;

        Ok(updated.map(|_| employee))
    }

    pub(super) async fn delete_impl(&self, id: EmployeeId) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|error| internal(error, "delete employee"))?;

        Ok(result.rows_affected() > 0)
    }
}
