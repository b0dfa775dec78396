use std::sync::Arc;

use roster_application::{EmployeeInput, EmployeeRepository, EmployeeService};
use roster_core::AppError;
use roster_domain::{EmployeeId, NewEmployee};

use super::InMemoryEmployeeRepository;

fn candidate(email: &str) -> NewEmployee {
    NewEmployee::new("Tohir", "Raihan", email).unwrap_or_else(|_| unreachable!())
}

#[tokio::test]
async fn insert_assigns_increasing_identifiers() {
    let repository = InMemoryEmployeeRepository::new();

    let first = repository.insert(candidate("a@example.com")).await;
    let second = repository.insert(candidate("b@example.com")).await;

    assert_eq!(first.map(|employee| employee.id()).ok(), Some(EmployeeId::new(1)));
    assert_eq!(second.map(|employee| employee.id()).ok(), Some(EmployeeId::new(2)));
}

#[tokio::test]
async fn insert_rejects_duplicate_email() {
    let repository = InMemoryEmployeeRepository::new();
    assert!(repository.insert(candidate("a@example.com")).await.is_ok());

    let duplicate = repository.insert(candidate("a@example.com")).await;

    assert!(matches!(duplicate, Err(AppError::Conflict(_))));
    assert_eq!(repository.list().await.unwrap_or_default().len(), 1);
}

#[tokio::test]
async fn email_lookup_is_exact_match() {
    let repository = InMemoryEmployeeRepository::new();
    assert!(repository.insert(candidate("Tohir@Example.com")).await.is_ok());

    let exact = repository.find_by_email("Tohir@Example.com").await;
    let folded = repository.find_by_email("tohir@example.com").await;

    assert!(matches!(exact, Ok(Some(_))));
    assert!(matches!(folded, Ok(None)));
}

#[tokio::test]
async fn identifiers_are_not_reused_after_delete() {
    let repository = InMemoryEmployeeRepository::new();
    let first = repository
        .insert(candidate("a@example.com"))
        .await
        .unwrap_or_else(|_| unreachable!());
    assert_eq!(repository.delete(first.id()).await.ok(), Some(true));

    let second = repository
        .insert(candidate("a@example.com"))
        .await
        .unwrap_or_else(|_| unreachable!());

    assert!(second.id() > first.id());
}

#[tokio::test]
async fn update_moves_email_index() {
    let repository = InMemoryEmployeeRepository::new();
    let stored = repository
        .insert(candidate("old@example.com"))
        .await
        .unwrap_or_else(|_| unreachable!());

    let updated = repository
        .update(stored.replace_details(candidate("new@example.com")))
        .await;
    assert!(matches!(updated, Ok(Some(_))));

    assert!(matches!(
        repository.find_by_email("old@example.com").await,
        Ok(None)
    ));
    assert!(matches!(
        repository.find_by_email("new@example.com").await,
        Ok(Some(_))
    ));
    assert!(repository.insert(candidate("old@example.com")).await.is_ok());
}

#[tokio::test]
async fn update_rejects_email_held_by_another_record() {
    let repository = InMemoryEmployeeRepository::new();
    assert!(repository.insert(candidate("a@example.com")).await.is_ok());
    let second = repository
        .insert(candidate("b@example.com"))
        .await
        .unwrap_or_else(|_| unreachable!());

    let result = repository
        .update(second.replace_details(candidate("a@example.com")))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn update_of_missing_record_returns_none() {
    let repository = InMemoryEmployeeRepository::new();

    let result = repository
        .update(candidate("a@example.com").with_id(EmployeeId::new(5)))
        .await;

    assert!(matches!(result, Ok(None)));
    assert!(repository.list().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn delete_of_missing_record_is_noop() {
    let repository = InMemoryEmployeeRepository::new();

    assert_eq!(repository.delete(EmployeeId::new(999)).await.ok(), Some(false));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_with_same_email_admit_exactly_one() {
    let service = EmployeeService::new(Arc::new(InMemoryEmployeeRepository::new()));

    let mut handles = Vec::new();
    for index in 0..16 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service
                .create_employee(EmployeeInput {
                    first_name: format!("Racer{index}"),
                    last_name: "Raihan".to_owned(),
                    email: "race@example.com".to_owned(),
                })
                .await
        }));
    }

    let mut created = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await {
            Ok(Ok(_)) => created += 1,
            Ok(Err(AppError::Conflict(_))) => conflicts += 1,
            other => panic!("unexpected create outcome: {other:?}"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(conflicts, 15);
    assert_eq!(service.list_employees().await.unwrap_or_default().len(), 1);
}
