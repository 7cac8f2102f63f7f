use todotasks_core::{NewTodo, Todo, TodoFilter, TodoValidationError};

fn task(id: i64, title: &str, is_checked: bool) -> Todo {
    Todo {
        id,
        title: title.to_string(),
        is_checked,
    }
}

#[test]
fn new_todo_trims_title() {
    let new = NewTodo::new("  Buy milk  ").unwrap();
    assert_eq!(new.title, "Buy milk");
}

#[test]
fn new_todo_rejects_empty_and_whitespace_titles() {
    assert_eq!(
        NewTodo::new("").unwrap_err(),
        TodoValidationError::EmptyTitle
    );
    assert_eq!(
        NewTodo::new(" \t ").unwrap_err(),
        TodoValidationError::EmptyTitle
    );
}

#[test]
fn validate_catches_manually_built_requests() {
    let request = NewTodo {
        title: "   ".to_string(),
    };
    assert_eq!(
        request.validate().unwrap_err(),
        TodoValidationError::EmptyTitle
    );
}

#[test]
fn filter_predicates_partition_tasks() {
    let tasks = [
        task(1, "A", false),
        task(2, "B", true),
        task(3, "C", false),
    ];

    let ids = |filter: TodoFilter| -> Vec<i64> {
        tasks
            .iter()
            .filter(|t| filter.matches(t))
            .map(|t| t.id)
            .collect()
    };

    assert_eq!(ids(TodoFilter::Active), vec![1, 3]);
    assert_eq!(ids(TodoFilter::Completed), vec![2]);
    assert_eq!(ids(TodoFilter::All), vec![1, 2, 3]);
}

#[test]
fn default_filter_is_all() {
    assert_eq!(TodoFilter::default(), TodoFilter::All);
}

#[test]
fn todo_serialization_uses_expected_wire_fields() {
    let todo = task(7, "ship release", true);

    let json = serde_json::to_value(&todo).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["title"], "ship release");
    assert_eq!(json["isChecked"], true);

    let decoded: Todo = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, todo);
}
