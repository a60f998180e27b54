use pushkind_customers::repository::{CustomerReader, DieselRepository};

mod common;

#[test]
fn test_pool_hands_out_connections() {
    let test_db = common::TestDb::new("test_pool_hands_out_connections.db");
    let conn = test_db.pool().get();
    assert!(conn.is_ok());
}

#[test]
fn test_migrations_create_empty_customers_table() {
    let test_db = common::TestDb::new("test_migrations_create_empty_customers_table.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    assert_eq!(repo.count_customers().unwrap(), 0);
}
