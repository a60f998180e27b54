//! Sample customers loaded into an empty store at startup.

use chrono::NaiveDate;

use crate::domain::customer::NewCustomer;
use crate::domain::types::TypeConstraintError;
use crate::repository::{CustomerReader, CustomerWriter};
use crate::services::{ServiceError, ServiceResult};

/// name, email, state, country, (year, month, day)
type SampleRow = (&'static str, &'static str, &'static str, &'static str, (i32, u32, u32));

const SAMPLE_ROWS: [SampleRow; 25] = [
    ("Alice Smith", "alice.smith@example.com", "California", "USA", (1988, 3, 14)),
    ("Bob Johnson", "bob.johnson@example.com", "Texas", "USA", (1979, 11, 2)),
    ("Carol Williams", "carol.w@example.com", "New York", "USA", (1992, 6, 21)),
    ("David Brown", "david.brown@example.com", "Florida", "USA", (1985, 1, 30)),
    ("Emma Jones", "emma.jones@example.com", "Washington", "USA", (1990, 9, 9)),
    ("Frank Garcia", "frank.garcia@example.com", "California", "USA", (1975, 12, 17)),
    ("Grace Miller", "grace.miller@example.com", "Texas", "USA", (1998, 4, 5)),
    ("Henry Davis", "henry.davis@example.com", "New York", "USA", (1983, 8, 27)),
    ("Isabella Rodriguez", "isabella.r@example.com", "Florida", "USA", (1995, 2, 11)),
    ("Jack Martinez", "jack.martinez@example.com", "Washington", "USA", (1970, 7, 19)),
    ("Karen Hernandez", "karen.h@example.com", "California", "USA", (1987, 10, 3)),
    ("Liam Lopez", "liam.lopez@example.com", "Texas", "USA", (2000, 5, 25)),
    ("Mia Gonzalez", "mia.gonzalez@example.com", "New York", "USA", (1993, 12, 8)),
    ("Noah Wilson", "noah.wilson@example.com", "Florida", "USA", (1981, 3, 29)),
    ("Olivia Anderson", "olivia.anderson@example.com", "Washington", "USA", (1996, 1, 15)),
    ("Paul Thomas", "paul.thomas@example.com", "Ontario", "Canada", (1978, 6, 6)),
    ("Quinn Taylor", "quinn.taylor@example.com", "Quebec", "Canada", (1991, 9, 23)),
    ("Rachel Moore", "rachel.moore@example.com", "Ontario", "Canada", (1986, 11, 12)),
    ("Samuel Jackson", "samuel.jackson@example.com", "Quebec", "Canada", (1974, 4, 1)),
    ("Tina Martin", "tina.martin@example.com", "Ontario", "Canada", (1999, 8, 18)),
    ("Umar Lee", "umar.lee@example.com", "Quebec", "Canada", (1984, 2, 28)),
    ("Victoria Perez", "victoria.perez@example.com", "Ontario", "Canada", (1997, 7, 7)),
    ("William Thompson", "william.t@example.com", "Quebec", "Canada", (1972, 10, 31)),
    ("Xavier White", "xavier.white@example.com", "California", "USA", (1989, 5, 16)),
    ("Yara Harris", "yara.harris@example.com", "Texas", "USA", (1994, 12, 24)),
];

/// Builds the bundled sample dataset.
pub fn sample_customers() -> Result<Vec<NewCustomer>, TypeConstraintError> {
    SAMPLE_ROWS
        .iter()
        .map(|&(name, email, state, country, (year, month, day))| {
            let dob = NaiveDate::from_ymd_opt(year, month, day)
                .ok_or(TypeConstraintError::InvalidDate)?;
            NewCustomer::try_new(name, email, state, country, dob)
        })
        .collect()
}

/// Inserts `customers` only when the store holds no records yet.
///
/// Returns the number of inserted rows, which is zero for a populated store.
pub fn seed_if_empty<R>(repo: &R, customers: &[NewCustomer]) -> ServiceResult<usize>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let existing = repo.count_customers().map_err(ServiceError::from)?;
    if existing > 0 {
        log::info!("Customer store already holds {existing} record(s), skipping seed");
        return Ok(0);
    }

    let inserted = repo.create_customers(customers).map_err(|err| {
        log::error!("Failed to seed customers: {err}");
        ServiceError::from(err)
    })?;
    log::info!("Seeded {inserted} sample customer(s)");

    Ok(inserted)
}

/// Loads the bundled dataset into an empty store.
///
/// A malformed bundled row surfaces as [`ServiceError::TypeConstraint`].
pub fn seed_sample_customers<R>(repo: &R) -> ServiceResult<usize>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let customers = sample_customers()?;
    seed_if_empty(repo, &customers)
}
