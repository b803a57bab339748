//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use contacts_core::{
  contact::{Contact, ContactInput},
  store::ContactStore,
};

use crate::{SqliteStore, encode::RawContact, store::unique_by_id};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn input(first: &str, last: &str, email: &str, birthday: &str) -> ContactInput {
  ContactInput {
    first_name:      first.into(),
    last_name:       last.into(),
    email:           email.into(),
    phone_number:    "555".into(),
    birthday:        birthday.parse().unwrap(),
    additional_data: None,
  }
}

fn ann() -> ContactInput { input("Ann", "Lee", "a@x.com", "1990-01-01") }

fn date(y: i32, m: u32, d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(y, m, d).unwrap() }

fn ids(contacts: &[Contact]) -> Vec<i64> {
  let mut ids: Vec<i64> = contacts.iter().map(|c| c.id).collect();
  ids.sort_unstable();
  ids
}

// ─── Create / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_assigns_positive_id_and_keeps_fields() {
  let s = store().await;

  let created = s.create(ann()).await.unwrap();
  assert!(created.id > 0);
  assert_eq!(created, Contact::from_input(created.id, ann()));

  let fetched = s.get(created.id).await.unwrap();
  assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn create_keeps_additional_data() {
  let s = store().await;
  let mut with_notes = ann();
  with_notes.additional_data = Some("prefers email".into());

  let created = s.create(with_notes).await.unwrap();
  let fetched = s.get(created.id).await.unwrap().unwrap();
  assert_eq!(fetched.additional_data.as_deref(), Some("prefers email"));
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get(42).await.unwrap().is_none());
}

#[tokio::test]
async fn list_returns_everything() {
  let s = store().await;
  assert!(s.list().await.unwrap().is_empty());

  let a = s.create(ann()).await.unwrap();
  let b = s.create(input("Bob", "Ray", "b@y.org", "1985-03-04")).await.unwrap();

  let all = s.list().await.unwrap();
  assert_eq!(ids(&all), vec![a.id, b.id]);
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_is_full_replace() {
  let s = store().await;
  let mut original = ann();
  original.additional_data = Some("old note".into());
  let created = s.create(original).await.unwrap();

  let replacement = input("Annie", "Leigh", "annie@x.com", "1991-02-03");
  let updated = s.update(created.id, replacement.clone()).await.unwrap().unwrap();
  assert_eq!(updated, Contact::from_input(created.id, replacement.clone()));

  let fetched = s.get(created.id).await.unwrap().unwrap();
  assert_eq!(fetched, Contact::from_input(created.id, replacement));
  // Omitted optional data is cleared, not merged.
  assert_eq!(fetched.additional_data, None);
}

#[tokio::test]
async fn update_missing_returns_none() {
  let s = store().await;
  assert!(s.update(9, ann()).await.unwrap().is_none());
  assert!(s.list().await.unwrap().is_empty());
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_returns_last_values_and_is_permanent() {
  let s = store().await;
  let created = s.create(ann()).await.unwrap();

  let deleted = s.delete(created.id).await.unwrap();
  assert_eq!(deleted, Some(created.clone()));

  assert!(s.get(created.id).await.unwrap().is_none());
  assert!(s.delete(created.id).await.unwrap().is_none());
  assert!(s.update(created.id, ann()).await.unwrap().is_none());
}

#[tokio::test]
async fn deleted_ids_are_not_reused() {
  let s = store().await;
  let first = s.create(ann()).await.unwrap();
  s.delete(first.id).await.unwrap();

  let second = s.create(ann()).await.unwrap();
  assert!(second.id > first.id);
}

// ─── Search ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn search_matches_names_and_email_ignoring_case() {
  let s = store().await;
  let ann = s.create(ann()).await.unwrap();
  let bob = s.create(input("Bob", "Annandale", "bob@y.org", "1985-03-04")).await.unwrap();
  let cat = s.create(input("Cat", "Moss", "cat@annex.net", "1970-07-07")).await.unwrap();
  s.create(input("Dan", "Ho", "dan@z.io", "1999-09-09")).await.unwrap();

  let hits = s.search("ANN").await.unwrap();
  assert_eq!(ids(&hits), vec![ann.id, bob.id, cat.id]);

  let hits = s.search("y.ORG").await.unwrap();
  assert_eq!(ids(&hits), vec![bob.id]);
}

#[tokio::test]
async fn search_ignores_phone_and_notes() {
  let s = store().await;
  let mut contact = ann();
  contact.phone_number = "0123-zzz".into();
  contact.additional_data = Some("zzz".into());
  s.create(contact).await.unwrap();

  assert!(s.search("zzz").await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_search_matches_everything() {
  let s = store().await;
  s.create(ann()).await.unwrap();
  s.create(input("Bob", "Ray", "b@y.org", "1985-03-04")).await.unwrap();

  assert_eq!(s.search("").await.unwrap().len(), 2);
}

#[tokio::test]
async fn search_folds_non_ascii_case() {
  let s = store().await;
  let olena = s.create(input("Олена", "Шевченко", "o@x.ua", "1990-01-01")).await.unwrap();
  let emile = s.create(input("Émile", "Zola", "ez@x.fr", "1840-04-02")).await.unwrap();
  s.create(input("Bob", "Ray", "b@y.org", "1985-03-04")).await.unwrap();

  assert_eq!(ids(&s.search("олена").await.unwrap()), vec![olena.id]);
  assert_eq!(ids(&s.search("ШЕВЧ").await.unwrap()), vec![olena.id]);
  assert_eq!(ids(&s.search("émile").await.unwrap()), vec![emile.id]);
  assert_eq!(ids(&s.search("ÉMI").await.unwrap()), vec![emile.id]);
}

#[tokio::test]
async fn search_treats_wildcards_literally() {
  let s = store().await;
  let percent = s.create(input("100%", "Real", "p@x.com", "1990-01-01")).await.unwrap();
  s.create(input("Bob", "Ray", "b@y.org", "1985-03-04")).await.unwrap();

  assert_eq!(ids(&s.search("%").await.unwrap()), vec![percent.id]);
  assert!(s.search("_ob").await.unwrap().is_empty());
}

// ─── Upcoming birthdays ──────────────────────────────────────────────────────

#[tokio::test]
async fn upcoming_birthdays_covers_today_through_seven_days() {
  let s = store().await;
  let in_six  = s.create(input("Six", "Days", "6@x.com", "1990-06-07")).await.unwrap();
  let today   = s.create(input("To", "Day", "0@x.com", "2001-06-01")).await.unwrap();
  let in_sev  = s.create(input("Sev", "En", "7@x.com", "1975-06-08")).await.unwrap();
  s.create(input("Eight", "Days", "8@x.com", "1990-06-09")).await.unwrap();
  s.create(input("Yester", "Day", "y@x.com", "1990-05-31")).await.unwrap();
  s.create(input("Other", "Month", "o@x.com", "1990-07-03")).await.unwrap();

  let hits = s.upcoming_birthdays(date(2024, 6, 1)).await.unwrap();
  assert_eq!(ids(&hits), vec![in_six.id, today.id, in_sev.id]);
}

#[tokio::test]
async fn upcoming_birthdays_wraps_year_end() {
  let s = store().await;
  let nye = s.create(input("New", "Year", "n@x.com", "1980-01-02")).await.unwrap();
  let dec = s.create(input("Dec", "Ember", "d@x.com", "1980-12-30")).await.unwrap();
  s.create(input("Mid", "Jan", "m@x.com", "1980-01-15")).await.unwrap();

  let hits = s.upcoming_birthdays(date(2023, 12, 28)).await.unwrap();
  assert_eq!(ids(&hits), vec![nye.id, dec.id]);
}

#[tokio::test]
async fn upcoming_birthdays_includes_every_contact_sharing_a_day() {
  let s = store().await;
  let a = s.create(input("Twin", "One", "1@x.com", "1990-06-02")).await.unwrap();
  let b = s.create(input("Twin", "Two", "2@x.com", "1990-06-02")).await.unwrap();

  let hits = s.upcoming_birthdays(date(2024, 6, 1)).await.unwrap();
  assert_eq!(ids(&hits), vec![a.id, b.id]);
}

#[tokio::test]
async fn leap_day_birthday_skipped_in_common_year() {
  let s = store().await;
  let leapling = s.create(input("Leap", "Ling", "l@x.com", "2000-02-29")).await.unwrap();

  assert!(s.upcoming_birthdays(date(2023, 2, 25)).await.unwrap().is_empty());
  let hits = s.upcoming_birthdays(date(2024, 2, 25)).await.unwrap();
  assert_eq!(ids(&hits), vec![leapling.id]);
}

#[tokio::test]
async fn no_birthdays_in_empty_store() {
  let s = store().await;
  assert!(s.upcoming_birthdays(date(2024, 6, 1)).await.unwrap().is_empty());
}

fn raw(id: i64, first: &str) -> RawContact {
  RawContact {
    id,
    first_name:      Some(first.into()),
    last_name:       None,
    email:           None,
    phone_number:    None,
    birthday:        Some("1990-06-02".into()),
    additional_data: None,
  }
}

#[test]
fn repeated_matches_collapse_to_first_occurrence() {
  let rows = vec![raw(2, "Two"), raw(1, "One"), raw(2, "Two again"), raw(1, "One again")];

  let unique = unique_by_id(rows);
  let seen: Vec<(i64, Option<&str>)> =
    unique.iter().map(|r| (r.id, r.first_name.as_deref())).collect();
  assert_eq!(seen, vec![(2, Some("Two")), (1, Some("One"))]);
}
