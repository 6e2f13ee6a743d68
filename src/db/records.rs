use anyhow::{Context, Result};
use rusqlite::{params, Connection, Row};
use tracing::{debug, info, warn};

use crate::models::{Credential, CredentialDraft};

/// Map one `passwords` row onto the domain type. `notes` is nullable in the
/// schema, so `NULL` is folded into an empty string.
fn credential_from_row(row: &Row<'_>) -> rusqlite::Result<Credential> {
    let notes: Option<String> = row.get(5)?;
    Ok(Credential {
        id: row.get(0)?,
        name: row.get(1)?,
        domain: row.get(2)?,
        username: row.get(3)?,
        password: row.get(4)?,
        notes: notes.unwrap_or_default(),
    })
}

/// List credentials in insertion order. A non-empty `filter` keeps only rows
/// whose name or domain contains it, compared case-sensitively. `instr` is
/// used instead of `LIKE` because SQLite's `LIKE` folds ASCII case and treats
/// `%`/`_` in the user's text as wildcards.
pub fn fetch_credentials(conn: &Connection, filter: Option<&str>) -> Result<Vec<Credential>> {
    let credentials = match filter.filter(|text| !text.is_empty()) {
        None => {
            let mut stmt = conn
                .prepare(
                    "SELECT id, name, domain, username, password, notes
                     FROM passwords
                     ORDER BY id",
                )
                .context("failed to prepare credential query")?;
            let rows = stmt
                .query_map([], credential_from_row)
                .context("failed to load credentials")?
                .collect::<Result<Vec<_>, _>>()
                .context("failed to collect credentials")?;
            rows
        }
        Some(text) => {
            let mut stmt = conn
                .prepare(
                    "SELECT id, name, domain, username, password, notes
                     FROM passwords
                     WHERE instr(name, ?1) > 0 OR instr(domain, ?1) > 0
                     ORDER BY id",
                )
                .context("failed to prepare credential search")?;
            let rows = stmt
                .query_map([text], credential_from_row)
                .context("failed to search credentials")?
                .collect::<Result<Vec<_>, _>>()
                .context("failed to collect credentials")?;
            rows
        }
    };

    debug!(filter = ?filter, count = credentials.len(), "credentials fetched");
    Ok(credentials)
}

/// Insert a new credential and echo the stored row back with its id.
pub fn create_credential(conn: &Connection, draft: &CredentialDraft) -> Result<Credential> {
    conn.execute(
        "INSERT INTO passwords (name, domain, username, password, notes)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            draft.name,
            draft.domain,
            draft.username,
            draft.password,
            draft.notes
        ],
    )
    .context("failed to insert credential")?;

    let id = conn.last_insert_rowid();
    info!(id, name = %draft.name, "credential created");
    Ok(Credential::from_draft(id, draft.clone()))
}

/// Overwrite every mutable field of the row with `id`. A missing row is not
/// an error; the return value tells whether anything changed.
pub fn update_credential(conn: &Connection, id: i64, draft: &CredentialDraft) -> Result<bool> {
    let updated = conn
        .execute(
            "UPDATE passwords
             SET name = ?1, domain = ?2, username = ?3, password = ?4, notes = ?5
             WHERE id = ?6",
            params![
                draft.name,
                draft.domain,
                draft.username,
                draft.password,
                draft.notes,
                id
            ],
        )
        .context("failed to update credential")?;

    if updated == 0 {
        warn!(id, "update matched no credential");
        Ok(false)
    } else {
        info!(id, "credential updated");
        Ok(true)
    }
}

/// Remove the row with `id`. Deleting an id that does not exist is a no-op
/// reported as `false`.
pub fn delete_credential(conn: &Connection, id: i64) -> Result<bool> {
    let deleted = conn
        .execute("DELETE FROM passwords WHERE id = ?1", params![id])
        .context("failed to delete credential")?;

    if deleted == 0 {
        warn!(id, "delete matched no credential");
        Ok(false)
    } else {
        info!(id, "credential deleted");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::ensure_schema;

    fn store() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        conn
    }

    fn draft(name: &str, domain: &str, username: &str, password: &str) -> CredentialDraft {
        CredentialDraft {
            name: name.to_string(),
            domain: domain.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            notes: String::new(),
        }
    }

    fn github() -> CredentialDraft {
        draft("GitHub", "github.com", "alice", "p@ss")
    }

    fn gitlab() -> CredentialDraft {
        draft("Work tracker", "gitlab.com", "alice.w", "hunter2")
    }

    fn ids(credentials: &[Credential]) -> Vec<i64> {
        credentials.iter().map(|c| c.id).collect()
    }

    #[test]
    fn first_record_gets_id_one_with_submitted_values() {
        let conn = store();
        create_credential(&conn, &github()).unwrap();

        let all = fetch_credentials(&conn, None).unwrap();
        assert_eq!(all, vec![Credential::from_draft(1, github())]);
    }

    #[test]
    fn create_assigns_fresh_unique_ids() {
        let conn = store();
        let first = create_credential(&conn, &github()).unwrap();
        let second = create_credential(&conn, &github()).unwrap();
        assert_ne!(first.id, second.id);

        let all = fetch_credentials(&conn, None).unwrap();
        assert_eq!(ids(&all), vec![first.id, second.id]);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let conn = store();
        let first = create_credential(&conn, &github()).unwrap();
        delete_credential(&conn, first.id).unwrap();
        let second = create_credential(&conn, &gitlab()).unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn filter_matches_name_or_domain_substring() {
        let conn = store();
        create_credential(&conn, &github()).unwrap();
        create_credential(&conn, &gitlab()).unwrap();

        assert_eq!(ids(&fetch_credentials(&conn, Some("git")).unwrap()), vec![1, 2]);
        assert_eq!(ids(&fetch_credentials(&conn, Some("hub")).unwrap()), vec![1]);
        assert_eq!(ids(&fetch_credentials(&conn, Some("tracker")).unwrap()), vec![2]);
        assert!(fetch_credentials(&conn, Some("nothing")).unwrap().is_empty());
    }

    #[test]
    fn filter_ignores_username_password_and_notes() {
        let conn = store();
        let mut with_notes = github();
        with_notes.notes = "recovery codes in drawer".to_string();
        create_credential(&conn, &with_notes).unwrap();

        assert!(fetch_credentials(&conn, Some("alice")).unwrap().is_empty());
        assert!(fetch_credentials(&conn, Some("p@ss")).unwrap().is_empty());
        assert!(fetch_credentials(&conn, Some("drawer")).unwrap().is_empty());
    }

    #[test]
    fn filter_is_case_sensitive() {
        let conn = store();
        create_credential(&conn, &github()).unwrap();

        assert_eq!(fetch_credentials(&conn, Some("Git")).unwrap().len(), 1);
        assert!(fetch_credentials(&conn, Some("GITHUB")).unwrap().is_empty());
        assert!(fetch_credentials(&conn, Some("gitH")).unwrap().is_empty());
    }

    #[test]
    fn filter_treats_wildcard_characters_literally() {
        let conn = store();
        create_credential(&conn, &github()).unwrap();
        create_credential(&conn, &draft("100% Coffee", "coffee.example", "bob", "x")).unwrap();

        assert_eq!(ids(&fetch_credentials(&conn, Some("%")).unwrap()), vec![2]);
        assert!(fetch_credentials(&conn, Some("_")).unwrap().is_empty());
    }

    #[test]
    fn empty_filter_lists_everything() {
        let conn = store();
        create_credential(&conn, &github()).unwrap();
        create_credential(&conn, &gitlab()).unwrap();

        assert_eq!(
            fetch_credentials(&conn, Some("")).unwrap(),
            fetch_credentials(&conn, None).unwrap()
        );
    }

    #[test]
    fn single_space_is_still_a_filter() {
        let conn = store();
        create_credential(&conn, &github()).unwrap();
        create_credential(&conn, &gitlab()).unwrap();

        assert_eq!(ids(&fetch_credentials(&conn, Some(" ")).unwrap()), vec![2]);
    }

    #[test]
    fn update_replaces_fields_and_leaves_other_rows() {
        let conn = store();
        let first = create_credential(&conn, &github()).unwrap();
        let second = create_credential(&conn, &gitlab()).unwrap();

        let mut changed = github();
        changed.username = "alice2".to_string();
        changed.password = "n3w".to_string();
        changed.notes = "rotated".to_string();
        assert!(update_credential(&conn, first.id, &changed).unwrap());

        let all = fetch_credentials(&conn, None).unwrap();
        assert_eq!(all[0], Credential::from_draft(first.id, changed));
        assert_eq!(all[1], second);
    }

    #[test]
    fn update_of_missing_id_is_a_silent_no_op() {
        let conn = store();
        create_credential(&conn, &github()).unwrap();
        let before = fetch_credentials(&conn, None).unwrap();

        assert!(!update_credential(&conn, 42, &gitlab()).unwrap());
        assert_eq!(fetch_credentials(&conn, None).unwrap(), before);
    }

    #[test]
    fn delete_removes_row_and_repeat_is_harmless() {
        let conn = store();
        create_credential(&conn, &github()).unwrap();
        let second = create_credential(&conn, &gitlab()).unwrap();

        assert!(delete_credential(&conn, 1).unwrap());
        assert_eq!(fetch_credentials(&conn, None).unwrap(), vec![second.clone()]);

        assert!(!delete_credential(&conn, 1).unwrap());
        assert_eq!(fetch_credentials(&conn, None).unwrap(), vec![second]);
    }

    #[test]
    fn null_notes_read_back_as_empty() {
        let conn = store();
        conn.execute(
            "INSERT INTO passwords (name, domain, username, password)
             VALUES ('GitHub', 'github.com', 'alice', 'p@ss')",
            [],
        )
        .unwrap();

        let all = fetch_credentials(&conn, None).unwrap();
        assert_eq!(all[0].notes, "");
    }

    #[test]
    fn storage_errors_carry_context() {
        let conn = Connection::open_in_memory().unwrap();
        let err = fetch_credentials(&conn, None).unwrap_err();
        assert_eq!(err.to_string(), "failed to prepare credential query");
    }
}
