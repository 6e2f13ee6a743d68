//! Domain models that mirror the `passwords` table. These stay plain data
//! holders so the store can focus on SQL and the shell on presentation.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One stored credential row.
pub struct Credential {
    /// Primary key assigned by SQLite. Edit and delete flows hand it back to
    /// the store, so it is kept even though the table only displays it.
    pub id: i64,
    /// Service label such as "GitHub".
    pub name: String,
    pub domain: String,
    /// Account name used to sign in.
    pub username: String,
    /// Stored and shown as plain text.
    pub password: String,
    /// Free-form notes, empty when the column is `NULL`.
    pub notes: String,
}

impl Credential {
    /// Attach a freshly assigned id to a draft.
    pub fn from_draft(id: i64, draft: CredentialDraft) -> Self {
        Self {
            id,
            name: draft.name,
            domain: draft.domain,
            username: draft.username,
            password: draft.password,
            notes: draft.notes,
        }
    }

    /// Pick the value a copy menu entry refers to.
    pub fn field(&self, field: CopyField) -> &str {
        match field {
            CopyField::Domain => &self.domain,
            CopyField::Username => &self.username,
            CopyField::Password => &self.password,
        }
    }
}

impl fmt::Display for Credential {
    /// `name (domain)`, used in status messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.domain)
    }
}

/// The five mutable fields of a credential, already validated by the form.
/// Both inserts and updates take this shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialDraft {
    pub name: String,
    pub domain: String,
    pub username: String,
    pub password: String,
    pub notes: String,
}

impl From<&Credential> for CredentialDraft {
    fn from(credential: &Credential) -> Self {
        Self {
            name: credential.name.clone(),
            domain: credential.domain.clone(),
            username: credential.username.clone(),
            password: credential.password.clone(),
            notes: credential.notes.clone(),
        }
    }
}

/// Fields that can be copied to the clipboard from the table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CopyField {
    Domain,
    Username,
    Password,
}

impl CopyField {
    pub const ALL: [CopyField; 3] = [CopyField::Domain, CopyField::Username, CopyField::Password];

    pub fn label(self) -> &'static str {
        match self {
            CopyField::Domain => "Domain",
            CopyField::Username => "Username",
            CopyField::Password => "Password",
        }
    }

    /// Single-key shortcut shown in the copy menu.
    pub fn shortcut(self) -> char {
        match self {
            CopyField::Domain => 'd',
            CopyField::Username => 'u',
            CopyField::Password => 'p',
        }
    }
}
