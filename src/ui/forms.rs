use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::error::ShellError;
use crate::models::{CopyField, Credential, CredentialDraft};

/// Fields of the add/edit form, in focus order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub(crate) enum RecordField {
    #[default]
    Name,
    Domain,
    Username,
    Password,
    Notes,
}

impl RecordField {
    pub(crate) const ALL: [RecordField; 5] = [
        RecordField::Name,
        RecordField::Domain,
        RecordField::Username,
        RecordField::Password,
        RecordField::Notes,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            RecordField::Name => "Name",
            RecordField::Domain => "Domain",
            RecordField::Username => "Username",
            RecordField::Password => "Password",
            RecordField::Notes => "Notes",
        }
    }

    pub(crate) fn is_required(self) -> bool {
        !matches!(self, RecordField::Notes)
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|field| *field == self)
            .unwrap_or_default()
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Input state for the add/edit modal.
#[derive(Default, Clone)]
pub(crate) struct RecordForm {
    pub(crate) name: String,
    pub(crate) domain: String,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) notes: String,
    pub(crate) active: RecordField,
    pub(crate) error: Option<String>,
}

impl RecordForm {
    /// Pre-fill the form from the row being edited.
    pub(crate) fn from_credential(credential: &Credential) -> Self {
        Self {
            name: credential.name.clone(),
            domain: credential.domain.clone(),
            username: credential.username.clone(),
            password: credential.password.clone(),
            notes: credential.notes.clone(),
            active: RecordField::Name,
            error: None,
        }
    }

    pub(crate) fn value(&self, field: RecordField) -> &str {
        match field {
            RecordField::Name => &self.name,
            RecordField::Domain => &self.domain,
            RecordField::Username => &self.username,
            RecordField::Password => &self.password,
            RecordField::Notes => &self.notes,
        }
    }

    fn value_mut(&mut self, field: RecordField) -> &mut String {
        match field {
            RecordField::Name => &mut self.name,
            RecordField::Domain => &mut self.domain,
            RecordField::Username => &mut self.username,
            RecordField::Password => &mut self.password,
            RecordField::Notes => &mut self.notes,
        }
    }

    pub(crate) fn next_field(&mut self) {
        self.active = self.active.next();
    }

    pub(crate) fn previous_field(&mut self) {
        self.active = self.active.previous();
    }

    /// Append a character to the active field. Control characters are
    /// rejected so raw-mode key codes never end up in the database.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        let field = self.active;
        self.value_mut(field).push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        let field = self.active;
        self.value_mut(field).pop();
    }

    /// Trim every field and check the four required ones.
    pub(crate) fn parse_inputs(&self) -> Result<CredentialDraft, ShellError> {
        let draft = CredentialDraft {
            name: self.name.trim().to_string(),
            domain: self.domain.trim().to_string(),
            username: self.username.trim().to_string(),
            password: self.password.trim().to_string(),
            notes: self.notes.trim().to_string(),
        };

        let missing = [&draft.name, &draft.domain, &draft.username, &draft.password]
            .iter()
            .any(|value| value.is_empty());
        if missing {
            return Err(ShellError::MissingRequiredFields);
        }
        Ok(draft)
    }

    /// Render one `Label: value` line, highlighting the focused field.
    pub(crate) fn build_line(&self, field: RecordField) -> Line<'static> {
        let value = self.value(field);
        let is_active = self.active == field;

        let display = if value.is_empty() {
            if field.is_required() {
                "<required>".to_string()
            } else {
                "<optional>".to_string()
            }
        } else {
            value.to_string()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{}: ", field.label())),
            Span::styled(display, style),
        ])
    }

    /// Character count of the field, used to place the cursor.
    pub(crate) fn value_len(&self, field: RecordField) -> usize {
        self.value(field).chars().count()
    }
}

/// Pending deletion awaiting a yes/no answer.
#[derive(Clone)]
pub(crate) struct ConfirmDelete {
    pub(crate) credential: Credential,
}

/// Right-click style menu listing the copyable fields of one row.
#[derive(Clone)]
pub(crate) struct CopyMenu {
    pub(crate) credential: Credential,
    pub(crate) selected: usize,
}

impl CopyMenu {
    pub(crate) fn new(credential: Credential) -> Self {
        Self {
            credential,
            selected: 0,
        }
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        let len = CopyField::ALL.len() as isize;
        self.selected = (self.selected as isize + offset).rem_euclid(len) as usize;
    }

    pub(crate) fn current(&self) -> CopyField {
        CopyField::ALL[self.selected]
    }

    /// Resolve a shortcut key to the field it copies.
    pub(crate) fn field_for(ch: char) -> Option<CopyField> {
        let lowered = ch.to_ascii_lowercase();
        CopyField::ALL
            .into_iter()
            .find(|field| field.shortcut() == lowered)
    }
}
