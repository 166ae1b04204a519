//! Edit-mode rendering of a single row.

use std::fmt;

use super::Escaped;
use crate::models::Entry;

/// Displays the cells of one table row as input fields, together with the
/// buttons the client wires up by `data-purpose`.
pub struct EditRow<'a>(pub &'a Entry);

impl fmt::Display for EditRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = self.0;
        let id = entry.id;

        write!(
            f,
            "<td><input type='text' value='{}'></td>",
            Escaped(&entry.owner)
        )?;
        write!(
            f,
            "<td><input class='as-width-100pc' type='text' value='{}'><br> <form>",
            Escaped(&entry.task)
        )?;
        // (label, class, data-purpose) as the client script matches them
        let buttons = [
            ("ändern", "as-button-0", "aendern"),
            ("zurück", "as-button", "zurück"),
            ("löschen", "as-button", "loeschen"),
        ];
        for (label, class, purpose) in buttons {
            write!(
                f,
                "<input type='submit' value='{label}' class='{class}' \
                 data-purpose='{purpose}' data-lop-id='{id}'>"
            )?;
        }
        write!(f, "</form></td>")?;
        write!(f, "<td><input type='text' value='{}'></td>", entry.due_date)
    }
}
